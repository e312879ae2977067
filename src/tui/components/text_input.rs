//! # TextInput Component
//!
//! Single-line bordered input used for the search query and fill-in-blank
//! answers. The text itself lives in core state; this component only
//! draws it and places the terminal cursor at its end.
//!
//! Korean syllables are two columns wide, so the cursor column comes from
//! the display width of the text, not its char count.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub struct TextInput<'a> {
    pub title: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
}

impl TextInput<'_> {
    /// Column offset of the cursor inside the border, clamped to `inner_width`.
    pub fn cursor_offset(value: &str, inner_width: u16) -> u16 {
        let width = u16::try_from(value.width()).unwrap_or(u16::MAX);
        width.min(inner_width.saturating_sub(1))
    }
}

impl Component for TextInput<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(Color::Magenta));

        let paragraph = if self.value.is_empty() {
            Paragraph::new(self.placeholder).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.value)
        };
        frame.render_widget(paragraph.block(block), area);

        let inner_width = area.width.saturating_sub(2);
        let x = area.x + 1 + Self::cursor_offset(self.value, inner_width);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// Apply a text-editing event to `value`. Returns `None` for events that
/// are not edits.
pub fn edit(value: &str, event: &crate::tui::event::TuiEvent) -> Option<String> {
    use crate::tui::event::TuiEvent;

    match event {
        TuiEvent::InputChar(c) => {
            let mut next = value.to_string();
            next.push(*c);
            Some(next)
        }
        TuiEvent::Paste(text) => {
            // Single-line input: newlines become spaces
            let mut next = value.to_string();
            next.push_str(&text.replace(['\r', '\n'], " "));
            Some(next)
        }
        TuiEvent::Backspace => {
            let mut next = value.to_string();
            next.pop();
            Some(next)
        }
        _ => None,
    }
}
