//! # TitleBar Component
//!
//! Top bar: app name, current screen, and the song being studied.
//!
//! Purely presentational. It receives all data as props and has no
//! internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar {
//!     screen: Screen::Lyrics,
//!     song: app.navigation.selected_song(),
//! };
//! title_bar.render(frame, area);
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::catalog::SelectedSong;
use crate::core::screen::Screen;
use crate::tui::component::Component;

pub struct TitleBar<'a> {
    pub screen: Screen,
    pub song: Option<&'a SelectedSong>,
}

impl TitleBar<'_> {
    pub fn title_text(&self) -> String {
        match self.song {
            Some(song) if self.screen != Screen::Search => format!(
                " LyricLingo | {} | {} - {}",
                self.screen.label(),
                song.artist,
                song.title
            ),
            _ => format!(" LyricLingo | {}", self.screen.label()),
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.title_text(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}
