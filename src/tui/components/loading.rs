//! # Loading Screen
//!
//! Shown while the analysis delay runs after a song is picked. The screen
//! never advances itself; core moves to the lyrics when the timer action
//! arrives.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::catalog::SelectedSong;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LoadingScreen<'a> {
    pub song: Option<&'a SelectedSong>,
    /// Frame counter driving the spinner.
    pub tick: usize,
}

impl LoadingScreen<'_> {
    pub fn spinner_frame(tick: usize) -> &'static str {
        SPINNER[tick % SPINNER.len()]
    }
}

impl EventHandler for LoadingScreen<'_> {
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Escape => Some(Action::StartNewSong),
            _ => None,
        }
    }
}

impl Component for LoadingScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [_, body, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(5),
            Constraint::Fill(1),
        ])
        .areas(area);

        let mut lines = vec![
            Line::from(Span::styled(
                Self::spinner_frame(self.tick),
                Style::default().fg(Color::Magenta),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "학습하기 좋은 가사를 찾는 중이에요!",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(song) = self.song {
            lines.push(Line::from(Span::styled(
                format!("{} - {}", song.artist, song.title),
                Style::default().fg(Color::Gray),
            )));
        }

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            body,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(LoadingScreen::spinner_frame(0), LoadingScreen::spinner_frame(10));
        assert_ne!(LoadingScreen::spinner_frame(0), LoadingScreen::spinner_frame(1));
    }

    #[test]
    fn test_escape_abandons_song() {
        let mut screen = LoadingScreen { song: None, tick: 0 };
        assert_eq!(
            screen.handle_event(&TuiEvent::Escape),
            Some(Action::StartNewSong)
        );
        assert_eq!(screen.handle_event(&TuiEvent::Submit), None);
    }
}
