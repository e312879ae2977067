//! # Summary Screen
//!
//! Score, tier feedback, and the ways out: another song, a quiz retry, or
//! back to the cards for review.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::action::Action;
use crate::core::screen::Screen;
use crate::core::summary::QuizResult;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub struct SummaryView {
    pub result: Option<QuizResult>,
    pub cards_learned: usize,
}

impl SummaryView {
    pub fn score_text(result: &QuizResult) -> String {
        format!("{}문제 중 {}문제 정답", result.total, result.score)
    }
}

impl EventHandler for SummaryView {
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Submit | TuiEvent::InputChar('n') => Some(Action::StartNewSong),
            TuiEvent::InputChar('r') => Some(Action::Navigate(Screen::Quiz)),
            TuiEvent::InputChar('c') => Some(Action::Navigate(Screen::StudyCards)),
            _ => None,
        }
    }
}

impl Component for SummaryView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(result) = self.result else {
            return;
        };
        let tier = result.tier();

        let [_, body, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(16),
            Constraint::Fill(1),
        ])
        .areas(area);

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(tier.emoji()),
            Line::from(Span::styled(tier.title(), bold)),
            Line::from(Span::styled(tier.message(), Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(Span::styled(
                format!("{}%", result.percentage()),
                bold.fg(Color::Magenta),
            )),
            Line::from(Self::score_text(&result)),
            Line::from(format!("학습한 카드 {}개", self.cards_learned)),
            Line::from(""),
            Line::from(Span::styled(
                tier.encouragement(),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Enter/n: 다른 곡 학습하기 · r: 퀴즈 다시 풀기 · c: 카드 복습",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::bordered()
            .title(" 학습 결과 ")
            .border_style(Style::default().fg(Color::Magenta))
            .padding(Padding::horizontal(1));
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
            body,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_text() {
        assert_eq!(
            SummaryView::score_text(&QuizResult::new(2, 5)),
            "5문제 중 2문제 정답"
        );
    }

    #[test]
    fn test_key_bindings() {
        let mut view = SummaryView {
            result: Some(QuizResult::new(5, 5)),
            cards_learned: 5,
        };
        assert_eq!(view.handle_event(&TuiEvent::Submit), Some(Action::StartNewSong));
        assert_eq!(view.handle_event(&TuiEvent::InputChar('n')), Some(Action::StartNewSong));
        assert_eq!(
            view.handle_event(&TuiEvent::InputChar('r')),
            Some(Action::Navigate(Screen::Quiz))
        );
        assert_eq!(
            view.handle_event(&TuiEvent::InputChar('c')),
            Some(Action::Navigate(Screen::StudyCards))
        );
        assert_eq!(view.handle_event(&TuiEvent::Escape), None);
    }
}
