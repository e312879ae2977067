//! # Study Cards Screen
//!
//! One card at a time. The front shows the Korean phrase and its
//! romanization; flipping reveals meaning, cultural note, example, and a
//! similar phrase. Moving past the last card hands off to the quiz.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Padding, Paragraph, Wrap};

use crate::core::action::Action;
use crate::core::cards::{CardNavigator, StudyCard};
use crate::core::screen::Screen;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub struct StudyCardsView<'a> {
    pub cards: Option<&'a CardNavigator>,
}

impl StudyCardsView<'_> {
    pub fn counter_text(cards: &CardNavigator) -> String {
        format!("{} / {}", cards.index() + 1, cards.len())
    }
}

impl EventHandler for StudyCardsView<'_> {
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Escape => Some(Action::Navigate(Screen::Lyrics)),
            TuiEvent::InputChar(' ') => Some(Action::FlipCard),
            TuiEvent::CursorRight | TuiEvent::Submit => Some(Action::NextCard),
            TuiEvent::CursorLeft => Some(Action::PreviousCard),
            _ => None,
        }
    }
}

impl Component for StudyCardsView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(cards) = self.cards else {
            return;
        };

        use Constraint::{Length, Min};
        let [gauge_area, card_area] = Layout::vertical([Length(1), Min(0)]).areas(area);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Magenta))
            .ratio(cards.progress().clamp(0.0, 1.0))
            .label(Self::counter_text(cards));
        frame.render_widget(gauge, gauge_area);

        let card = cards.current();
        let (title, lines) = if cards.is_flipped() {
            (" 뜻 ", back_face(card))
        } else {
            (" 카드 ", front_face(card))
        };

        let block = Block::bordered()
            .title(title)
            .title_bottom(Line::from(" Space: 뒤집기 ").alignment(Alignment::Right))
            .border_style(Style::default().fg(Color::Magenta))
            .padding(Padding::uniform(1));

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
            card_area,
        );
    }
}

fn front_face(card: &StudyCard) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            card.korean.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.romaji.clone(),
            Style::default().fg(Color::Gray),
        )),
    ]
}

fn back_face(card: &StudyCard) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD);
    vec![
        Line::from(Span::styled(
            card.meaning.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("문화 노트", label)),
        Line::from(card.cultural_note.clone()),
        Line::from(""),
        Line::from(Span::styled("예문", label)),
        Line::from(card.example.clone()),
        Line::from(Span::styled(
            card.example_translation.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled("비슷한 표현", label)),
        Line::from(card.similar_phrase.clone()),
    ]
}
