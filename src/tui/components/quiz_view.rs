//! # Quiz Screen
//!
//! Multiple choice questions are answered by moving the highlight (or
//! pressing the option's number); the highlight is the recorded answer,
//! so there is no separate cursor state. Fill-in-blank questions take
//! typed text. Enter advances once the current question has an answer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Wrap};

use crate::core::action::Action;
use crate::core::quiz::{QuizEngine, QuizQuestion};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_input::{self, TextInput};
use crate::tui::event::TuiEvent;

pub struct QuizView<'a> {
    pub quiz: Option<&'a QuizEngine>,
}

impl QuizView<'_> {
    pub fn counter_text(quiz: &QuizEngine) -> String {
        format!("{} / {}", quiz.current_index() + 1, quiz.len())
    }

    fn answer(quiz: &QuizEngine, value: impl Into<String>) -> Action {
        Action::Answer {
            question_id: quiz.current_question().id().to_string(),
            value: value.into(),
        }
    }
}

/// Index of `answer` among `options`, if it is one of them.
fn chosen_index(options: &[String], answer: &str) -> Option<usize> {
    options.iter().position(|o| o == answer)
}

impl EventHandler for QuizView<'_> {
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        if matches!(event, TuiEvent::Submit) {
            return Some(Action::AdvanceQuiz);
        }

        let quiz = self.quiz?;
        match quiz.current_question() {
            QuizQuestion::MultipleChoice { options, .. } => {
                if options.is_empty() {
                    return None;
                }
                let chosen = chosen_index(options, quiz.current_answer());
                let next = match event {
                    TuiEvent::CursorUp => chosen.map_or(0, |i| i.saturating_sub(1)),
                    TuiEvent::CursorDown => chosen.map_or(0, |i| (i + 1).min(options.len() - 1)),
                    TuiEvent::InputChar(c) => {
                        let digit = c.to_digit(10)? as usize;
                        if digit == 0 || digit > options.len() {
                            return None;
                        }
                        digit - 1
                    }
                    _ => return None,
                };
                Some(Self::answer(quiz, options[next].clone()))
            }
            QuizQuestion::FillBlank { .. } => {
                text_input::edit(quiz.current_answer(), event).map(|value| Self::answer(quiz, value))
            }
        }
    }
}

impl Component for QuizView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(quiz) = self.quiz else {
            return;
        };

        use Constraint::{Length, Min};
        let [gauge_area, question_area, body_area, footer_area] =
            Layout::vertical([Length(1), Length(3), Min(0), Length(1)]).areas(area);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Magenta))
            .ratio(quiz.progress().clamp(0.0, 1.0))
            .label(Self::counter_text(quiz));
        frame.render_widget(gauge, gauge_area);

        let question = quiz.current_question();
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                question.question().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .wrap(Wrap { trim: true }),
            question_area,
        );

        let answer = quiz.current_answer();
        match question {
            QuizQuestion::MultipleChoice { options, .. } => {
                let chosen = chosen_index(options, answer);
                let lines: Vec<Line> = options
                    .iter()
                    .enumerate()
                    .map(|(i, option)| {
                        let style = if chosen == Some(i) {
                            Style::default()
                                .fg(Color::Magenta)
                                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                        } else {
                            Style::default()
                        };
                        Line::from(Span::styled(format!(" {}. {} ", i + 1, option), style))
                    })
                    .collect();
                frame.render_widget(Paragraph::new(lines), body_area);
            }
            QuizQuestion::FillBlank { sentence, hint, .. } => {
                let [sentence_area, input_area, hint_area, _] =
                    Layout::vertical([Length(2), Length(3), Length(1), Min(0)]).areas(body_area);
                frame.render_widget(
                    Paragraph::new(sentence.as_str()).style(Style::default().fg(Color::Cyan)),
                    sentence_area,
                );
                TextInput {
                    title: "정답",
                    value: answer,
                    placeholder: "답을 입력하세요",
                }
                .render(frame, input_area);
                if let Some(hint) = hint {
                    frame.render_widget(
                        Paragraph::new(format!("💡 힌트: {hint}"))
                            .style(Style::default().fg(Color::DarkGray)),
                        hint_area,
                    );
                }
            }
        }

        let footer = if !quiz.can_advance() {
            Span::styled("답을 선택하거나 입력하세요", Style::default().fg(Color::DarkGray))
        } else if quiz.is_last() {
            Span::styled("Enter: 결과 보기", Style::default().fg(Color::Green))
        } else {
            Span::styled("Enter: 다음 문제", Style::default().fg(Color::Green))
        };
        frame.render_widget(Paragraph::new(Line::from(footer)), footer_area);
    }
}
