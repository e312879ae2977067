//! # Lyrics Screen
//!
//! Lists the song's lines with their translations. Lines the analysis
//! marked as learning points carry a star; Space toggles a line into the
//! study set and Enter asks core to open the study cards.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};

use crate::core::action::Action;
use crate::core::lyrics::{Lyric, LyricSelection, MIN_SELECTED_LINES, SelectionGate};
use crate::core::screen::Screen;
use crate::core::state::LyricsStatus;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Default)]
pub struct LyricsViewState {
    pub selected: usize,
    pub list_state: ListState,
}

impl LyricsViewState {
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

pub struct LyricsView<'a> {
    lyrics: &'a LyricsStatus,
    state: &'a mut LyricsViewState,
}

impl<'a> LyricsView<'a> {
    pub fn new(lyrics: &'a LyricsStatus, state: &'a mut LyricsViewState) -> Self {
        Self { lyrics, state }
    }

    /// Header badge text for the analysis result.
    pub fn badge(selection: &LyricSelection) -> String {
        format!(
            "✨ AI가 {}개의 학습 포인트를 찾았어요",
            selection.eligible_count()
        )
    }

    /// Footer text describing how far the user is from opening the cards.
    pub fn gate_text(selection: &LyricSelection) -> String {
        let selected = selection.selected_count();
        match selection.gate() {
            SelectionGate::Ready => {
                format!("{selected}/{MIN_SELECTED_LINES}줄 선택됨 · Enter: 학습 카드 만들기")
            }
            SelectionGate::NeedsMore { missing } => {
                format!("{selected}/{MIN_SELECTED_LINES}줄 선택됨 · {missing}줄 더 선택해주세요")
            }
            SelectionGate::Unsatisfiable { available } => format!(
                "이 곡은 가사가 {available}줄뿐이라 학습 카드를 만들 수 없어요 · Esc: 다른 곡 고르기"
            ),
        }
    }
}

impl EventHandler for LyricsView<'_> {
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Escape => return Some(Action::Navigate(Screen::Search)),
            TuiEvent::Retry => return Some(Action::RetryLyrics),
            _ => {}
        }

        let selection = self.lyrics.selection()?;
        let len = selection.lines().len();
        match event {
            TuiEvent::CursorUp => {
                self.state.selected = self.state.selected.saturating_sub(1);
                self.state.clamp(len);
                None
            }
            TuiEvent::CursorDown => {
                self.state.selected += 1;
                self.state.clamp(len);
                None
            }
            TuiEvent::InputChar(' ') => selection
                .lines()
                .get(self.state.selected)
                .map(|line| Action::ToggleLine(line.id.clone())),
            TuiEvent::Submit => Some(Action::Navigate(Screen::StudyCards)),
            _ => None,
        }
    }
}

impl Component for LyricsView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let selection = match self.lyrics {
            LyricsStatus::Ready(selection) => selection,
            LyricsStatus::Failed(reason) => {
                let failed = Paragraph::new(vec![
                    Line::from(Span::styled(
                        "가사를 불러오지 못했어요",
                        Style::default().fg(Color::Red),
                    )),
                    Line::from(Span::styled(
                        reason.as_str(),
                        Style::default().fg(Color::DarkGray),
                    )),
                    Line::from("Ctrl+R 로 다시 시도하세요"),
                ])
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
                frame.render_widget(failed, area);
                return;
            }
            LyricsStatus::Idle | LyricsStatus::Loading => {
                let loading = Paragraph::new("가사를 불러오는 중...")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center);
                frame.render_widget(loading, area);
                return;
            }
        };

        use Constraint::{Length, Min};
        let [badge_area, list_area, gate_area] =
            Layout::vertical([Length(1), Min(0), Length(1)]).areas(area);

        frame.render_widget(
            Paragraph::new(Self::badge(selection)).style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            badge_area,
        );

        let gate_style = if selection.can_proceed() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Yellow)
        };
        frame.render_widget(
            Paragraph::new(Self::gate_text(selection)).style(gate_style),
            gate_area,
        );

        let block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        if selection.is_empty() {
            frame.render_widget(
                Paragraph::new("표시할 가사가 없어요")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .block(block),
                list_area,
            );
            return;
        }

        self.state.clamp(selection.lines().len());
        let items: Vec<ListItem> = selection
            .lines()
            .iter()
            .enumerate()
            .map(|(i, line)| lyric_item(line, i == self.state.selected))
            .collect();
        frame.render_stateful_widget(List::new(items).block(block), list_area, &mut self.state.list_state);
    }
}

fn lyric_item(line: &Lyric, highlighted: bool) -> ListItem<'static> {
    let checkbox = if line.has_card { "[x] " } else { "[ ] " };
    let star = if line.is_eligible() { "★ " } else { "  " };

    let mut text_style = Style::default();
    if line.has_card {
        text_style = text_style.fg(Color::Magenta);
    }
    if highlighted {
        text_style = text_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    let mut lines = vec![Line::from(vec![
        Span::raw(checkbox),
        Span::styled(star, Style::default().fg(Color::Yellow)),
        Span::styled(line.lyric.clone(), text_style),
    ])];
    if !line.translated.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("      {}", line.translated),
            Style::default().fg(Color::DarkGray),
        )));
    }
    ListItem::new(lines)
}
