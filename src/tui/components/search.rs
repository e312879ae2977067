//! # Search Screen
//!
//! Query box, filter chips, and the song list. Typing edits the query in
//! core state; the list shown is always `App::visible_songs()`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SearchState` (list cursor) lives in `TuiState`
//! - `SearchScreen` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};

use crate::core::action::Action;
use crate::core::catalog::{CatalogFilter, SelectedSong, Song};
use crate::core::state::{App, CatalogStatus};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_input::{self, TextInput};
use crate::tui::event::TuiEvent;

#[derive(Default)]
pub struct SearchState {
    pub selected: usize,
    pub list_state: ListState,
}

impl SearchState {
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

pub struct SearchScreen<'a> {
    app: &'a App,
    state: &'a mut SearchState,
}

impl<'a> SearchScreen<'a> {
    pub fn new(app: &'a App, state: &'a mut SearchState) -> Self {
        Self { app, state }
    }
}

impl EventHandler for SearchScreen<'_> {
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        let songs = self.app.visible_songs();
        match event {
            TuiEvent::Escape => Some(Action::Quit),
            TuiEvent::Retry => Some(Action::RefreshCatalog),
            TuiEvent::Tab => {
                self.state.selected = 0;
                Some(Action::CycleFilter)
            }
            TuiEvent::CursorUp => {
                self.state.selected = self.state.selected.saturating_sub(1);
                self.state.clamp(songs.len());
                None
            }
            TuiEvent::CursorDown => {
                self.state.selected += 1;
                self.state.clamp(songs.len());
                None
            }
            TuiEvent::Submit => songs
                .get(self.state.selected)
                .map(|song| Action::SelectSong(SelectedSong::from(*song))),
            other => text_input::edit(&self.app.query, other).map(|query| {
                self.state.selected = 0;
                Action::SetQuery(query)
            }),
        }
    }
}

impl Component for SearchScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [input_area, chips_area, header_area, list_area] =
            Layout::vertical([Length(3), Length(1), Length(1), Min(0)]).areas(area);

        TextInput {
            title: "검색",
            value: &self.app.query,
            placeholder: "곡 제목이나 아티스트를 검색하세요",
        }
        .render(frame, input_area);

        frame.render_widget(Paragraph::new(filter_chips(self.app.filter)), chips_area);

        let songs = self.app.visible_songs();
        let header = if self.app.query.trim().is_empty() {
            "🔥 지금 인기있는 곡".to_string()
        } else {
            format!("검색 결과 {}곡", songs.len())
        };
        frame.render_widget(
            Paragraph::new(header).style(Style::default().add_modifier(Modifier::BOLD)),
            header_area,
        );

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        match &self.app.catalog_status {
            CatalogStatus::Loading => {
                let loading = Paragraph::new("곡 목록을 불러오는 중...")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .block(block);
                frame.render_widget(loading, list_area);
                return;
            }
            CatalogStatus::Failed(reason) => {
                let failed = Paragraph::new(vec![
                    Line::from(Span::styled(
                        "서버에 연결할 수 없어요",
                        Style::default().fg(Color::Red),
                    )),
                    Line::from(Span::styled(
                        reason.as_str(),
                        Style::default().fg(Color::DarkGray),
                    )),
                    Line::from("Ctrl+R 로 다시 시도하세요"),
                ])
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
                frame.render_widget(failed, list_area);
                return;
            }
            CatalogStatus::Ready => {}
        }

        if songs.is_empty() {
            let empty = Paragraph::new("검색 결과가 없어요")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, list_area);
            return;
        }

        self.state.clamp(songs.len());
        let items: Vec<ListItem> = songs
            .iter()
            .enumerate()
            .map(|(i, song)| song_item(song, i == self.state.selected))
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}

fn filter_chips(active: CatalogFilter) -> Line<'static> {
    let mut spans = Vec::new();
    for filter in CatalogFilter::ALL {
        let style = if filter == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn song_item(song: &Song, selected: bool) -> ListItem<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
    };
    let line = Line::from(vec![
        Span::styled(format!("{} ", song.title), style),
        Span::styled(format!("- {}", song.artist), style.fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(format!("[{}]", song.genre), Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::styled(format!("[{}]", song.level), Style::default().fg(Color::Green)),
    ]);
    ListItem::new(line)
}
