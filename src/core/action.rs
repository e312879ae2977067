//! # Actions
//!
//! Everything that can happen in LyricLingo becomes an `Action`.
//! User picks a song? That's `Action::SelectSong(song)`.
//! Lyrics arrive? That's `Action::LyricsLoaded { song_id, lyrics }`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing the I/O the
//! shell should perform next. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::time::Duration;

use log::{debug, info, warn};

use crate::api::Fetched;
use crate::core::cards::{CardNavigator, CardStep};
use crate::core::catalog::{SelectedSong, Song};
use crate::core::lyrics::{Lyric, LyricSelection, MIN_SELECTED_LINES, SelectionGate};
use crate::core::navigation::{NavError, TimerToken};
use crate::core::quiz::{Advance, QuizEngine};
use crate::core::screen::Screen;
use crate::core::state::{App, CatalogStatus, LyricsStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    /// (Re)fetch the trending catalog.
    RefreshCatalog,
    CatalogLoaded {
        generation: u64,
        songs: Fetched<Song>,
    },
    SetQuery(String),
    CycleFilter,
    SelectSong(SelectedSong),
    LoadingElapsed(TimerToken),
    LyricsLoaded {
        song_id: String,
        lyrics: Fetched<Lyric>,
    },
    RetryLyrics,
    ToggleLine(String),
    Navigate(Screen),
    FlipCard,
    NextCard,
    PreviousCard,
    Answer {
        question_id: String,
        value: String,
    },
    AdvanceQuiz,
    StartNewSong,
}

/// I/O requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Fetch the catalog, tagging the answer with this generation.
    FetchCatalog(u64),
    FetchLyrics(String),
    /// Sleep for `delay`, then send `Action::LoadingElapsed(token)`.
    ScheduleLoading { token: TimerToken, delay: Duration },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,

        Action::RefreshCatalog => {
            app.catalog_generation += 1;
            app.catalog_status = CatalogStatus::Loading;
            Effect::FetchCatalog(app.catalog_generation)
        }

        Action::CatalogLoaded { generation, songs } => {
            if generation != app.catalog_generation {
                debug!(
                    "Dropping catalog generation {} (current {})",
                    generation, app.catalog_generation
                );
                return Effect::None;
            }
            app.catalog_status = match &songs {
                Fetched::Failed(reason) => {
                    app.status_message = "곡 목록을 불러오지 못했어요 (Ctrl+R: 다시 시도)".to_string();
                    CatalogStatus::Failed(reason.clone())
                }
                _ => CatalogStatus::Ready,
            };
            app.catalog = songs.into_items();
            Effect::None
        }

        Action::SetQuery(query) => {
            app.query = query;
            Effect::None
        }

        Action::CycleFilter => {
            app.filter = app.filter.next();
            Effect::None
        }

        Action::SelectSong(song) => {
            let token = app.navigation.select_song(song);
            mount(app);
            Effect::ScheduleLoading {
                token,
                delay: app.loading_delay,
            }
        }

        Action::LoadingElapsed(token) => {
            if app.navigation.loading_elapsed(token) {
                mount(app)
            } else {
                Effect::None
            }
        }

        Action::LyricsLoaded { song_id, lyrics } => {
            if !app.navigation.is_current_song(&song_id)
                || app.navigation.screen() != Screen::Lyrics
                || app.lyrics != LyricsStatus::Loading
            {
                debug!("Dropping lyrics for superseded song {}", song_id);
                return Effect::None;
            }
            app.lyrics = match lyrics {
                Fetched::Failed(reason) => {
                    app.status_message = "가사를 불러오지 못했어요 (Ctrl+R: 다시 시도)".to_string();
                    LyricsStatus::Failed(reason)
                }
                fetched => LyricsStatus::Ready(LyricSelection::new(fetched.into_items())),
            };
            Effect::None
        }

        Action::RetryLyrics => {
            if app.navigation.screen() != Screen::Lyrics
                || !matches!(app.lyrics, LyricsStatus::Failed(_))
            {
                return Effect::None;
            }
            mount(app)
        }

        Action::ToggleLine(line_id) => {
            if let Some(selection) = app.lyrics.selection_mut()
                && !selection.toggle(&line_id)
            {
                debug!("Toggle ignored: no line {}", line_id);
            }
            Effect::None
        }

        Action::Navigate(target) => navigate(app, target),

        Action::FlipCard => {
            if let Some(cards) = app.cards.as_mut() {
                cards.flip();
            }
            Effect::None
        }

        Action::NextCard => match app.cards.as_mut().map(CardNavigator::next) {
            Some(CardStep::DeckComplete) => navigate(app, Screen::Quiz),
            _ => Effect::None,
        },

        Action::PreviousCard => {
            if let Some(cards) = app.cards.as_mut() {
                cards.previous();
            }
            Effect::None
        }

        Action::Answer { question_id, value } => {
            if let Some(quiz) = app.quiz.as_mut() {
                quiz.answer(&question_id, value);
            }
            Effect::None
        }

        Action::AdvanceQuiz => {
            let Some(quiz) = app.quiz.as_mut() else {
                return Effect::None;
            };
            match quiz.advance() {
                Advance::Completed(result) => {
                    info!("Quiz completed: {}/{}", result.score, result.total);
                    if let Some(song) = app.navigation.selected_song() {
                        app.studied.insert(song.id.clone());
                    }
                    match app.navigation.complete_quiz(result) {
                        Ok(()) => mount(app),
                        Err(e) => {
                            app.status_message = e.to_string();
                            Effect::None
                        }
                    }
                }
                Advance::Blocked => {
                    app.status_message = "답을 입력해주세요".to_string();
                    Effect::None
                }
                Advance::Next(_) | Advance::AlreadyCompleted => Effect::None,
            }
        }

        Action::StartNewSong => {
            app.navigation.start_new_song();
            mount(app)
        }
    }
}

/// Explicit transition requested by the current screen.
fn navigate(app: &mut App, target: Screen) -> Effect {
    let result = match check_selection_gate(app, target) {
        Ok(()) => app.navigation.navigate(target),
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        warn!("Navigation to {} rejected: {}", target, e);
        app.status_message = rejection_message(&e);
        return Effect::None;
    }
    mount(app)
}

/// Leaving the lyrics screen for the cards requires a full selection.
fn check_selection_gate(app: &App, target: Screen) -> Result<(), NavError> {
    if app.navigation.screen() != Screen::Lyrics || target != Screen::StudyCards {
        return Ok(());
    }
    let selected = app
        .lyrics
        .selection()
        .map(LyricSelection::selected_count)
        .unwrap_or(0);
    if selected >= MIN_SELECTED_LINES {
        Ok(())
    } else {
        Err(NavError::SelectionIncomplete {
            selected,
            required: MIN_SELECTED_LINES,
        })
    }
}

fn rejection_message(e: &NavError) -> String {
    match e {
        NavError::SelectionIncomplete { selected, required } => {
            format!("학습할 가사를 {required}줄 이상 선택해주세요 (현재 {selected}줄)")
        }
        NavError::NoEdge { from, to } => {
            format!("{}에서 {}(으)로 바로 갈 수 없어요", from.label(), to.label())
        }
        other => other.to_string(),
    }
}

/// Rebuild screen-local state for the screen just entered.
fn mount(app: &mut App) -> Effect {
    app.lyrics = LyricsStatus::Idle;
    app.cards = None;
    app.quiz = None;
    app.status_message.clear();

    match app.navigation.screen() {
        Screen::Search => {
            app.query.clear();
            Effect::None
        }
        Screen::Loading => Effect::None,
        Screen::Lyrics => match app.navigation.selected_song() {
            Some(song) => {
                app.lyrics = LyricsStatus::Loading;
                Effect::FetchLyrics(song.id.clone())
            }
            None => Effect::None,
        },
        Screen::StudyCards => {
            app.cards = Some(CardNavigator::reference());
            Effect::None
        }
        Screen::Quiz => {
            app.quiz = Some(QuizEngine::reference());
            Effect::None
        }
        Screen::Summary => Effect::None,
    }
}

/// The lyric-screen gate as the UI should present it.
pub fn selection_gate(app: &App) -> Option<SelectionGate> {
    app.lyrics.selection().map(LyricSelection::gate)
}
