//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the current
//! screen, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Background work
//!
//! `update()` never does I/O. It returns an `Effect`, and this module
//! turns effects into tokio tasks that report back over an mpsc channel:
//!
//! ```text
//! FetchCatalog(gen) -> songs()           -> Action::CatalogLoaded { generation, .. }
//! FetchLyrics(id)   -> lyrics(id)        -> Action::LyricsLoaded { song_id, .. }
//! ScheduleLoading   -> sleep(delay)      -> Action::LoadingElapsed(token)
//! ```
//!
//! Late results are harmless: core drops catalog answers from an older
//! generation, lyrics nobody is waiting for, and timer tokens that were
//! revoked. The abort handles
//! kept here only stop work nobody will read.
//!
//! ## Redraw Strategy
//!
//! While something is loading the loop draws every ~80ms so the spinner
//! moves. Otherwise it sleeps up to 500ms and only redraws on events.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::api::{HttpLyricsService, fetch_lyrics, fetch_trending};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::TimerToken;
use crate::core::screen::Screen;
use crate::core::state::{App, CatalogStatus, LyricsStatus};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    LoadingScreen, LyricsView, LyricsViewState, QuizView, SearchScreen, SearchState,
    StudyCardsView, SummaryView,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Screen the view states below belong to.
    pub screen: Screen,
    pub search: SearchState,
    pub lyrics: LyricsViewState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Search,
            search: SearchState::new(),
            lyrics: LyricsViewState::new(),
        }
    }

    /// Reset cursors when core has moved to another screen.
    pub fn sync(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        debug!("View state reset for {}", screen);
        self.screen = screen;
        self.search = SearchState::new();
        self.lyrics = LyricsViewState::new();
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Abort handles for the tasks whose results can go stale.
#[derive(Default)]
struct BackgroundTasks {
    catalog: Option<tokio::task::AbortHandle>,
    lyrics: Option<tokio::task::AbortHandle>,
    loading_timer: Option<tokio::task::AbortHandle>,
}

impl BackgroundTasks {
    /// Stop tasks core is no longer waiting for.
    fn prune(&mut self, app: &App) {
        if app.catalog_status != CatalogStatus::Loading
            && let Some(handle) = self.catalog.take()
        {
            handle.abort();
        }
        if app.navigation.pending_timer().is_none()
            && let Some(handle) = self.loading_timer.take()
        {
            debug!("Aborting loading timer");
            handle.abort();
        }
        if app.lyrics != LyricsStatus::Loading
            && let Some(handle) = self.lyrics.take()
        {
            handle.abort();
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let service = Arc::new(HttpLyricsService::new(
        config.api_url.clone(),
        Duration::from_secs(config.timeout_secs),
    ));
    let mut app = App::from_config(service, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut tasks = BackgroundTasks::default();

    let effect = update(&mut app, Action::RefreshCatalog);
    handle_effect(effect, &app, &tx, &mut tasks);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        tui.sync(app.navigation.screen());

        let animating = app.navigation.screen() == Screen::Loading
            || app.catalog_status == CatalogStatus::Loading
            || app.lyrics == LyricsStatus::Loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            let action = if matches!(event, TuiEvent::ForceQuit) {
                Some(Action::Quit)
            } else {
                route_event(&app, &mut tui, &event)
            };
            let Some(action) = action else {
                continue;
            };

            debug!("Dispatching {:?}", action);
            let effect = update(&mut app, action);
            if handle_effect(effect, &app, &tx, &mut tasks) {
                should_quit = true;
                break;
            }
            tui.sync(app.navigation.screen());
        }

        if should_quit {
            break;
        }

        // Handle background task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if handle_effect(effect, &app, &tx, &mut tasks) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Hand an event to the active screen.
fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match app.navigation.screen() {
        Screen::Search => SearchScreen::new(app, &mut tui.search).handle_event(event),
        Screen::Loading => LoadingScreen {
            song: app.navigation.selected_song(),
            tick: 0,
        }
        .handle_event(event),
        Screen::Lyrics => LyricsView::new(&app.lyrics, &mut tui.lyrics).handle_event(event),
        Screen::StudyCards => StudyCardsView {
            cards: app.cards.as_ref(),
        }
        .handle_event(event),
        Screen::Quiz => QuizView {
            quiz: app.quiz.as_ref(),
        }
        .handle_event(event),
        Screen::Summary => SummaryView {
            result: app.navigation.quiz_result(),
            cards_learned: app.cards_learned(),
        }
        .handle_event(event),
    }
}

/// Perform an effect. Returns true when the loop should exit.
fn handle_effect(
    effect: Effect,
    app: &App,
    tx: &mpsc::Sender<Action>,
    tasks: &mut BackgroundTasks,
) -> bool {
    match effect {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::FetchCatalog(generation) => {
            if let Some(previous) = tasks.catalog.take() {
                previous.abort();
            }
            tasks.catalog = Some(spawn_catalog_fetch(app, generation, tx.clone()));
        }
        Effect::FetchLyrics(song_id) => {
            if let Some(previous) = tasks.lyrics.take() {
                previous.abort();
            }
            tasks.lyrics = Some(spawn_lyrics_fetch(app, song_id, tx.clone()));
        }
        Effect::ScheduleLoading { token, delay } => {
            if let Some(previous) = tasks.loading_timer.take() {
                previous.abort();
            }
            tasks.loading_timer = Some(spawn_loading_timer(token, delay, tx.clone()));
        }
    }
    tasks.prune(app);
    false
}

fn spawn_catalog_fetch(
    app: &App,
    generation: u64,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning catalog fetch (generation {})", generation);
    let service = app.service.clone();
    let handle = tokio::spawn(async move {
        let songs = fetch_trending(service.as_ref()).await;
        if tx.send(Action::CatalogLoaded { generation, songs }).is_err() {
            warn!("Failed to send catalog: receiver dropped");
        }
    });
    handle.abort_handle()
}

fn spawn_lyrics_fetch(
    app: &App,
    song_id: String,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning lyrics fetch for song {}", song_id);
    let service = app.service.clone();
    let handle = tokio::spawn(async move {
        let lyrics = fetch_lyrics(service.as_ref(), &song_id).await;
        if tx.send(Action::LyricsLoaded { song_id, lyrics }).is_err() {
            warn!("Failed to send lyrics: receiver dropped");
        }
    });
    handle.abort_handle()
}

fn spawn_loading_timer(
    token: TimerToken,
    delay: Duration,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    debug!("Arming loading timer {:?} for {:?}", token, delay);
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx.send(Action::LoadingElapsed(token)).is_err() {
            warn!("Failed to send loading timer: receiver dropped");
        }
    });
    handle.abort_handle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{SelectedSong, song};
    use crate::test_support::test_app;

    #[test]
    fn test_tui_state_resets_on_screen_change() {
        let mut tui = TuiState::new();
        tui.search.selected = 3;
        tui.sync(Screen::Search);
        assert_eq!(tui.search.selected, 3);
        tui.sync(Screen::Loading);
        assert_eq!(tui.search.selected, 0);
        assert_eq!(tui.screen, Screen::Loading);
    }

    #[test]
    fn test_route_event_follows_screen() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::Escape),
            Some(Action::Quit)
        );

        update(
            &mut app,
            Action::SelectSong(SelectedSong::from(&song("1", "Dynamite", "BTS", "초급"))),
        );
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::Escape),
            Some(Action::StartNewSong)
        );
    }

    #[tokio::test]
    async fn test_loading_timer_sends_token() {
        let mut app = test_app();
        let (tx, rx) = mpsc::channel();
        let mut tasks = BackgroundTasks::default();

        app.loading_delay = Duration::from_millis(10);
        let effect = update(
            &mut app,
            Action::SelectSong(SelectedSong::from(&song("1", "Dynamite", "BTS", "초급"))),
        );
        assert!(!handle_effect(effect, &app, &tx, &mut tasks));
        assert!(tasks.loading_timer.is_some());

        tokio::time::sleep(Duration::from_millis(100)).await;
        let action = rx.try_recv().unwrap();
        assert!(matches!(action, Action::LoadingElapsed(_)));
        update(&mut app, action);
        assert_eq!(app.navigation.screen(), Screen::Lyrics);
    }

    #[tokio::test]
    async fn test_leaving_loading_aborts_timer() {
        let mut app = test_app();
        let (tx, rx) = mpsc::channel();
        let mut tasks = BackgroundTasks::default();

        app.loading_delay = Duration::from_millis(30);
        let effect = update(
            &mut app,
            Action::SelectSong(SelectedSong::from(&song("1", "Dynamite", "BTS", "초급"))),
        );
        handle_effect(effect, &app, &tx, &mut tasks);

        let effect = update(&mut app, Action::StartNewSong);
        handle_effect(effect, &app, &tx, &mut tasks);
        assert!(tasks.loading_timer.is_none());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_catalog_refresh_replaces_pending_fetch() {
        let mut app = test_app();
        let (tx, rx) = mpsc::channel();
        let mut tasks = BackgroundTasks::default();

        let effect = update(&mut app, Action::RefreshCatalog);
        handle_effect(effect, &app, &tx, &mut tasks);
        let effect = update(&mut app, Action::RefreshCatalog);
        handle_effect(effect, &app, &tx, &mut tasks);
        assert!(tasks.catalog.is_some());

        tokio::time::sleep(Duration::from_millis(100)).await;
        let action = rx.try_recv().unwrap();
        assert!(matches!(action, Action::CatalogLoaded { generation: 2, .. }));
        update(&mut app, action);
        assert_eq!(app.catalog_status, CatalogStatus::Ready);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_quit_effect_stops_loop() {
        let app = test_app();
        let (tx, _rx) = mpsc::channel();
        let mut tasks = BackgroundTasks::default();
        assert!(handle_effect(Effect::Quit, &app, &tx, &mut tasks));
    }
}
