//! # Screen Navigation
//!
//! Decides which screen is mounted and carries the selected song and the
//! quiz result between screens.
//!
//! ```text
//!   search ──select──▶ loading ──timer──▶ lyrics ──▶ studyCards ──▶ quiz ──▶ summary
//!     ▲                                     │  ▲          │                    │
//!     └──────────────back───────────────────┘  └───back───┘                    │
//!     └──────────────────────────new song──────────────────────────────────────┘
//! ```
//!
//! `navigate` only follows the drawn edges plus the two summary actions
//! (retry the quiz, review the cards). Loading, summary, and the reset to
//! search have their own entry points.
//!
//! The loading screen leaves on its own after a fixed delay. That delay
//! is modeled as a timer *token*: `select_song` hands one out, the shell
//! sleeps and reports it back via `loading_elapsed`. Every other
//! transition revokes the pending token, so a timer that fires late into
//! a changed screen is ignored.

use std::fmt;

use log::{debug, info, warn};

use super::catalog::SelectedSong;
use super::screen::Screen;
use super::summary::QuizResult;

/// Default dwell time on the loading screen.
pub const LOADING_DELAY_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// The target screen needs a selected song and there is none.
    MissingSong(Screen),
    /// The summary needs a quiz result and there is none.
    MissingResult,
    /// Screens that are only entered as a side effect (loading).
    NotNavigable(Screen),
    /// No edge from the current screen to the target.
    NoEdge { from: Screen, to: Screen },
    /// The lyrics screen has not met its selection minimum.
    SelectionIncomplete { selected: usize, required: usize },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::MissingSong(screen) => write!(f, "{screen} needs a selected song"),
            NavError::MissingResult => write!(f, "summary needs a quiz result"),
            NavError::NotNavigable(screen) => write!(f, "{screen} cannot be navigated to"),
            NavError::NoEdge { from, to } => write!(f, "no transition from {from} to {to}"),
            NavError::SelectionIncomplete { selected, required } => {
                write!(f, "select at least {required} lines ({selected} selected)")
            }
        }
    }
}

impl std::error::Error for NavError {}

/// Identifies one scheduled loading timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

/// Immutable view of the navigation state handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub screen: Screen,
    pub selected_song: Option<SelectedSong>,
    pub quiz_result: Option<QuizResult>,
}

#[derive(Debug, Default)]
pub struct Navigator {
    screen: Screen,
    selected_song: Option<SelectedSong>,
    quiz_result: Option<QuizResult>,
    pending_timer: Option<TimerToken>,
    next_token: u64,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected_song(&self) -> Option<&SelectedSong> {
        self.selected_song.as_ref()
    }

    pub fn quiz_result(&self) -> Option<QuizResult> {
        self.quiz_result
    }

    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.pending_timer
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            screen: self.screen(),
            selected_song: self.selected_song.clone(),
            quiz_result: self.quiz_result,
        }
    }

    /// Whether `song_id` is still the active song. Used to drop responses
    /// for requests that have been superseded.
    pub fn is_current_song(&self, song_id: &str) -> bool {
        self.selected_song.as_ref().is_some_and(|s| s.id == song_id)
    }

    /// Select a song and enter the loading screen. The caller must arm a
    /// timer and report the returned token to [`Navigator::loading_elapsed`].
    pub fn select_song(&mut self, song: SelectedSong) -> TimerToken {
        info!("Selected song {} ({} - {})", song.id, song.artist, song.title);
        self.selected_song = Some(song);
        self.quiz_result = None;
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending_timer = Some(token);
        self.enter(Screen::Loading);
        token
    }

    /// Timer callback. Returns true if it moved us to the lyrics screen.
    pub fn loading_elapsed(&mut self, token: TimerToken) -> bool {
        if self.pending_timer != Some(token) || self.screen() != Screen::Loading {
            debug!("Ignoring stale loading timer {:?}", token);
            return false;
        }
        self.pending_timer = None;
        self.enter(Screen::Lyrics);
        true
    }

    /// Explicit transition requested by a screen. Rejected when there is
    /// no such edge or the target screen's required state is missing.
    pub fn navigate(&mut self, target: Screen) -> Result<(), NavError> {
        if target == Screen::Loading {
            warn!("Rejected navigation to {target}: not navigable");
            return Err(NavError::NotNavigable(target));
        }
        let from = self.screen();
        if !is_edge(from, target) {
            warn!("Rejected navigation {from} -> {target}: no such edge");
            return Err(NavError::NoEdge { from, to: target });
        }
        if target.requires_song() && self.selected_song.is_none() {
            warn!("Rejected navigation to {target}: no selected song");
            return Err(NavError::MissingSong(target));
        }
        if target.requires_result() && self.quiz_result.is_none() {
            warn!("Rejected navigation to {target}: no quiz result");
            return Err(NavError::MissingResult);
        }
        self.pending_timer = None;
        self.enter(target);
        Ok(())
    }

    /// Store the final score and show the summary.
    pub fn complete_quiz(&mut self, result: QuizResult) -> Result<(), NavError> {
        if self.selected_song.is_none() {
            warn!("Rejected quiz completion: no selected song");
            return Err(NavError::MissingSong(Screen::Summary));
        }
        self.quiz_result = Some(result);
        self.pending_timer = None;
        self.enter(Screen::Summary);
        Ok(())
    }

    /// Drop the song and result and go back to search.
    pub fn start_new_song(&mut self) {
        self.selected_song = None;
        self.quiz_result = None;
        self.pending_timer = None;
        self.enter(Screen::Search);
    }

    fn enter(&mut self, screen: Screen) {
        info!("Screen transition: {} -> {}", self.screen(), screen);
        self.screen = screen;
    }
}

fn is_edge(from: Screen, to: Screen) -> bool {
    matches!(
        (from, to),
        (Screen::Lyrics, Screen::Search)
            | (Screen::Lyrics, Screen::StudyCards)
            | (Screen::StudyCards, Screen::Lyrics)
            | (Screen::StudyCards, Screen::Quiz)
            | (Screen::Summary, Screen::Quiz)
            | (Screen::Summary, Screen::StudyCards)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str) -> SelectedSong {
        SelectedSong {
            id: id.to_string(),
            title: "Dynamite".to_string(),
            artist: "BTS".to_string(),
            cover_url: String::new(),
        }
    }

    #[test]
    fn test_initial_state() {
        let nav = Navigator::new();
        assert_eq!(nav.screen(), Screen::Search);
        assert!(nav.selected_song().is_none());
        assert!(nav.quiz_result().is_none());
        assert!(nav.pending_timer().is_none());
    }

    #[test]
    fn test_select_song_enters_loading_then_lyrics() {
        let mut nav = Navigator::new();
        let token = nav.select_song(song("1"));
        assert_eq!(nav.screen(), Screen::Loading);
        assert_eq!(nav.pending_timer(), Some(token));
        assert!(nav.loading_elapsed(token));
        assert_eq!(nav.screen(), Screen::Lyrics);
        assert!(nav.pending_timer().is_none());
    }

    #[test]
    fn test_timer_fires_once() {
        let mut nav = Navigator::new();
        let token = nav.select_song(song("1"));
        assert!(nav.loading_elapsed(token));
        nav.navigate(Screen::StudyCards).unwrap();
        assert!(!nav.loading_elapsed(token));
        assert_eq!(nav.screen(), Screen::StudyCards);
    }

    #[test]
    fn test_superseded_timer_is_ignored() {
        let mut nav = Navigator::new();
        let first = nav.select_song(song("1"));
        let second = nav.select_song(song("2"));
        assert_ne!(first, second);
        assert!(!nav.loading_elapsed(first));
        assert_eq!(nav.screen(), Screen::Loading);
        assert!(nav.loading_elapsed(second));
        assert!(nav.is_current_song("2"));
    }

    #[test]
    fn test_competing_transition_cancels_timer() {
        let mut nav = Navigator::new();
        let token = nav.select_song(song("1"));
        nav.start_new_song();
        assert!(nav.pending_timer().is_none());
        assert!(!nav.loading_elapsed(token));
        assert_eq!(nav.screen(), Screen::Search);
    }

    #[test]
    fn test_off_graph_edges_rejected() {
        let mut nav = Navigator::new();
        for to in [Screen::Lyrics, Screen::StudyCards, Screen::Quiz, Screen::Summary] {
            assert_eq!(
                nav.navigate(to),
                Err(NavError::NoEdge {
                    from: Screen::Search,
                    to
                })
            );
        }

        let token = nav.select_song(song("1"));
        nav.loading_elapsed(token);
        for to in [Screen::Quiz, Screen::Summary] {
            assert_eq!(
                nav.navigate(to),
                Err(NavError::NoEdge {
                    from: Screen::Lyrics,
                    to
                })
            );
        }
        assert_eq!(nav.screen(), Screen::Lyrics);
    }

    #[test]
    fn test_back_to_search_keeps_song_but_not_a_shortcut() {
        let mut nav = Navigator::new();
        let token = nav.select_song(song("1"));
        nav.loading_elapsed(token);
        nav.navigate(Screen::Search).unwrap();
        assert!(nav.selected_song().is_some());
        assert!(nav.navigate(Screen::Quiz).is_err());
        assert_eq!(nav.screen(), Screen::Search);
    }

    #[test]
    fn test_quiz_has_no_back_edge() {
        let mut nav = Navigator::new();
        let token = nav.select_song(song("1"));
        nav.loading_elapsed(token);
        nav.navigate(Screen::StudyCards).unwrap();
        nav.navigate(Screen::Quiz).unwrap();
        assert_eq!(
            nav.navigate(Screen::StudyCards),
            Err(NavError::NoEdge {
                from: Screen::Quiz,
                to: Screen::StudyCards
            })
        );
    }

    #[test]
    fn test_loading_is_not_navigable() {
        let mut nav = Navigator::new();
        assert_eq!(
            nav.navigate(Screen::Loading),
            Err(NavError::NotNavigable(Screen::Loading))
        );
    }

    #[test]
    fn test_full_flow_and_reset() {
        let mut nav = Navigator::new();
        let token = nav.select_song(song("7"));
        nav.loading_elapsed(token);
        nav.navigate(Screen::StudyCards).unwrap();
        nav.navigate(Screen::Lyrics).unwrap();
        nav.navigate(Screen::StudyCards).unwrap();
        nav.navigate(Screen::Quiz).unwrap();
        nav.complete_quiz(QuizResult::new(3, 5)).unwrap();
        assert_eq!(nav.screen(), Screen::Summary);
        assert_eq!(nav.quiz_result(), Some(QuizResult::new(3, 5)));

        // Summary offers retries without losing state.
        nav.navigate(Screen::Quiz).unwrap();
        assert_eq!(nav.quiz_result(), Some(QuizResult::new(3, 5)));
        nav.complete_quiz(QuizResult::new(4, 5)).unwrap();
        nav.navigate(Screen::StudyCards).unwrap();
        assert_eq!(nav.screen(), Screen::StudyCards);

        nav.start_new_song();
        let snap = nav.snapshot();
        assert_eq!(snap.screen, Screen::Search);
        assert!(snap.selected_song.is_none());
        assert!(snap.quiz_result.is_none());
    }

    #[test]
    fn test_complete_quiz_without_song_is_rejected() {
        let mut nav = Navigator::new();
        assert!(nav.complete_quiz(QuizResult::new(1, 5)).is_err());
        assert_eq!(nav.screen(), Screen::Search);
    }

    #[test]
    fn test_nav_error_display() {
        let err = NavError::SelectionIncomplete {
            selected: 2,
            required: 5,
        };
        assert_eq!(err.to_string(), "select at least 5 lines (2 selected)");
    }
}
