//! # Application State
//!
//! All session state in one place. Screen-local state (lyric selection,
//! card position, quiz answers) is rebuilt every time its screen is
//! entered and dropped when it is left, so re-entering the quiz always
//! starts at question one with no answers.
//!
//! ```text
//! App
//! ├── service: Arc<dyn LyricsService>   // catalog + lyrics source
//! ├── loading_delay: Duration           // dwell on the loading screen
//! ├── navigation: Navigator             // current screen, song, result
//! ├── catalog: Vec<Song>                // last fetched trending list
//! ├── catalog_status: CatalogStatus
//! ├── catalog_generation: u64           // bumps on every catalog request
//! ├── query / filter                    // search screen input
//! ├── studied: HashSet<String>          // song ids with a finished quiz
//! ├── lyrics: LyricsStatus              // lyrics screen only
//! ├── cards: Option<CardNavigator>      // study cards screen only
//! ├── quiz: Option<QuizEngine>          // quiz screen only
//! └── status_message: String            // one-line toast
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crate::api::LyricsService;
use crate::core::cards::{self, CardNavigator};
use crate::core::catalog::{self, CatalogFilter, Song};
use crate::core::config::ResolvedConfig;
use crate::core::lyrics::LyricSelection;
use crate::core::navigation::{LOADING_DELAY_MS, Navigator};
use crate::core::quiz::QuizEngine;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogStatus {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LyricsStatus {
    /// Not on the lyrics screen.
    Idle,
    Loading,
    Ready(LyricSelection),
    Failed(String),
}

impl LyricsStatus {
    pub fn selection(&self) -> Option<&LyricSelection> {
        match self {
            LyricsStatus::Ready(selection) => Some(selection),
            _ => None,
        }
    }

    pub fn selection_mut(&mut self) -> Option<&mut LyricSelection> {
        match self {
            LyricsStatus::Ready(selection) => Some(selection),
            _ => None,
        }
    }
}

pub struct App {
    pub service: Arc<dyn LyricsService>,
    pub loading_delay: Duration,
    pub navigation: Navigator,
    pub catalog: Vec<Song>,
    pub catalog_status: CatalogStatus,
    /// Only a catalog response carrying this generation is applied.
    pub catalog_generation: u64,
    pub query: String,
    pub filter: CatalogFilter,
    pub studied: HashSet<String>,
    pub lyrics: LyricsStatus,
    pub cards: Option<CardNavigator>,
    pub quiz: Option<QuizEngine>,
    pub status_message: String,
}

impl App {
    pub fn new(service: Arc<dyn LyricsService>) -> Self {
        Self {
            service,
            loading_delay: Duration::from_millis(LOADING_DELAY_MS),
            navigation: Navigator::new(),
            catalog: Vec::new(),
            catalog_status: CatalogStatus::Loading,
            catalog_generation: 0,
            query: String::new(),
            filter: CatalogFilter::default(),
            studied: HashSet::new(),
            lyrics: LyricsStatus::Idle,
            cards: None,
            quiz: None,
            status_message: String::new(),
        }
    }

    pub fn from_config(service: Arc<dyn LyricsService>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(service);
        app.loading_delay = Duration::from_millis(config.loading_delay_ms);
        app
    }

    /// Songs the search screen should list right now.
    pub fn visible_songs(&self) -> Vec<&Song> {
        catalog::filtered(&self.query, self.filter, &self.studied, &self.catalog)
    }

    /// Cards counted as learned on the summary: the whole study deck.
    pub fn cards_learned(&self) -> usize {
        cards::reference_deck().len()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::catalog::song;
    use crate::core::screen::Screen;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.navigation.screen(), Screen::Search);
        assert_eq!(app.catalog_status, super::CatalogStatus::Loading);
        assert_eq!(app.lyrics, super::LyricsStatus::Idle);
        assert!(app.cards.is_none());
        assert!(app.quiz.is_none());
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_visible_songs_follow_query() {
        let mut app = test_app();
        app.catalog = vec![
            song("1", "Dynamite", "BTS", "초급"),
            song("2", "Ice Cream", "BLACKPINK", "초급"),
        ];
        assert_eq!(app.visible_songs().len(), 2);
        app.query = "bts".to_string();
        assert_eq!(app.visible_songs().len(), 1);
        app.query = "twice".to_string();
        assert!(app.visible_songs().is_empty());
    }
}
