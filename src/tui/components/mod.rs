pub mod loading;
pub mod lyrics_view;
pub mod quiz_view;
pub mod search;
pub mod study_cards;
pub mod summary;
pub mod text_input;
pub mod title_bar;

pub use loading::LoadingScreen;
pub use lyrics_view::{LyricsView, LyricsViewState};
pub use quiz_view::QuizView;
pub use search::{SearchScreen, SearchState};
pub use study_cards::StudyCardsView;
pub use summary::SummaryView;
pub use title_bar::TitleBar;
