//! The screens of a learning session, in flow order.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Search,
    Loading,
    Lyrics,
    StudyCards,
    Quiz,
    Summary,
}

impl Screen {
    /// Whether this screen can only be shown while a song is selected.
    pub fn requires_song(self) -> bool {
        matches!(
            self,
            Screen::Lyrics | Screen::StudyCards | Screen::Quiz | Screen::Summary
        )
    }

    /// Whether this screen can only be shown once a quiz result exists.
    pub fn requires_result(self) -> bool {
        matches!(self, Screen::Summary)
    }

    /// Header label shown in the title bar.
    pub fn label(self) -> &'static str {
        match self {
            Screen::Search => "곡 검색",
            Screen::Loading => "분석 중",
            Screen::Lyrics => "가사",
            Screen::StudyCards => "학습 카드",
            Screen::Quiz => "퀴즈",
            Screen::Summary => "학습 결과",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Search => "search",
            Screen::Loading => "loading",
            Screen::Lyrics => "lyrics",
            Screen::StudyCards => "studyCards",
            Screen::Quiz => "quiz",
            Screen::Summary => "summary",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements() {
        assert!(!Screen::Search.requires_song());
        assert!(!Screen::Loading.requires_song());
        assert!(Screen::Lyrics.requires_song());
        assert!(Screen::Quiz.requires_song());
        assert!(Screen::Summary.requires_result());
        assert!(!Screen::Quiz.requires_result());
    }

    #[test]
    fn test_display_uses_flow_names() {
        assert_eq!(Screen::StudyCards.to_string(), "studyCards");
        assert_eq!(Screen::Summary.to_string(), "summary");
    }
}
