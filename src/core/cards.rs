//! # Study Cards
//!
//! A linear walk over a fixed deck. Each card has a front (the term and
//! its romanization) and a back (meaning, cultural note, example, similar
//! phrase). Moving in either direction turns the card face-up first, so
//! a card is always first seen from the front.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyCard {
    pub id: String,
    pub korean: String,
    pub romaji: String,
    pub meaning: String,
    pub cultural_note: String,
    pub example: String,
    pub example_translation: String,
    pub similar_phrase: String,
}

/// What `next()` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStep {
    Moved(usize),
    /// Already on the last card; time for the quiz.
    DeckComplete,
}

#[derive(Debug, Clone)]
pub struct CardNavigator {
    deck: Vec<StudyCard>,
    index: usize,
    flipped: bool,
}

impl CardNavigator {
    pub fn new(deck: Vec<StudyCard>) -> Option<Self> {
        if deck.is_empty() {
            return None;
        }
        Some(Self {
            deck,
            index: 0,
            flipped: false,
        })
    }

    pub fn reference() -> Self {
        Self {
            deck: reference_deck(),
            index: 0,
            flipped: false,
        }
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &StudyCard {
        &self.deck[self.index]
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.deck.len()
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn next(&mut self) -> CardStep {
        if self.is_last() {
            return CardStep::DeckComplete;
        }
        self.flipped = false;
        self.index += 1;
        CardStep::Moved(self.index)
    }

    /// Step back one card. No-op on the first card.
    pub fn previous(&mut self) {
        self.flipped = false;
        self.index = self.index.saturating_sub(1);
    }

    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.deck.len() as f64
    }
}

pub fn reference_deck() -> Vec<StudyCard> {
    #[allow(clippy::too_many_arguments)]
    fn card(
        id: &str,
        korean: &str,
        romaji: &str,
        meaning: &str,
        cultural_note: &str,
        example: &str,
        example_translation: &str,
        similar_phrase: &str,
    ) -> StudyCard {
        StudyCard {
            id: id.to_string(),
            korean: korean.to_string(),
            romaji: romaji.to_string(),
            meaning: meaning.to_string(),
            cultural_note: cultural_note.to_string(),
            example: example.to_string(),
            example_translation: example_translation.to_string(),
            similar_phrase: similar_phrase.to_string(),
        }
    }

    vec![
        card(
            "1",
            "소울메이트",
            "soulmate",
            "Soulmate",
            "한국어는 영어 단어를 차용하는 경우가 많아요. 특히 현대 팝 음악에서 자주 사용됩니다.",
            "너는 나의 소울메이트야",
            "You are my soulmate",
            "My other half (내 반쪽)",
        ),
        card(
            "2",
            "영원히",
            "yeongwonhi",
            "Forever, eternally",
            "K-pop에서 영원한 사랑과 헌신을 표현할 때 자주 사용되는 단어입니다.",
            "영원히 기억할게",
            "I will remember forever",
            "For all time (모든 시간 동안)",
        ),
        card(
            "3",
            "사랑해",
            "saranghae",
            "I love you",
            "반말(친근한 표현)입니다. 존댓말은 \"사랑합니다\"예요.",
            "정말 사랑해",
            "I really love you",
            "Love you (사랑해)",
        ),
        card(
            "4",
            "함께",
            "hamkke",
            "Together",
            "\"함께하다\"(to be together, to do together)와 자주 쓰입니다.",
            "함께 걷자",
            "Let's walk together",
            "Side by side (나란히)",
        ),
        card(
            "5",
            "별빛",
            "byeolbit",
            "Starlight",
            "한국 시와 가사에서 자주 사용되는 낭만적인 이미지입니다.",
            "별빛처럼 빛나",
            "Shine like starlight",
            "Light of the stars (별들의 빛)",
        ),
    ]
}
