//! # Quiz Engine
//!
//! A fixed, ordered deck of questions taken in a single pass. Each
//! question is answered with a string; scoring compares the trimmed,
//! lowercased answer against the question's one canonical answer. No
//! partial credit.
//!
//! ```text
//! answer(id, value)   upsert into the answer map, no grading yet
//! can_advance()       current question has a non-blank answer
//! advance()           next question, or on the last one: Completed(result)
//! ```
//!
//! Completion fires exactly once. After that `advance()` reports
//! `AlreadyCompleted` and the index stays on the last question.

use std::collections::HashMap;

use super::summary::QuizResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizQuestion {
    MultipleChoice {
        id: String,
        question: String,
        options: Vec<String>,
        correct_answer: String,
    },
    FillBlank {
        id: String,
        question: String,
        /// Sentence with `_____` standing in for the answer.
        sentence: String,
        hint: Option<String>,
        correct_answer: String,
    },
}

impl QuizQuestion {
    pub fn id(&self) -> &str {
        match self {
            QuizQuestion::MultipleChoice { id, .. } | QuizQuestion::FillBlank { id, .. } => id,
        }
    }

    pub fn question(&self) -> &str {
        match self {
            QuizQuestion::MultipleChoice { question, .. }
            | QuizQuestion::FillBlank { question, .. } => question,
        }
    }

    pub fn correct_answer(&self) -> &str {
        match self {
            QuizQuestion::MultipleChoice { correct_answer, .. }
            | QuizQuestion::FillBlank { correct_answer, .. } => correct_answer,
        }
    }

    /// Whether `answer` earns the point for this question.
    pub fn is_correct(&self, answer: &str) -> bool {
        normalize(answer) == normalize(self.correct_answer())
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// What `advance()` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The current question has no answer yet.
    Blocked,
    /// Moved to the question at this index.
    Next(usize),
    /// That was the last question. Carries the final score.
    Completed(QuizResult),
    AlreadyCompleted,
}

#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<QuizQuestion>,
    current: usize,
    answers: HashMap<String, String>,
    completed: bool,
}

impl QuizEngine {
    /// Returns `None` for an empty deck; a quiz needs at least one question.
    pub fn new(questions: Vec<QuizQuestion>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        Some(Self {
            questions,
            current: 0,
            answers: HashMap::new(),
            completed: false,
        })
    }

    pub fn reference() -> Self {
        Self {
            questions: reference_questions(),
            current: 0,
            answers: HashMap::new(),
            completed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current]
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn current_answer(&self) -> &str {
        self.answer_for(self.current_question().id()).unwrap_or("")
    }

    /// Record (or overwrite) the answer for `question_id`.
    pub fn answer(&mut self, question_id: &str, value: impl Into<String>) {
        self.answers.insert(question_id.to_string(), value.into());
    }

    pub fn can_advance(&self) -> bool {
        !self.current_answer().trim().is_empty()
    }

    pub fn advance(&mut self) -> Advance {
        if self.completed {
            return Advance::AlreadyCompleted;
        }
        if !self.can_advance() {
            return Advance::Blocked;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            Advance::Next(self.current)
        } else {
            self.completed = true;
            Advance::Completed(self.result())
        }
    }

    /// Score every question against the current answers.
    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| {
                self.answers
                    .get(q.id())
                    .is_some_and(|answer| q.is_correct(answer))
            })
            .count()
    }

    pub fn result(&self) -> QuizResult {
        QuizResult::new(self.score(), self.questions.len())
    }

    /// Progress through the deck as a ratio in (0, 1].
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / self.questions.len() as f64
    }
}

/// The five-question deck every session uses.
pub fn reference_questions() -> Vec<QuizQuestion> {
    fn choice(id: &str, question: &str, options: [&str; 4], correct: &str) -> QuizQuestion {
        QuizQuestion::MultipleChoice {
            id: id.to_string(),
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct.to_string(),
        }
    }
    fn blank(id: &str, sentence: &str, hint: &str, correct: &str) -> QuizQuestion {
        QuizQuestion::FillBlank {
            id: id.to_string(),
            question: "빈칸을 채워주세요".to_string(),
            sentence: sentence.to_string(),
            hint: Some(hint.to_string()),
            correct_answer: correct.to_string(),
        }
    }

    vec![
        choice(
            "1",
            "\"사랑해\"의 의미는 무엇일까요?",
            ["I love you", "Thank you", "Goodbye", "Hello"],
            "I love you",
        ),
        blank(
            "2",
            "너는 나의 _____",
            "영어 단어를 한글로 표기한 것이에요",
            "소울메이트",
        ),
        choice(
            "3",
            "\"영원히\"의 의미는 무엇일까요?",
            ["Yesterday", "Forever", "Maybe", "Today"],
            "Forever",
        ),
        blank(
            "4",
            "_____ 함께할 거야",
            "\"forever\"를 의미하는 단어예요",
            "영원히",
        ),
        choice(
            "5",
            "\"별빛\"의 의미는 무엇일까요?",
            ["Moonlight", "Starlight", "Sunlight", "Twilight"],
            "Starlight",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_deck_shape() {
        let quiz = QuizEngine::reference();
        assert_eq!(quiz.len(), 5);
        assert!(matches!(
            quiz.current_question(),
            QuizQuestion::MultipleChoice { .. }
        ));
        assert_eq!(quiz.current_index(), 0);
    }

    #[test]
    fn test_empty_deck_is_rejected() {
        assert!(QuizEngine::new(Vec::new()).is_none());
    }

    #[test]
    fn test_scoring_trims_and_ignores_case() {
        let mut quiz = QuizEngine::reference();
        quiz.answer("1", "i love you");
        quiz.answer("2", " 소울메이트 ");
        assert_eq!(quiz.score(), 2);
        assert_eq!(quiz.result(), QuizResult::new(2, 5));
    }

    #[test]
    fn test_wrong_answers_score_zero() {
        let mut quiz = QuizEngine::reference();
        quiz.answer("1", "Thank you");
        quiz.answer("3", "forever!");
        quiz.answer("5", "starlight ");
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn test_answer_overwrites() {
        let mut quiz = QuizEngine::reference();
        quiz.answer("1", "Hello");
        quiz.answer("1", "I love you");
        assert_eq!(quiz.answer_for("1"), Some("I love you"));
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn test_can_advance_requires_non_blank_answer() {
        let mut quiz = QuizEngine::reference();
        assert!(!quiz.can_advance());
        quiz.answer("1", "   ");
        assert!(!quiz.can_advance());
        assert_eq!(quiz.advance(), Advance::Blocked);
        quiz.answer("1", "Hello");
        assert!(quiz.can_advance());
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut quiz = QuizEngine::reference();
        let mut completions = 0;
        for i in 0..5 {
            let id = quiz.current_question().id().to_string();
            let correct = quiz.current_question().correct_answer().to_string();
            quiz.answer(&id, correct);
            match quiz.advance() {
                Advance::Next(idx) => assert_eq!(idx, i + 1),
                Advance::Completed(result) => {
                    completions += 1;
                    assert_eq!(result, QuizResult::new(5, 5));
                }
                other => panic!("unexpected {other:?}"),
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(quiz.current_index(), 4);
        assert!(quiz.is_completed());
        assert_eq!(quiz.advance(), Advance::AlreadyCompleted);
        assert_eq!(quiz.current_index(), 4);
    }

    #[test]
    fn test_progress() {
        let mut quiz = QuizEngine::reference();
        assert!((quiz.progress() - 0.2).abs() < f64::EPSILON);
        quiz.answer("1", "x");
        quiz.advance();
        assert!((quiz.progress() - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fill_blank_has_hint() {
        let questions = reference_questions();
        match &questions[1] {
            QuizQuestion::FillBlank { sentence, hint, .. } => {
                assert!(sentence.contains("_____"));
                assert!(hint.is_some());
            }
            other => panic!("expected fill blank, got {other:?}"),
        }
    }
}
