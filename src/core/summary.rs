//! Quiz results and the feedback shown on the summary screen.

/// Final score of one quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    /// Always at least 1.
    pub total: usize,
}

impl QuizResult {
    pub fn new(score: usize, total: usize) -> Self {
        let total = total.max(1);
        Self {
            score: score.min(total),
            total,
        }
    }

    /// Rounded percentage, 0..=100.
    pub fn percentage(&self) -> u32 {
        ((self.score as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn tier(&self) -> FeedbackTier {
        FeedbackTier::for_percentage(self.percentage())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    Perfect,
    Good,
    Start,
}

impl FeedbackTier {
    /// Lower bounds are inclusive: 80 is `Perfect`, 60 is `Good`.
    pub fn for_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            FeedbackTier::Perfect
        } else if percentage >= 60 {
            FeedbackTier::Good
        } else {
            FeedbackTier::Start
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            FeedbackTier::Perfect => "🎉",
            FeedbackTier::Good => "👏",
            FeedbackTier::Start => "💪",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FeedbackTier::Perfect => "완벽해요!",
            FeedbackTier::Good => "잘하고 있어요!",
            FeedbackTier::Start => "좋은 시작이에요!",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::Perfect => "한국어 실력이 정말 좋아지고 있어요",
            FeedbackTier::Good => "조금만 더 연습하면 완벽할 거예요",
            FeedbackTier::Start => "카드를 다시 복습하고 도전해보세요",
        }
    }

    pub fn encouragement(self) -> &'static str {
        match self {
            FeedbackTier::Perfect => {
                "음악으로 한국어를 마스터하고 있어요! 다음 곡으로 계속 학습해보세요 🌟"
            }
            FeedbackTier::Good => "좋은 진전이에요! 카드를 다시 보면서 복습하면 더 좋아질 거예요 📚",
            FeedbackTier::Start => "훌륭한 시작이에요! 카드를 다시 보고 퀴즈에 재도전해보세요 💜",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounds() {
        assert_eq!(QuizResult::new(2, 3).percentage(), 67);
        assert_eq!(QuizResult::new(1, 3).percentage(), 33);
        assert_eq!(QuizResult::new(5, 5).percentage(), 100);
        assert_eq!(QuizResult::new(0, 5).percentage(), 0);
    }

    #[test]
    fn test_zero_total_is_clamped() {
        let r = QuizResult::new(0, 0);
        assert_eq!(r.total, 1);
        assert_eq!(r.percentage(), 0);
    }

    #[test]
    fn test_tier_boundaries_are_inclusive() {
        assert_eq!(FeedbackTier::for_percentage(100), FeedbackTier::Perfect);
        assert_eq!(FeedbackTier::for_percentage(80), FeedbackTier::Perfect);
        assert_eq!(FeedbackTier::for_percentage(79), FeedbackTier::Good);
        assert_eq!(FeedbackTier::for_percentage(60), FeedbackTier::Good);
        assert_eq!(FeedbackTier::for_percentage(59), FeedbackTier::Start);
        assert_eq!(FeedbackTier::for_percentage(0), FeedbackTier::Start);
    }

    #[test]
    fn test_tier_titles() {
        assert_eq!(QuizResult::new(4, 5).tier().title(), "완벽해요!");
        assert_eq!(QuizResult::new(3, 5).tier().title(), "잘하고 있어요!");
        assert_eq!(QuizResult::new(2, 5).tier().title(), "좋은 시작이에요!");
    }
}
