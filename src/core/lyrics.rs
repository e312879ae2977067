//! # Lyric Selection
//!
//! Holds the lyric lines fetched for the active song and the user's
//! choice of which lines become study material.
//!
//! Two counts matter and they are independent of each other:
//!
//! - **eligible**: lines whose learnability score is above
//!   [`LEARNING_SCORE_THRESHOLD`]. These are the AI-suggested learning
//!   points and never change after the fetch.
//! - **selected**: lines the user toggled on. Any line can be selected,
//!   eligible or not.
//!
//! Proceeding to the study cards needs at least [`MIN_SELECTED_LINES`]
//! selected lines.

/// Lines scoring above this are learning points.
pub const LEARNING_SCORE_THRESHOLD: f64 = 0.7;

/// Selected lines needed before the study cards open.
pub const MIN_SELECTED_LINES: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Lyric {
    /// Line number as a string. Unique within a song.
    pub id: String,
    pub lyric: String,
    pub translated: String,
    pub has_card: bool,
    pub learning_score: f64,
}

impl Lyric {
    pub fn is_eligible(&self) -> bool {
        self.learning_score > LEARNING_SCORE_THRESHOLD
    }

    /// Numeric line number for ordering. Non-numeric ids sort last.
    pub fn line_no(&self) -> u64 {
        self.id.parse().unwrap_or(u64::MAX)
    }
}

/// Sort lyrics ascending by numeric line number.
pub fn sort_by_line(lyrics: &mut [Lyric]) {
    lyrics.sort_by_key(Lyric::line_no);
}

/// Whether the lyrics screen may hand off to the study cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionGate {
    Ready,
    /// `missing` more lines must be selected.
    NeedsMore { missing: usize },
    /// The song has fewer lines than the minimum, so the gate can never open.
    Unsatisfiable { available: usize },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LyricSelection {
    lines: Vec<Lyric>,
}

impl LyricSelection {
    /// Takes ownership of a fetched set. Lines are re-sorted so display
    /// order never depends on the caller.
    pub fn new(mut lines: Vec<Lyric>) -> Self {
        sort_by_line(&mut lines);
        Self { lines }
    }

    pub fn lines(&self) -> &[Lyric] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Flip `has_card` for the line with `line_id`. Returns false if no such line.
    pub fn toggle(&mut self, line_id: &str) -> bool {
        match self.lines.iter_mut().find(|l| l.id == line_id) {
            Some(line) => {
                line.has_card = !line.has_card;
                true
            }
            None => false,
        }
    }

    pub fn eligible_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_eligible()).count()
    }

    pub fn selected_count(&self) -> usize {
        self.lines.iter().filter(|l| l.has_card).count()
    }

    pub fn can_proceed(&self) -> bool {
        self.selected_count() >= MIN_SELECTED_LINES
    }

    pub fn gate(&self) -> SelectionGate {
        let selected = self.selected_count();
        if selected >= MIN_SELECTED_LINES {
            SelectionGate::Ready
        } else if self.lines.len() < MIN_SELECTED_LINES {
            SelectionGate::Unsatisfiable {
                available: self.lines.len(),
            }
        } else {
            SelectionGate::NeedsMore {
                missing: MIN_SELECTED_LINES - selected,
            }
        }
    }

    pub fn selected(&self) -> impl Iterator<Item = &Lyric> {
        self.lines.iter().filter(|l| l.has_card)
    }
}

#[cfg(test)]
pub(crate) fn lyric(line_no: u32, score: f64) -> Lyric {
    Lyric {
        id: line_no.to_string(),
        lyric: format!("line {line_no}"),
        translated: String::new(),
        has_card: false,
        learning_score: score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(scores: &[f64]) -> LyricSelection {
        LyricSelection::new(
            scores
                .iter()
                .enumerate()
                .map(|(i, s)| lyric(i as u32 + 1, *s))
                .collect(),
        )
    }

    #[test]
    fn test_new_sorts_by_numeric_line() {
        let sel = LyricSelection::new(vec![lyric(10, 0.1), lyric(2, 0.1), lyric(1, 0.1)]);
        let ids: Vec<&str> = sel.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "10"]);
    }

    #[test]
    fn test_toggle_flips_only_matching_line() {
        let mut sel = selection(&[0.9, 0.9, 0.9]);
        assert!(sel.toggle("2"));
        assert!(!sel.lines()[0].has_card);
        assert!(sel.lines()[1].has_card);
        assert!(sel.toggle("2"));
        assert!(!sel.lines()[1].has_card);
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        let mut sel = selection(&[0.9, 0.1]);
        let before = sel.clone();
        assert!(!sel.toggle("42"));
        assert_eq!(sel, before);
    }

    #[test]
    fn test_eligible_threshold_is_exclusive() {
        let sel = selection(&[0.7, 0.71, 1.0, 0.0]);
        assert_eq!(sel.eligible_count(), 2);
    }

    #[test]
    fn test_selection_is_independent_of_score() {
        let mut sel = selection(&[0.1, 0.2, 0.95]);
        sel.toggle("1");
        sel.toggle("2");
        assert_eq!(sel.selected_count(), 2);
        assert_eq!(sel.eligible_count(), 1);
        assert!(sel.selected_count() > sel.eligible_count());
    }

    #[test]
    fn test_can_proceed_at_five() {
        let mut sel = selection(&[0.9; 8]);
        for n in 1..=7u32 {
            sel.toggle(&n.to_string());
            assert_eq!(sel.can_proceed(), n >= 5, "selected {n}");
        }
        assert!(!selection(&[0.9; 8]).can_proceed());
    }

    #[test]
    fn test_gate_reports_missing() {
        let mut sel = selection(&[0.9; 6]);
        sel.toggle("1");
        sel.toggle("2");
        assert_eq!(sel.gate(), SelectionGate::NeedsMore { missing: 3 });
        sel.toggle("3");
        sel.toggle("4");
        sel.toggle("5");
        assert_eq!(sel.gate(), SelectionGate::Ready);
    }

    #[test]
    fn test_gate_unsatisfiable_for_short_song() {
        let mut sel = selection(&[0.9, 0.9, 0.1]);
        sel.toggle("1");
        assert_eq!(sel.gate(), SelectionGate::Unsatisfiable { available: 3 });
        assert!(!sel.can_proceed());
    }

    #[test]
    fn test_few_eligible_lines_still_satisfiable() {
        let mut sel = selection(&[0.9, 0.1, 0.1, 0.1, 0.1, 0.1]);
        assert_eq!(sel.eligible_count(), 1);
        for n in 1..=5u32 {
            sel.toggle(&n.to_string());
        }
        assert!(sel.can_proceed());
    }
}
