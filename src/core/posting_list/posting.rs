use crate::{
    common::{ScoreType, SENTINEL_ROW_ID, SENTINEL_SCORE},
    RowId,
};

/// One `(row_id, score)` entry of a [`PostingList`](super::PostingList).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Posting {
    pub row_id: RowId,
    pub score: ScoreType,
}

impl std::fmt::Display for Posting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row_id, self.score)
    }
}

impl Posting {
    pub fn new(row_id: RowId, score: ScoreType) -> Self {
        Self { row_id, score }
    }

    pub fn sentinel() -> Self {
        Self { row_id: SENTINEL_ROW_ID, score: SENTINEL_SCORE }
    }

    /// Combines two postings of the same `row_id`, summing their scores.
    #[inline]
    pub fn merge(&self, other: &Posting) -> Posting {
        debug_assert_eq!(self.row_id, other.row_id);
        Posting { row_id: self.row_id, score: self.score.saturating_add(other.score) }
    }
}

impl From<(RowId, ScoreType)> for Posting {
    fn from((row_id, score): (RowId, ScoreType)) -> Self {
        Self { row_id, score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sums_scores() {
        let merged = Posting::new(3, 20).merge(&Posting::new(3, 4));
        assert_eq!(merged, Posting::new(3, 24));
        assert_eq!(merged.to_string(), "(3, 24)");
    }

    #[test]
    fn test_merge_saturates() {
        let merged = Posting::new(7, ScoreType::MAX).merge(&Posting::new(7, 1));
        assert_eq!(merged.score, ScoreType::MAX);
    }

    #[test]
    fn test_sentinel() {
        let sentinel = Posting::sentinel();
        assert_eq!(sentinel.row_id, RowId::MAX);
        assert_eq!(sentinel.score, 0);
        assert_eq!(Posting::from((1, 2)), Posting::new(1, 2));
    }
}
