use itertools::Itertools;
use log::error;
use validator::{Validate, ValidationError, ValidationErrors};

use super::{Posting, PostingListError, PostingListIterator};
use crate::common::ScoreType;
use crate::RowId;

/// Postings of one term, ordered by strictly increasing `row_id`.
///
/// A sentinel (`RowId::MAX`, score `0`) may be attached after the last posting. It is kept out of
/// [`PostingList::postings`] and [`PostingList::size`], and is only reachable through
/// [`PostingList::get_id`] / [`PostingList::get_score`] at index `size()`.
#[derive(Debug, Clone, Default)]
pub struct PostingList {
    pub(crate) postings: Vec<Posting>,
    pub(crate) sentinel: Option<Posting>,
}

impl std::fmt::Display for PostingList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.postings.iter().join(", "))
    }
}

/// Two lists are equal when their live postings are equal, the sentinel is ignored.
impl PartialEq for PostingList {
    fn eq(&self, other: &Self) -> bool {
        self.postings == other.postings
    }
}

impl Eq for PostingList {}

impl PostingList {
    pub fn new() -> Self {
        Self { postings: vec![], sentinel: None }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { postings: Vec::with_capacity(capacity), sentinel: None }
    }

    /// Drops all postings and pre-allocates room for `n` of them. The sentinel is kept.
    pub fn reserve(&mut self, n: usize) {
        self.postings.clear();
        self.postings.reserve(n);
    }

    /// Appends a posting.
    ///
    /// The caller must append in strictly increasing `row_id` order, this is not checked in
    /// release builds. Use [`PostingListBuilder`](super::PostingListBuilder) or
    /// [`PostingList::validate`] when the producer is not trusted.
    pub fn add_posting(&mut self, row_id: RowId, score: ScoreType) {
        debug_assert!(
            self.postings.last().map_or(true, |last| last.row_id < row_id),
            "row_id {} appended after {:?}",
            row_id,
            self.postings.last()
        );
        self.postings.push(Posting { row_id, score });
    }

    pub fn append_sentinel(&mut self) {
        self.sentinel = Some(Posting::sentinel());
    }

    pub fn has_sentinel(&self) -> bool {
        self.sentinel.is_some()
    }

    /// Number of postings, the sentinel excluded.
    pub fn size(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    pub fn get(&self, idx: usize) -> Option<Posting> {
        match self.postings.get(idx) {
            Some(posting) => Some(*posting),
            None if idx == self.postings.len() => self.sentinel,
            None => None,
        }
    }

    /// ## Panics
    /// When `idx > size()`, or `idx == size()` without a sentinel.
    pub fn get_id(&self, idx: usize) -> RowId {
        self.posting_at(idx).row_id
    }

    /// ## Panics
    /// When `idx > size()`, or `idx == size()` without a sentinel.
    pub fn get_score(&self, idx: usize) -> ScoreType {
        self.posting_at(idx).score
    }

    pub fn iter(&self) -> PostingListIterator<'_> {
        PostingListIterator::new(&self.postings)
    }

    /// Returns the first position where `row_id` order is broken.
    pub fn check_sorted(&self) -> Result<(), PostingListError> {
        match self.postings.iter().tuple_windows().position(|(prev, cur)| prev.row_id >= cur.row_id) {
            None => Ok(()),
            Some(pos) => Err(PostingListError::NotSorted {
                index: pos + 1,
                previous: self.postings[pos].row_id,
                current: self.postings[pos + 1].row_id,
            }),
        }
    }

    fn posting_at(&self, idx: usize) -> Posting {
        self.get(idx).unwrap_or_else(|| {
            let error_msg = format!(
                "index:{} overflow when accessing [`PostingList`], posting length is {}, sentinel attached: {}",
                idx,
                self.size(),
                self.has_sentinel()
            );
            error!("{}", error_msg);
            panic!("{}", error_msg);
        })
    }
}

impl Validate for PostingList {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.check_sorted().is_err() {
            errors.add("postings", ValidationError::new("row_id must be strictly increasing"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl FromIterator<(RowId, ScoreType)> for PostingList {
    fn from_iter<T: IntoIterator<Item = (RowId, ScoreType)>>(iter: T) -> Self {
        let mut posting = PostingList::new();
        for (row_id, score) in iter {
            posting.add_posting(row_id, score);
        }
        posting
    }
}

impl FromIterator<Posting> for PostingList {
    fn from_iter<T: IntoIterator<Item = Posting>>(iter: T) -> Self {
        Self { postings: iter.into_iter().collect(), sentinel: None }
    }
}

impl<'a> IntoIterator for &'a PostingList {
    type Item = Posting;
    type IntoIter = PostingListIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
