use std::mem::size_of;

use log::error;

use super::{Posting, PostingList, PostingListError};
use crate::common::ScoreType;
use crate::RowId;

/// Collects postings and validates the strict `row_id` order once, on [`PostingListBuilder::build`].
#[derive(Debug, Default)]
pub struct PostingListBuilder {
    posting: PostingList,
    finally_sort: bool,
    with_sentinel: bool,
}

// Builder pattern
impl PostingListBuilder {
    pub fn new() -> Self {
        Self { posting: PostingList::new(), finally_sort: false, with_sentinel: false }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.posting.postings.reserve(capacity);
        self
    }

    /// Sort postings by `row_id` before validating.
    pub fn with_finally_sort(mut self, sort: bool) -> Self {
        self.finally_sort = sort;
        self
    }

    /// Attach the `RowId::MAX` sentinel to the built list.
    pub fn with_sentinel(mut self, sentinel: bool) -> Self {
        self.with_sentinel = sentinel;
        self
    }
}

impl PostingListBuilder {
    pub fn add(&mut self, row_id: RowId, score: ScoreType) {
        self.posting.postings.push(Posting { row_id, score });
    }

    pub fn len(&self) -> usize {
        self.posting.size()
    }

    pub fn is_empty(&self) -> bool {
        self.posting.is_empty()
    }

    /// Bytes occupied by the collected postings.
    pub fn memory_usage(&self) -> usize {
        self.posting.size() * size_of::<Posting>()
    }

    pub fn build(mut self) -> Result<PostingList, PostingListError> {
        if self.finally_sort {
            self.posting.postings.sort_unstable_by_key(|e| e.row_id);
        }
        // Duplicated row_id or wrong order.
        self.posting.check_sorted().map_err(|e| {
            error!("Failed to build [`PostingList`]: {}", e);
            e
        })?;
        if self.with_sentinel {
            self.posting.append_sentinel();
        }
        Ok(self.posting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sorted() {
        let mut builder = PostingListBuilder::new().with_capacity(3);
        builder.add(2, 5);
        builder.add(3, 1);
        builder.add(6, 2);
        assert_eq!(builder.len(), 3);
        assert_eq!(builder.memory_usage(), 3 * size_of::<Posting>());

        let posting = builder.build().expect("error build posting");
        assert_eq!(posting.to_string(), "[(2, 5), (3, 1), (6, 2)]");
        assert!(!posting.has_sentinel());
    }

    #[test]
    fn test_build_with_sentinel() {
        let mut builder = PostingListBuilder::new().with_sentinel(true);
        builder.add(5, 1);
        let posting = builder.build().expect("error build posting");
        assert_eq!(posting.size(), 1);
        assert_eq!(posting.get_id(1), RowId::MAX);
    }

    #[test]
    fn test_build_rejects_unsorted() {
        let mut builder = PostingListBuilder::new();
        builder.add(4, 1);
        builder.add(2, 1);
        assert!(matches!(builder.build(), Err(PostingListError::NotSorted { index: 1, previous: 4, current: 2 })));
    }

    #[test]
    fn test_build_finally_sort() {
        let mut builder = PostingListBuilder::new().with_finally_sort(true);
        builder.add(7, 2);
        builder.add(5, 1);
        builder.add(9, 3);
        let posting = builder.build().expect("error build posting");
        assert_eq!(posting.to_string(), "[(5, 1), (7, 2), (9, 3)]");

        // Sorting does not hide duplicates.
        let mut builder = PostingListBuilder::new().with_finally_sort(true);
        builder.add(7, 2);
        builder.add(7, 1);
        assert!(builder.build().is_err());
    }

    #[test]
    fn test_with_capacity_keeps_collected_postings() {
        let mut builder = PostingListBuilder::new();
        builder.add(1, 1);
        builder.add(3, 2);
        let mut builder = builder.with_capacity(64);
        builder.add(8, 3);
        assert_eq!(builder.len(), 3);
        assert_eq!(builder.build().expect("error build posting").to_string(), "[(1, 1), (3, 2), (8, 3)]");
    }

    #[test]
    fn test_build_empty() {
        let builder = PostingListBuilder::new();
        assert!(builder.is_empty());
        assert!(builder.build().expect("error build posting").is_empty());
    }
}
