use std::cmp::Ordering;

use super::{ComparisonCounter, Intersector};
use crate::core::posting_list::{Posting, PostingList, PostingListError};

/// The "zipper" baseline: one cursor per list, always advancing the smaller `row_id`.
///
/// Runs in `O(n1 + n2)` and accepts its arguments in any order. Every other algorithm must return
/// exactly what this one returns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinearMergeIntersector;

impl Intersector for LinearMergeIntersector {
    fn algorithm_name(&self) -> &'static str {
        "linear_merge"
    }

    fn intersect_counted<C: ComparisonCounter>(&self, list1: &PostingList, list2: &PostingList, counter: &mut C) -> Result<PostingList, PostingListError> {
        Ok(linear_merge(list1.postings(), list2.postings(), counter))
    }
}

pub(super) fn linear_merge<C: ComparisonCounter>(list1: &[Posting], list2: &[Posting], counter: &mut C) -> PostingList {
    if list1.is_empty() || list2.is_empty() {
        return PostingList::new();
    }

    let mut result = PostingList::with_capacity(list1.len().min(list2.len()));
    let mut i = 0;
    let mut j = 0;
    while i < list1.len() && j < list2.len() {
        counter.record(1);
        match list1[i].row_id.cmp(&list2[j].row_id) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                result.postings.push(list1[i].merge(&list2[j]));
                i += 1;
                j += 1;
            }
        }
    }
    result
}
