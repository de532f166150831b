mod binary_search;
mod chained;
mod comparison_counter;
mod galloping_search;
mod linear_merge;
mod search;
mod selector;

use enum_dispatch::enum_dispatch;
use log::error;

pub use binary_search::BinarySearchIntersector;
pub use chained::{intersect_all, intersect_all_pairs, intersect_files};
pub use comparison_counter::{ComparisonCount, ComparisonCounter, NoopCounter};
pub use galloping_search::GallopingSearchIntersector;
pub use linear_merge::LinearMergeIntersector;
pub use search::{bin_search, exp_search};
pub use selector::IntersectionSelector;

use crate::config::IntersectConfig;
use crate::core::posting_list::{PostingList, PostingListError};

/// Intersects two posting lists: keeps the `row_id`s present in both and sums their scores.
///
/// Inputs are only read, the result is always a new list without sentinel. Implementations that
/// search the second list for postings of the first require `list1.size() <= list2.size()` and
/// return [`PostingListError::ProbeLargerThanHaystack`] otherwise.
#[enum_dispatch]
pub trait Intersector {
    fn algorithm_name(&self) -> &'static str;

    fn intersect_counted<C: ComparisonCounter>(&self, list1: &PostingList, list2: &PostingList, counter: &mut C) -> Result<PostingList, PostingListError>;

    fn intersect(&self, list1: &PostingList, list2: &PostingList) -> Result<PostingList, PostingListError> {
        self.intersect_counted(list1, list2, &mut NoopCounter)
    }
}

#[enum_dispatch(Intersector)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntersectAlgorithm {
    LinearMerge(LinearMergeIntersector),
    BinarySearch(BinarySearchIntersector),
    GallopingSearch(GallopingSearchIntersector),
}

pub(super) fn check_probe_order(probe: &PostingList, haystack: &PostingList) -> Result<(), PostingListError> {
    if probe.size() > haystack.size() {
        let err = PostingListError::ProbeLargerThanHaystack { probe: probe.size(), haystack: haystack.size() };
        error!("{}, pass the smaller list first or use `intersect`", err);
        return Err(err);
    }
    Ok(())
}

/// Linear merge of both lists, the reference result for every other algorithm.
pub fn intersect_baseline(list1: &PostingList, list2: &PostingList) -> PostingList {
    linear_merge::linear_merge(list1.postings(), list2.postings(), &mut NoopCounter)
}

/// Intersects with the algorithm [`IntersectionSelector`] picks for the default [`IntersectConfig`].
/// Arguments may come in any order.
pub fn intersect(list1: &PostingList, list2: &PostingList) -> PostingList {
    IntersectionSelector::default().intersect(list1, list2)
}

/// Same as [`intersect`], reporting every `row_id` comparison to `counter`.
pub fn intersect_counted<C: ComparisonCounter>(list1: &PostingList, list2: &PostingList, counter: &mut C) -> PostingList {
    IntersectionSelector::default().intersect_counted(list1, list2, counter)
}

pub fn intersect_with_config(list1: &PostingList, list2: &PostingList, config: &IntersectConfig) -> PostingList {
    IntersectionSelector::new(*config).intersect(list1, list2)
}

/// Galloping search of `smaller` inside `larger`.
pub fn intersect_galloping_search(smaller: &PostingList, larger: &PostingList) -> Result<PostingList, PostingListError> {
    GallopingSearchIntersector.intersect(smaller, larger)
}

/// Binary search of `smaller` inside the not yet passed remainder of `larger`.
pub fn intersect_binary_search_remainder(smaller: &PostingList, larger: &PostingList) -> Result<PostingList, PostingListError> {
    BinarySearchIntersector.intersect(smaller, larger)
}
