use log::{debug, trace};

use super::binary_search::binary_search_remainder;
use super::galloping_search::galloping_search;
use super::linear_merge::linear_merge;
use super::{BinarySearchIntersector, ComparisonCounter, GallopingSearchIntersector, IntersectAlgorithm, Intersector, LinearMergeIntersector, NoopCounter};
use crate::config::IntersectConfig;
use crate::core::posting_list::{Posting, PostingList};

/// Picks an intersection algorithm from the size ratio of the two lists.
///
/// Comparable sizes go through the linear merge, strongly skewed ones through galloping search
/// with the smaller list as probe, and the band in between through binary search. The choice only
/// affects speed, the result is the same for every algorithm.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct IntersectionSelector {
    config: IntersectConfig,
}

impl IntersectionSelector {
    pub fn new(config: IntersectConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IntersectConfig {
        &self.config
    }

    /// Argument order does not matter.
    pub fn select(&self, size1: usize, size2: usize) -> IntersectAlgorithm {
        let (smaller, larger) = if size1 <= size2 { (size1, size2) } else { (size2, size1) };
        if smaller == 0 {
            return LinearMergeIntersector.into();
        }

        let ratio = larger as f64 / smaller as f64;
        if ratio >= self.config.galloping_min_ratio {
            GallopingSearchIntersector.into()
        } else if ratio >= self.config.binary_search_min_ratio {
            BinarySearchIntersector.into()
        } else {
            LinearMergeIntersector.into()
        }
    }

    pub fn intersect(&self, list1: &PostingList, list2: &PostingList) -> PostingList {
        self.intersect_counted(list1, list2, &mut NoopCounter)
    }

    /// Swaps the arguments when needed so the smaller list is always the probe.
    pub fn intersect_counted<C: ComparisonCounter>(&self, list1: &PostingList, list2: &PostingList, counter: &mut C) -> PostingList {
        let (smaller, larger) = if list1.size() <= list2.size() { (list1, list2) } else { (list2, list1) };
        if smaller.is_empty() {
            trace!("Skip intersection, one of the posting lists is empty");
            return PostingList::new();
        }

        let algorithm = self.select(smaller.size(), larger.size());
        debug!("Intersecting posting lists of size {} and {} with {}", smaller.size(), larger.size(), algorithm.algorithm_name());
        algorithm.intersect_ordered(smaller.postings(), larger.postings(), counter)
    }
}

impl IntersectAlgorithm {
    /// `smaller` must not be longer than `larger`, the selector guarantees it.
    pub(super) fn intersect_ordered<C: ComparisonCounter>(&self, smaller: &[Posting], larger: &[Posting], counter: &mut C) -> PostingList {
        debug_assert!(smaller.len() <= larger.len());
        match self {
            IntersectAlgorithm::LinearMerge(_) => linear_merge(smaller, larger, counter),
            IntersectAlgorithm::BinarySearch(_) => binary_search_remainder(smaller, larger, counter),
            IntersectAlgorithm::GallopingSearch(_) => galloping_search(smaller, larger, counter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::intersect::ComparisonCount;

    #[test]
    fn test_select_by_ratio() {
        let selector = IntersectionSelector::default();

        assert_eq!(selector.select(0, 1_000), IntersectAlgorithm::from(LinearMergeIntersector));
        assert_eq!(selector.select(100, 100), IntersectAlgorithm::from(LinearMergeIntersector));
        assert_eq!(selector.select(100, 399), IntersectAlgorithm::from(LinearMergeIntersector));
        assert_eq!(selector.select(100, 400), IntersectAlgorithm::from(BinarySearchIntersector));
        assert_eq!(selector.select(100, 999), IntersectAlgorithm::from(BinarySearchIntersector));
        assert_eq!(selector.select(100, 1_000), IntersectAlgorithm::from(GallopingSearchIntersector));
        assert_eq!(selector.select(1_000_000, 10), IntersectAlgorithm::from(GallopingSearchIntersector));
    }

    #[test]
    fn test_select_with_custom_config() {
        let selector = IntersectionSelector::new(IntersectConfig::new(2.0, 2.0).expect(""));
        assert_eq!(selector.config().galloping_min_ratio, 2.0);
        assert_eq!(selector.select(10, 19), IntersectAlgorithm::from(LinearMergeIntersector));
        assert_eq!(selector.select(10, 20), IntersectAlgorithm::from(GallopingSearchIntersector));
    }

    #[test]
    fn test_intersect_swaps_arguments() {
        let small: PostingList = [(10, 1), (500, 1)].into_iter().collect();
        let large: PostingList = (0..1_000u32).map(|i| (i, 2)).collect();
        let selector = IntersectionSelector::default();

        let mut forward = ComparisonCount::new();
        let mut backward = ComparisonCount::new();
        let res1 = selector.intersect_counted(&small, &large, &mut forward);
        let res2 = selector.intersect_counted(&large, &small, &mut backward);

        assert_eq!(res1.to_string(), "[(10, 3), (500, 3)]");
        assert_eq!(res1, res2);
        assert_eq!(forward, backward);
        assert!(forward.get() < 100);
    }

    #[test]
    fn test_intersect_empty_is_free() {
        let empty = PostingList::new();
        let large: PostingList = (0..1_000u32).map(|i| (i, 2)).collect();

        let mut counter = ComparisonCount::new();
        assert!(IntersectionSelector::default().intersect_counted(&large, &empty, &mut counter).is_empty());
        assert_eq!(counter.get(), 0);
    }
}
