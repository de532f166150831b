use super::search::bin_search;
use super::{check_probe_order, ComparisonCounter, Intersector};
use crate::core::posting_list::{Posting, PostingList, PostingListError};

/// Looks every posting of the smaller (probe) list up in the larger (haystack) list with binary
/// search over the remainder of the haystack.
///
/// The lower bound of the search never moves backwards: after a hit it is placed just past the
/// match, after a miss on the insertion point. Costs `O(k log n)` for `k <= n`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BinarySearchIntersector;

impl Intersector for BinarySearchIntersector {
    fn algorithm_name(&self) -> &'static str {
        "binary_search_remainder"
    }

    fn intersect_counted<C: ComparisonCounter>(&self, smaller: &PostingList, larger: &PostingList, counter: &mut C) -> Result<PostingList, PostingListError> {
        if smaller.is_empty() || larger.is_empty() {
            return Ok(PostingList::new());
        }
        check_probe_order(smaller, larger)?;
        Ok(binary_search_remainder(smaller.postings(), larger.postings(), counter))
    }
}

pub(super) fn binary_search_remainder<C: ComparisonCounter>(probe: &[Posting], haystack: &[Posting], counter: &mut C) -> PostingList {
    let mut result = PostingList::with_capacity(probe.len().min(haystack.len()));
    let mut lower_bound = 0;

    for posting in probe {
        if lower_bound >= haystack.len() {
            break;
        }
        match bin_search(posting.row_id, haystack, lower_bound, haystack.len(), counter) {
            Ok(found) => {
                result.postings.push(posting.merge(&haystack[found]));
                lower_bound = found + 1;
            }
            Err(insert_at) => lower_bound = insert_at,
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::intersect::{ComparisonCount, NoopCounter};

    #[test]
    fn test_probe_past_haystack_end() {
        let probe: PostingList = [(5, 1), (50, 1), (500, 1)].into_iter().collect();
        let haystack: PostingList = (0..10u32).map(|i| (i, 2)).collect();

        let mut counter = ComparisonCount::new();
        let result = BinarySearchIntersector.intersect_counted(&probe, &haystack, &mut counter).expect("");
        assert_eq!(result.to_string(), "[(5, 3)]");

        // 500 is never searched once the lower bound reached the end of the haystack.
        let mut single = ComparisonCount::new();
        binary_search_remainder(&probe.postings()[..2], haystack.postings(), &mut single);
        assert_eq!(counter.get(), single.get());
    }

    #[test]
    fn test_misses_keep_lower_bound() {
        let probe: PostingList = [(1, 1), (3, 1), (4, 1), (9, 1)].into_iter().collect();
        let haystack: PostingList = [(0, 1), (2, 1), (4, 1), (6, 1), (8, 1), (9, 1)].into_iter().collect();
        let result = binary_search_remainder(probe.postings(), haystack.postings(), &mut NoopCounter);
        assert_eq!(result.to_string(), "[(4, 2), (9, 2)]");
    }

    #[test]
    fn test_rejects_larger_probe() {
        let small: PostingList = [(1, 1)].into_iter().collect();
        let large: PostingList = [(1, 1), (2, 2)].into_iter().collect();
        let res = BinarySearchIntersector.intersect(&large, &small);
        assert!(matches!(res, Err(PostingListError::ProbeLargerThanHaystack { probe: 2, haystack: 1 })));
    }
}
