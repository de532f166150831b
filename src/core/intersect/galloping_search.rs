use super::search::{bin_search, exp_search};
use super::{check_probe_order, ComparisonCounter, Intersector};
use crate::core::posting_list::{Posting, PostingList, PostingListError};

/// Galloping (exponential) search of every probe posting inside the haystack.
///
/// From the current haystack origin the step doubles until the probed `row_id` is reached or
/// passed, then a binary search runs inside that bracket. Costs `O(log d)` per probe where `d` is
/// the distance travelled since the previous probe, `O(k log(n / k))` over the whole probe list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GallopingSearchIntersector;

impl Intersector for GallopingSearchIntersector {
    fn algorithm_name(&self) -> &'static str {
        "galloping_search"
    }

    fn intersect_counted<C: ComparisonCounter>(&self, smaller: &PostingList, larger: &PostingList, counter: &mut C) -> Result<PostingList, PostingListError> {
        if smaller.is_empty() || larger.is_empty() {
            return Ok(PostingList::new());
        }
        check_probe_order(smaller, larger)?;
        Ok(galloping_search(smaller.postings(), larger.postings(), counter))
    }
}

pub(super) fn galloping_search<C: ComparisonCounter>(probe: &[Posting], haystack: &[Posting], counter: &mut C) -> PostingList {
    let mut result = PostingList::with_capacity(probe.len().min(haystack.len()));
    let mut origin = 0;

    for posting in probe {
        if origin >= haystack.len() {
            break;
        }
        let (lower, upper) = exp_search(posting.row_id, haystack, origin, counter);
        match bin_search(posting.row_id, haystack, lower, upper, counter) {
            Ok(found) => {
                result.postings.push(posting.merge(&haystack[found]));
                origin = found + 1;
            }
            // Later probes are larger, nothing before the insertion point can match them.
            Err(insert_at) => origin = insert_at,
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::intersect::binary_search::binary_search_remainder;
    use crate::core::intersect::ComparisonCount;

    #[test]
    fn test_dense_matches_stay_local() {
        // Every probe sits right after the previous match, so each one costs a constant.
        let haystack: PostingList = (0..10_000u32).map(|i| (i, 1)).collect();
        let probe: PostingList = (5_000..5_100u32).map(|i| (i, 1)).collect();

        let mut galloping = ComparisonCount::new();
        let result = GallopingSearchIntersector.intersect_counted(&probe, &haystack, &mut galloping).expect("");
        assert_eq!(result.size(), 100);
        assert!(result.iter().all(|p| p.score == 2));

        let mut binary = ComparisonCount::new();
        binary_search_remainder(probe.postings(), haystack.postings(), &mut binary);
        assert!(galloping.get() < binary.get());
    }

    #[test]
    fn test_probe_before_and_after_haystack() {
        let probe: PostingList = [(1, 1), (2, 1), (100, 1), (1_000, 1)].into_iter().collect();
        let haystack: PostingList = (10..60u32).map(|i| (i * 2, 5)).collect();
        let result = GallopingSearchIntersector.intersect(&probe, &haystack).expect("");
        assert_eq!(result.to_string(), "[(100, 6)]");
    }

    #[test]
    fn test_rejects_larger_probe() {
        let small: PostingList = [(1, 1)].into_iter().collect();
        let large: PostingList = [(1, 1), (2, 2), (3, 3)].into_iter().collect();
        assert!(GallopingSearchIntersector.intersect(&small, &large).is_ok());
        let res = GallopingSearchIntersector.intersect(&large, &small);
        assert!(matches!(res, Err(PostingListError::ProbeLargerThanHaystack { probe: 3, haystack: 1 })));
    }
}
