use std::cmp::Ordering;

use super::ComparisonCounter;
use crate::core::posting_list::Posting;
use crate::RowId;

/// Binary search for `row_id` inside `haystack[start..end)`.
///
/// `end` is clamped to the haystack length. Returns `Ok(index)` of the match, or `Err(index)` of
/// the first element larger than `row_id` (the insertion point, `end` when every element is smaller).
pub fn bin_search<C: ComparisonCounter>(row_id: RowId, haystack: &[Posting], start: usize, end: usize, counter: &mut C) -> Result<usize, usize> {
    let mut upper = end.min(haystack.len());
    let mut lower = start.min(upper);

    while lower < upper {
        let mid = lower + (upper - lower) / 2;
        counter.record(1);
        match haystack[mid].row_id.cmp(&row_id) {
            Ordering::Less => lower = mid + 1,
            Ordering::Greater => upper = mid,
            Ordering::Equal => return Ok(mid),
        }
    }
    Err(lower)
}

/// Exponential search for `row_id` starting at `start`.
///
/// Probes `start`, `start + 1`, `start + 2`, `start + 4`, ... until an element `>= row_id` is met or
/// the haystack ends. Returns the half-open bracket `[lower, upper)` that holds the position of
/// `row_id` (or its insertion point); every element before `lower` is smaller than `row_id`.
pub fn exp_search<C: ComparisonCounter>(row_id: RowId, haystack: &[Posting], start: usize, counter: &mut C) -> (usize, usize) {
    let len = haystack.len();
    if start >= len {
        return (len, len);
    }

    counter.record(1);
    if haystack[start].row_id >= row_id {
        return (start, start + 1);
    }

    let mut step: usize = 1;
    while start + step < len {
        counter.record(1);
        if haystack[start + step].row_id >= row_id {
            break;
        }
        step <<= 1;
    }
    // `haystack[start + step / 2]` is the last element known to be smaller.
    (start + step / 2 + 1, (start + step + 1).min(len))
}
