use rand::seq::index;
use rand::Rng;

use super::PostingList;
use crate::common::ScoreType;
use crate::RowId;

/// Generates a sorted posting list with `count` postings.
///
/// Consecutive row_ids differ by a random gap in `1..=max_gap`, scores lie in `0..=max_score`.
pub fn random_posting_list<R: Rng + ?Sized>(rnd_gen: &mut R, count: usize, max_gap: RowId, max_score: ScoreType) -> PostingList {
    let max_gap = max_gap.max(1);
    let mut posting = PostingList::with_capacity(count);
    let mut row_id: RowId = rnd_gen.gen_range(0..=max_gap);
    for _ in 0..count {
        posting.add_posting(row_id, rnd_gen.gen_range(0..=max_score));
        row_id = match row_id.checked_add(rnd_gen.gen_range(1..=max_gap)) {
            Some(next) => next,
            None => break,
        };
    }
    posting
}

/// Picks `count` distinct row_ids of `source` (or all of them when `count` is larger) with fresh
/// random scores. The result is sorted and shares exactly `count` row_ids with `source`.
pub fn sample_posting_list<R: Rng + ?Sized>(rnd_gen: &mut R, source: &PostingList, count: usize, max_score: ScoreType) -> PostingList {
    let amount = count.min(source.size());
    let mut picked = index::sample(rnd_gen, source.size(), amount).into_vec();
    picked.sort_unstable();

    let mut posting = PostingList::with_capacity(amount);
    for idx in picked {
        posting.add_posting(source.get_id(idx), rnd_gen.gen_range(0..=max_score));
    }
    posting
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_random_posting_list_is_sorted() {
        let mut rng = StdRng::seed_from_u64(42);
        let posting = random_posting_list(&mut rng, 1000, 16, 100);
        assert_eq!(posting.size(), 1000);
        assert!(posting.check_sorted().is_ok());
        assert!(posting.iter().all(|p| p.score <= 100));
    }

    #[test]
    fn test_sample_posting_list() {
        let mut rng = StdRng::seed_from_u64(7);
        let source = random_posting_list(&mut rng, 500, 8, 10);
        let sample = sample_posting_list(&mut rng, &source, 20, 10);
        assert_eq!(sample.size(), 20);
        assert!(sample.check_sorted().is_ok());
        assert!(sample.iter().all(|p| source.iter().any(|s| s.row_id == p.row_id)));

        let everything = sample_posting_list(&mut rng, &source, 10_000, 10);
        assert_eq!(everything.size(), source.size());
    }
}
