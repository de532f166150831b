use std::path::Path;

use log::{debug, error};
use measure_time::debug_time;
use rayon::prelude::*;

use super::IntersectionSelector;
use crate::common::errors::IntersectLibError;
use crate::config::IntersectConfig;
use crate::core::posting_list::PostingList;

impl IntersectionSelector {
    /// Intersects all `lists`, smallest first, so every intermediate result stays as small as
    /// possible. Returns `None` when `lists` is empty.
    pub fn intersect_all(&self, lists: &[PostingList]) -> Option<PostingList> {
        let mut ordered: Vec<&PostingList> = lists.iter().collect();
        ordered.sort_by_key(|list| list.size());

        let (first, rest) = ordered.split_first()?;
        debug_time!("intersect {} posting lists", lists.len());

        let mut result: PostingList = first.iter().collect();
        for list in rest {
            if result.is_empty() {
                debug!("Intermediate intersection is empty, skip remaining {} lists", rest.len());
                break;
            }
            result = self.intersect(&result, list);
        }
        Some(result)
    }

    /// Intersects every pair `(i, j)` with `j < i`, in parallel. Results keep the pair order.
    pub fn intersect_all_pairs(&self, lists: &[PostingList]) -> Vec<((usize, usize), PostingList)> {
        let pairs: Vec<(usize, usize)> = (0..lists.len()).flat_map(|i| (0..i).map(move |j| (i, j))).collect();
        debug_time!("intersect {} pairs of posting lists", pairs.len());

        pairs.into_par_iter().map(|(i, j)| ((i, j), self.intersect(&lists[i], &lists[j]))).collect()
    }
}

pub fn intersect_all(lists: &[PostingList]) -> Option<PostingList> {
    IntersectionSelector::default().intersect_all(lists)
}

pub fn intersect_all_pairs(lists: &[PostingList]) -> Vec<((usize, usize), PostingList)> {
    IntersectionSelector::default().intersect_all_pairs(lists)
}

/// Loads every file in parallel and intersects all of them.
pub fn intersect_files<P: AsRef<Path> + Sync>(paths: &[P], config: &IntersectConfig) -> Result<PostingList, IntersectLibError> {
    if paths.is_empty() {
        let error_msg = "at least one posting list file is required".to_string();
        error!("{}", error_msg);
        return Err(IntersectLibError::InvalidArgument(error_msg));
    }

    let lists = paths.par_iter().map(PostingList::read_from_file).collect::<Result<Vec<_>, _>>()?;
    IntersectionSelector::new(*config)
        .intersect_all(&lists)
        .ok_or_else(|| IntersectLibError::InvalidArgument("no posting list was loaded".to_string()))
}
