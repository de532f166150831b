#[macro_use]
mod macros;

pub mod common;
pub mod config;
pub mod core;

/// Document identifier carried by every posting.
pub type RowId = u32;

pub use crate::common::errors::IntersectLibError;
pub use crate::common::logger::{init_logger, LoggerConfig};
pub use crate::common::types::ScoreType;
pub use crate::config::IntersectConfig;
pub use crate::core::intersect::{
    intersect, intersect_all, intersect_all_pairs, intersect_baseline, intersect_binary_search_remainder, intersect_counted,
    intersect_files, intersect_galloping_search, intersect_with_config, ComparisonCounter, ComparisonCount, IntersectAlgorithm, IntersectionSelector, Intersector, NoopCounter,
};
pub use crate::core::posting_list::{Posting, PostingList, PostingListBuilder, PostingListError, PostingListIterator};
