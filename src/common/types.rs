use crate::RowId;

/// Partial score carried by a posting, summed across intersected lists.
pub type ScoreType = u64;

/// Identifier reserved for the optional trailing sentinel.
pub const SENTINEL_ROW_ID: RowId = RowId::MAX;

/// Score stored on the sentinel posting.
pub const SENTINEL_SCORE: ScoreType = 0;
