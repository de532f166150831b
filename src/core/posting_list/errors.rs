use std::io;

use thiserror::Error;

use crate::RowId;

#[derive(Debug, Error)]
pub enum PostingListError {
    /// Binary and galloping search expect the smaller list as the probe.
    #[error("Probe list is larger than the haystack: probe size {probe}, haystack size {haystack}")]
    ProbeLargerThanHaystack { probe: usize, haystack: usize },

    #[error("Posting list is not strictly increasing at index {index}: {previous} followed by {current}")]
    NotSorted { index: usize, previous: RowId, current: RowId },

    #[error("Posting list input has no count line")]
    MissingHeader,

    #[error("Malformed posting list input at line {line}: '{reason}'")]
    MalformedLine { line: usize, reason: String },

    #[error("Posting list input declared {declared} postings but only {read} could be read")]
    TruncatedInput { declared: usize, read: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}
