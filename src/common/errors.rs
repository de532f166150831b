use std::io;
use std::sync::Arc;

use thiserror::Error;

use crate::common::file_operations::FileOperationError;
use crate::common::logger::LoggerError;
use crate::config::ConfigError;
use crate::core::PostingListError;

/// The library's error enum
#[derive(Debug, Error)]
pub enum IntersectLibError {
    /// IO Error.
    #[error("An IO error occurred: '{0}'")]
    IoError(Arc<io::Error>),

    /// Reading, validating or intersecting posting lists failed.
    #[error("'{0}'")]
    PostingListError(#[from] PostingListError),

    #[error("'{0}'")]
    FileOperationError(#[from] FileOperationError),

    /// Selector thresholds are out of range.
    #[error("'{0}'")]
    ConfigError(#[from] ConfigError),

    #[error("'{0}'")]
    LoggerError(#[from] LoggerError),

    /// Invalid argument was passed by the user.
    #[error("An invalid argument was passed: '{0}'")]
    InvalidArgument(String),
}

impl From<io::Error> for IntersectLibError {
    fn from(io_err: io::Error) -> IntersectLibError {
        IntersectLibError::IoError(Arc::new(io_err))
    }
}
