//! Error types for the fetch helpers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the fetch helpers.
///
/// Not every failure in this crate travels through this type: the
/// decompressing reader factory and the stat branch of the directory
/// creator downgrade their failures to success for compatibility with
/// existing callers. See `reader_by_extension` and
/// `create_path_if_not_exists`.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected S3 URI flag value
    #[error("{value}: not a valid S3 URI, expected e.g. s3://bucket/path/to/object")]
    InvalidUri {
        /// The offending flag value
        value: String,
    },

    /// Failed to query the open-file resource limit
    #[error("Failed to read the open file limit: {source}")]
    ResourceLimit {
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// Failed to create a directory
    #[error("{}: {source}", path.display())]
    CreateDir {
        /// Path that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Specialized `Result` type for the fetch helpers.
pub type Result<T> = std::result::Result<T, Error>;
