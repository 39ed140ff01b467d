//! Shared command-line helpers for S3 fetch tooling.
//!
//! This crate collects the small, independent pieces fetch binaries need
//! around argument handling and local I/O: a validating cumulative flag
//! value for S3 URIs, a file-descriptor soft-limit query, a reader factory
//! that transparently decompresses gzip-named inputs, and an idempotent
//! recursive directory creator. No helper depends on another.
//!
//! Failure handling is intentionally uneven across the helpers: URI
//! validation, the limit query, and directory creation report their errors,
//! while the decompressing reader factory and the stat step of directory
//! creation swallow theirs for compatibility with existing callers. The
//! swallowing sites document the policy.

mod error;
mod fs;
mod io;
mod uri;

#[cfg(unix)]
mod limits;

#[cfg(feature = "cli")]
mod args;


pub use error::{Error, Result};
pub use fs::create_path_if_not_exists;
pub use io::{has_gzip_suffix, reader_by_extension};
pub use uri::{ArgValue, S3Uri, S3UriList, S3_URI_SCHEME};

#[cfg(unix)]
pub use limits::max_open_files;

#[cfg(feature = "cli")]
pub use args::S3UriArgs;
