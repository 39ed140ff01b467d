//! Process resource-limit queries.

use std::io;

use crate::error::{Error, Result};

/// Returns the current soft limit on open file descriptors.
///
/// Queries `RLIMIT_NOFILE` fresh on every call; there is no caching and no
/// side effect, so the query is safe to repeat and to call concurrently.
/// The soft ("current") limit is returned, not the hard ceiling.
///
/// # Errors
///
/// Returns [`Error::ResourceLimit`] carrying the OS error if the underlying
/// `getrlimit` call fails.
pub fn max_open_files() -> Result<u64> {
    let mut limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };

    // SAFETY: `limit` is a valid, writable rlimit struct for the duration
    // of the call.
    let rc = unsafe { libc::getrlimit(libc::RLIMIT_NOFILE, &mut limit) };
    if rc != 0 {
        return Err(Error::ResourceLimit {
            source: io::Error::last_os_error(),
        });
    }

    Ok(limit.rlim_cur as u64)
}
