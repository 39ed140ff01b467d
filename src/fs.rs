//! Filesystem path preparation helpers.

use std::fs::DirBuilder;
use std::io;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::DirBuilderExt;

use crate::error::{Error, Result};

/// Permission mode for created directories (rwxr-xr-x).
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Ensures a directory exists at `path`, creating missing ancestors.
///
/// If anything already exists at the path, file or directory, nothing is
/// done and the call succeeds; the entry is not checked to actually be a
/// directory. A stat failure other than not-found (for example permission
/// denied while checking) is also treated as success, so only creation
/// failures are ever reported. Callers needing stricter semantics must
/// stat the path themselves.
///
/// # Errors
///
/// Returns [`Error::CreateDir`] if the directory tree cannot be created.
pub fn create_path_if_not_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    match path.metadata() {
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            let mut builder = DirBuilder::new();
            builder.recursive(true);
            #[cfg(unix)]
            builder.mode(DIR_MODE);

            builder.create(path).map_err(|source| Error::CreateDir {
                path: path.to_path_buf(),
                source,
            })
        }
        // Existing entries and stat failures of any other kind both count
        // as "already there".
        _ => Ok(()),
    }
}
