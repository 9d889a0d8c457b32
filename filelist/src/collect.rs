use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::instrument;
use tracing::trace;
use walkdir::WalkDir;

use crate::Error;
use crate::Result;
use crate::SuffixFilter;

/// Make sure `root` is an existing directory.
pub(crate) fn ensure_root(root: &Path) -> Result<()> {
    let exists = root.try_exists().map_err(Error::io(root))?;
    if !exists {
        return Err(Error::RootNotFound(root.into()));
    }
    if !root.is_dir() {
        return Err(Error::RootNotDirectory(root.into()));
    }
    Ok(())
}

/// Recursively collect files under `root` whose name passes
/// any of `filters`, as paths relative to `root`. No filters at
/// all keeps every file.
///
/// Paths come out in walk order, which is whatever order the
/// directories are read in. Symlinks to files are kept, symlinked
/// directories aren't followed.
///
/// # Errors
///
/// When `root` isn't an existing directory, or when any part
/// of the tree can't be read.
#[instrument]
pub fn collect_files(
    root: &Path,
    filters: &[SuffixFilter],
) -> Result<Vec<PathBuf>> {
    ensure_root(root)?;

    let mut accu = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).min_depth(1) {
        let entry = entry?;

        if entry.file_type().is_dir() || !entry.path().is_file() {
            continue;
        }

        let name = entry.file_name();
        if !filters.is_empty() && !filters.iter().any(|f| f.matches(name)) {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            debug!(path = ?entry.path(), "outside of root, skip");
            continue;
        };

        trace!(?relative, "found file");
        accu.push(relative.to_owned());
    }

    debug!(count = accu.len(), "collected files");

    Ok(accu)
}
