use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use rand::Rng;
use tap::Pipe;
use tracing::debug;
use tracing::instrument;

use crate::Error;
use crate::Result;
use crate::SuffixFilter;

/// Files found under a root directory.
///
/// Entries are kept relative to [`Self::root`]; use
/// [`Self::absolute`] to get something openable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileList {
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl FileList {
    /// Collect all files under `root` which pass any of `filters`.
    ///
    /// # Errors
    ///
    /// See [`crate::collect_files`].
    pub fn lookup(root: &Path, filters: &[SuffixFilter]) -> Result<Self> {
        let files = crate::collect_files(root, filters)?;
        Ok(Self {
            root: root.to_owned(),
            files,
        })
    }

    /// Wrap already known `files`, relative to `root`. Nothing
    /// is checked against the filesystem.
    #[must_use]
    pub fn from_parts(root: PathBuf, files: Vec<PathBuf>) -> Self {
        Self { root, files }
    }

    /// Read a list written by [`Self::store`] back, resolving
    /// it against `root`.
    ///
    /// Blank lines are skipped, and so is a `\r` before the newline.
    ///
    /// # Errors
    ///
    /// When `root` isn't a directory or `list` can't be read.
    #[instrument]
    pub fn load(root: &Path, list: &Path) -> Result<Self> {
        crate::collect::ensure_root(root)?;

        let reader = File::open(list)
            .map_err(Error::io(list))?
            .pipe(BufReader::new);

        let mut files = Vec::new();
        for line in reader.split(b'\n') {
            let mut line = line.map_err(Error::io(list))?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            if line.is_empty() {
                continue;
            }
            files.push(path_from_bytes(line).map_err(Error::io(list))?);
        }

        debug!(count = files.len(), "loaded file list");

        Ok(Self {
            root: root.to_owned(),
            files,
        })
    }

    /// Write the relative paths into `output`. The root is not
    /// part of the output.
    ///
    /// # Errors
    ///
    /// See [`crate::store`].
    pub fn store(&self, output: &Path) -> Result<()> {
        crate::store(output, &self.files)
    }

    /// Replace the entries with `count` randomly chosen ones,
    /// or leave them all if `count` is 0.
    ///
    /// # Errors
    ///
    /// See [`crate::sample`]. The list is left untouched on error.
    pub fn random_sample<R>(&mut self, count: usize, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        if count > self.files.len() {
            return Err(Error::InvalidSampleSize {
                requested: count,
                available: self.files.len(),
            });
        }
        let files = std::mem::take(&mut self.files);
        self.files = crate::sample(files, count, rng)?;
        Ok(())
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The `index`-th entry, relative to the root.
    #[must_use]
    pub fn relative(&self, index: usize) -> Option<&Path> {
        self.files.get(index).map(PathBuf::as_path)
    }

    /// The `index`-th entry joined onto the root.
    #[must_use]
    pub fn absolute(&self, index: usize) -> Option<PathBuf> {
        self.relative(index).map(|it| self.root.join(it))
    }

    pub fn iter_absolute(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(|it| self.root.join(it))
    }
}

/// Turn one stored line back into a path, the reverse of
/// [`crate::write_lines`].
#[cfg(unix)]
#[allow(clippy::unnecessary_wraps)]
fn path_from_bytes(bytes: Vec<u8>) -> std::io::Result<PathBuf> {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;
    Ok(OsString::from_vec(bytes).into())
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: Vec<u8>) -> std::io::Result<PathBuf> {
    String::from_utf8(bytes)
        .map(PathBuf::from)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
