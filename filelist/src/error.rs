use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(r#"Root directory "{0}" doesn't exist"#)]
    RootNotFound(PathBuf),

    #[error(r#"Root "{0}" isn't a directory"#)]
    RootNotDirectory(PathBuf),

    #[error("Failed to walk the directory tree")]
    Walk(#[from] walkdir::Error),

    #[error(
        "Invalid sample size: requested {requested} but only {available} files match"
    )]
    InvalidSampleSize { requested: usize, available: usize },

    #[error(r#"I/O error on "{}""#, path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
