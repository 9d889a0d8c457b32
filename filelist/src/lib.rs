//! Build lists of files found under a directory.
//!
//! The pipeline is linear: [`collect_files`] walks the root and
//! keeps the names passing a [`SuffixFilter`], [`sample`] optionally
//! narrows the result down to a random subset, and [`store`] writes
//! the relative paths out one per line. [`FileList`] bundles the
//! three together with the root they are relative to.

mod collect;
mod error;
mod filelist;
mod filter;
mod sample;
mod write;

pub use collect::collect_files;
pub use error::Error;
pub use error::Result;
pub use filelist::FileList;
pub use filter::SuffixFilter;
pub use sample::sample;
pub use write::store;
pub use write::write_lines;
