use crate::error::Result;
use std::path::{Path, PathBuf};

pub trait FileLister {
    fn list_entries(&self, directory: &Path) -> Result<Vec<PathBuf>>;
}

mod basic;
mod directory;
mod entry;

pub use basic::BasicLister;
pub use directory::DirectoryLister;
pub use entry::{format_timestamp, FileEntry, TIMESTAMP_FORMAT};
