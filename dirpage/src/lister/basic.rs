use super::FileLister;
use crate::error::{DirpageError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Lists the entries directly under a directory, files and subdirectories
/// alike, ordered by name.
pub struct BasicLister;

impl FileLister for BasicLister {
    fn list_entries(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let unreadable = |source| DirpageError::DirectoryUnreadable {
            path: directory.to_path_buf(),
            source,
        };

        let mut entries = Vec::with_capacity(16);
        for entry in fs::read_dir(directory).map_err(unreadable)? {
            entries.push(entry.map_err(unreadable)?.path());
        }

        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(entries)
    }
}
