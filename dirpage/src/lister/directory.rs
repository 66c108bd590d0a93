use super::{BasicLister, FileEntry, FileLister};
use crate::error::{DirpageError, Result};
use crate::filter::{FileFilter, SuffixFilter};
use crate::formatter::{DropdownFormatter, LinksFormatter, PayloadRecord};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The files under one directory that carry one of a set of extensions.
///
/// The scan happens once, in [`DirectoryLister::new`]; every view afterwards
/// works on the retained matches and never touches the filesystem again.
#[derive(Debug, Clone)]
pub struct DirectoryLister {
    root: PathBuf,
    extensions: Vec<String>,
    matches: Vec<FileEntry>,
}

impl DirectoryLister {
    pub fn new<P, S>(root: P, extensions: &[S]) -> Result<Self>
    where
        P: Into<PathBuf>,
        S: AsRef<str>,
    {
        Self::with_lister(&BasicLister, root, extensions)
    }

    pub fn with_lister<L, P, S>(lister: &L, root: P, extensions: &[S]) -> Result<Self>
    where
        L: FileLister + ?Sized,
        P: Into<PathBuf>,
        S: AsRef<str>,
    {
        let root = root.into();
        let extensions: Vec<String> = extensions
            .iter()
            .map(|ext| ext.as_ref().to_string())
            .collect();
        let filters: Vec<SuffixFilter> = extensions
            .iter()
            .map(|ext| SuffixFilter::new(ext))
            .collect();

        let entries = lister.list_entries(&root)?;
        debug!("scanned {} entries under {}", entries.len(), root.display());

        let mut matches = Vec::new();
        for path in entries {
            let name = match path.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => continue,
            };

            let hits = filters.iter().filter(|f| f.matches(&name)).count();
            if hits == 0 {
                continue;
            }

            match read_modified(&path, &name) {
                Ok(entry) => matches.extend(std::iter::repeat(entry).take(hits)),
                Err(err) => warn!("skipping entry: {}", err),
            }
        }

        debug!(
            "{} matches for extensions {:?} under {}",
            matches.len(),
            extensions,
            root.display()
        );

        Ok(DirectoryLister {
            root,
            extensions,
            matches,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn matches(&self) -> &[FileEntry] {
        &self.matches
    }

    pub fn render_dropdown(&self, field_name: &str, selected_name: &str) -> String {
        DropdownFormatter::new(field_name, selected_name).render(&self.matches)
    }

    pub fn render_links(&self) -> String {
        LinksFormatter.render(&self.matches)
    }

    pub fn to_payload(&self) -> Vec<PayloadRecord> {
        self.matches.iter().map(PayloadRecord::from).collect()
    }
}

// Follows symlinks, so a dangling link has no timestamp and is skipped.
fn read_modified(path: &Path, name: &str) -> Result<FileEntry> {
    let unavailable = |source| DirpageError::TimestampUnavailable {
        name: name.to_string(),
        source,
    };

    let modified = fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .map_err(unavailable)?;
    FileEntry::new(name.to_string(), modified).ok_or_else(|| {
        unavailable(io::Error::new(
            io::ErrorKind::InvalidData,
            "modification time out of range",
        ))
    })
}
