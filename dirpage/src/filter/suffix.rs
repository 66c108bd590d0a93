use super::FileFilter;

/// Matches names whose trailing characters are exactly `"." + extension`.
///
/// This is a literal, case-sensitive suffix comparison, not an extension
/// parse: `archive.tar.html` matches `html`, `notes.html.bak` does not, and
/// directories are tested the same way as files.
pub struct SuffixFilter {
    suffix: String,
}

impl SuffixFilter {
    pub fn new(extension: &str) -> Self {
        SuffixFilter {
            suffix: format!(".{}", extension),
        }
    }
}

impl FileFilter for SuffixFilter {
    fn matches(&self, name: &str) -> bool {
        name.ends_with(&self.suffix)
    }
}
