use super::ListingFormatter;
use crate::error::Result;
use crate::lister::FileEntry;
use crate::utils::html::escape;

/// Renders one `<p>` block per entry: a link to the file and its timestamp.
pub struct LinksFormatter;

impl LinksFormatter {
    pub fn render(&self, entries: &[FileEntry]) -> String {
        entries
            .iter()
            .map(|entry| {
                let name = escape(&entry.name);
                format!(
                    "<p><a href=\"{}\">{}</a> {}</p>",
                    name, name, entry.modified_at
                )
            })
            .collect()
    }
}

impl ListingFormatter for LinksFormatter {
    fn format_entries(&self, entries: &[FileEntry]) -> Result<String> {
        Ok(self.render(entries))
    }
}
