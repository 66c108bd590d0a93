use super::ListingFormatter;
use crate::error::Result;
use crate::lister::FileEntry;
use crate::utils::html::escape;

/// Renders a single-select `<select>` with one option per entry.
pub struct DropdownFormatter {
    field_name: String,
    selected: String,
}

impl DropdownFormatter {
    pub fn new(field_name: &str, selected: &str) -> Self {
        DropdownFormatter {
            field_name: field_name.to_string(),
            selected: selected.to_string(),
        }
    }

    pub fn render(&self, entries: &[FileEntry]) -> String {
        // a single-select control carries at most one selected option
        let mut found = false;
        let options: String = entries
            .iter()
            .map(|entry| {
                let name = escape(&entry.name);
                let marker = if !found && entry.name == self.selected {
                    found = true;
                    " selected"
                } else {
                    ""
                };
                format!(
                    "<option value=\"{}\"{}>{} - {}</option>",
                    name, marker, name, entry.modified_at
                )
            })
            .collect();

        format!(
            "<select name=\"{}\" class=\"form-control\">{}</select>",
            escape(&self.field_name),
            options
        )
    }
}

impl ListingFormatter for DropdownFormatter {
    fn format_entries(&self, entries: &[FileEntry]) -> Result<String> {
        Ok(self.render(entries))
    }
}
