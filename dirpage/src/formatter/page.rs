use super::{ListingFormatter, PayloadFormatter};
use crate::error::Result;
use crate::lister::FileEntry;
use crate::utils::html::escape;

/// Renders a standalone HTML document listing the entries, with the JSON
/// payload embedded for client-side rendering.
pub struct PageFormatter {
    title: String,
}

impl PageFormatter {
    pub fn new(title: &str) -> Self {
        PageFormatter {
            title: title.to_string(),
        }
    }
}

impl ListingFormatter for PageFormatter {
    fn format_entries(&self, entries: &[FileEntry]) -> Result<String> {
        let title = escape(&self.title);
        let rows: String = entries
            .iter()
            .map(|entry| {
                let name = escape(&entry.name);
                format!(
                    "<div class=\"link\"><a href=\"{}\" title=\"{}\">{}</a></div>\n",
                    name, entry.modified_at, name
                )
            })
            .collect();
        // a literal "</" would close the script element early
        let payload = PayloadFormatter::new(false)
            .format_entries(entries)?
            .replace("</", "<\\/");

        Ok(format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"UTF-8\">\n\
             <title>{title}</title>\n\
             </head>\n\
             <body>\n\
             <section class=\"section is-medium\">\n\
             <div class=\"container\" id=\"main\">\n\
             <h1 class=\"title is-large\">{title}</h1>\n\
             {rows}\
             </div>\n\
             </section>\n\
             <script type=\"application/json\" id=\"links-data\">{payload}</script>\n\
             </body>\n\
             </html>\n",
            title = title,
            rows = rows,
            payload = payload
        ))
    }
}
