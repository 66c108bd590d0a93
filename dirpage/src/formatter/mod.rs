use crate::error::Result;
use crate::lister::FileEntry;

pub trait ListingFormatter {
    fn format_entries(&self, entries: &[FileEntry]) -> Result<String>;
}

mod dropdown;
mod links;
mod page;
mod payload;

pub use dropdown::DropdownFormatter;
pub use links::LinksFormatter;
pub use page::PageFormatter;
pub use payload::{PayloadFormatter, PayloadRecord};
