use super::ListingFormatter;
use crate::error::Result;
use crate::lister::FileEntry;
use serde::{Deserialize, Serialize};

/// One row of the serializable listing handed to a front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadRecord {
    pub file: String,
    pub date: String,
}

impl From<&FileEntry> for PayloadRecord {
    fn from(entry: &FileEntry) -> Self {
        PayloadRecord {
            file: entry.name.clone(),
            date: entry.modified_at.clone(),
        }
    }
}

pub struct PayloadFormatter {
    pub pretty: bool,
}

impl PayloadFormatter {
    pub fn new(pretty: bool) -> Self {
        PayloadFormatter { pretty }
    }
}

impl ListingFormatter for PayloadFormatter {
    fn format_entries(&self, entries: &[FileEntry]) -> Result<String> {
        let records: Vec<PayloadRecord> = entries.iter().map(PayloadRecord::from).collect();
        let json = if self.pretty {
            serde_json::to_string_pretty(&records)?
        } else {
            serde_json::to_string(&records)?
        };
        Ok(json)
    }
}
