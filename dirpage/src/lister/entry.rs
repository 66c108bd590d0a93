use chrono::{DateTime, Local};
use std::time::{SystemTime, UNIX_EPOCH};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A matched directory entry and its last-modified time, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub modified_at: String,
}

impl FileEntry {
    /// `None` when the modification time cannot be represented.
    pub fn new(name: String, modified: SystemTime) -> Option<Self> {
        Some(FileEntry {
            name,
            modified_at: format_timestamp(modified)?,
        })
    }
}

/// Formats a filesystem time as `YYYY-MM-DD HH:MM:SS` in local time, or
/// `None` if it lies outside the supported date range.
pub fn format_timestamp(time: SystemTime) -> Option<String> {
    let (secs, nanos) = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => (i64::try_from(after.as_secs()).ok()?, after.subsec_nanos()),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).ok()?;
            match before.subsec_nanos() {
                0 => (secs.checked_neg()?, 0),
                n => (secs.checked_neg()?.checked_sub(1)?, 1_000_000_000 - n),
            }
        }
    };

    let datetime = DateTime::from_timestamp(secs, nanos)?.with_timezone(&Local);
    Some(datetime.format(TIMESTAMP_FORMAT).to_string())
}
