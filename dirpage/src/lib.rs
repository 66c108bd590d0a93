pub mod args;
pub mod command_handler;
pub mod config;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod lister;
pub mod report;
pub mod utils;

pub use error::{DirpageError, Result};
pub use formatter::PayloadRecord;
pub use lister::{DirectoryLister, FileEntry};
