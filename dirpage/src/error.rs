use colored::*;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigErrorKind {
    InvalidFormat(String),
    InvalidValue(String, String),
    UnknownKey(String),
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErrorKind::InvalidFormat(msg) => write!(f, "{}", msg),
            ConfigErrorKind::InvalidValue(field, msg) => write!(f, "{}: {}", field.bold(), msg),
            ConfigErrorKind::UnknownKey(key) => write!(f, "unknown key: {}", key.bold()),
        }
    }
}

#[derive(Debug)]
pub enum DirpageError {
    /// The scan root could not be enumerated at all.
    DirectoryUnreadable { path: PathBuf, source: io::Error },
    /// The modification time of a single entry could not be read.
    TimestampUnavailable { name: String, source: io::Error },
    Io(io::Error),
    Config(ConfigErrorKind),
    Other(String),
}

impl fmt::Display for DirpageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirpageError::DirectoryUnreadable { path, source } => {
                write!(f, "cannot read directory {}: {}", path.display(), source)
            }
            DirpageError::TimestampUnavailable { name, source } => {
                write!(f, "cannot read modification time of {}: {}", name, source)
            }
            DirpageError::Io(err) => write!(f, "{}", err),
            DirpageError::Config(kind) => write!(f, "{}", kind),
            DirpageError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for DirpageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirpageError::DirectoryUnreadable { source, .. } => Some(source),
            DirpageError::TimestampUnavailable { source, .. } => Some(source),
            DirpageError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DirpageError {
    fn from(err: io::Error) -> Self {
        DirpageError::Io(err)
    }
}

impl From<toml::de::Error> for DirpageError {
    fn from(err: toml::de::Error) -> Self {
        DirpageError::Config(ConfigErrorKind::InvalidFormat(err.to_string()))
    }
}

impl From<toml::ser::Error> for DirpageError {
    fn from(err: toml::ser::Error) -> Self {
        DirpageError::Config(ConfigErrorKind::InvalidFormat(err.to_string()))
    }
}

impl From<serde_json::Error> for DirpageError {
    fn from(err: serde_json::Error) -> Self {
        DirpageError::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DirpageError>;
