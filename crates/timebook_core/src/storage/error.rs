//! Persistence errors.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type StorageResult<T> = Result<T, StorageError>;

/// A persisted document was readable but is not a valid timebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorruptedDataError {
    reason: String,
}

impl CorruptedDataError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl Display for CorruptedDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "corrupted timebook data: {}", self.reason)
    }
}

impl Error for CorruptedDataError {}

/// Failure while loading or saving a timebook file.
#[derive(Debug)]
pub enum StorageError {
    /// No file exists at the configured path.
    FileMissing(PathBuf),
    /// The file exists but could not be read or written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file was read but its content is not a valid timebook.
    Corrupted(CorruptedDataError),
    /// The in-memory document could not be encoded.
    Serialize(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileMissing(path) => write!(f, "timebook file not found: {}", path.display()),
            Self::Io { path, source } => {
                write!(f, "timebook file I/O failed at {}: {source}", path.display())
            }
            Self::Corrupted(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to encode timebook: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FileMissing(_) => None,
            Self::Io { source, .. } => Some(source),
            Self::Corrupted(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<CorruptedDataError> for StorageError {
    fn from(value: CorruptedDataError) -> Self {
        Self::Corrupted(value)
    }
}
