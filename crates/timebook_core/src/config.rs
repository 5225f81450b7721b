//! User preferences file.
//!
//! # Responsibility
//! - Locate the timebook data file and pick the log level.
//!
//! # Invariants
//! - Every field has a default, so older or partial files still load.
//! - A missing preferences file is not an error; a malformed one is.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Conventional preferences file name.
pub const PREFS_FILE: &str = "preferences.json";

const DEFAULT_TIMEBOOK_FILE: &str = "data/timebook.json";

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Serialize(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "preferences I/O failed at {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid preferences file {}: {source}", path.display())
            }
            Self::Serialize(err) => write!(f, "failed to encode preferences: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
        }
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPrefs {
    #[serde(default = "default_time_book_file_path")]
    pub time_book_file_path: PathBuf,
    #[serde(default = "default_log_level_string")]
    pub log_level: String,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            time_book_file_path: default_time_book_file_path(),
            log_level: default_log_level_string(),
        }
    }
}

impl UserPrefs {
    /// Loads preferences, falling back to defaults when the file is absent.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("event=prefs_load module=config status=default reason=file_missing");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        std::fs::write(path, contents).map_err(io_error)
    }
}

fn default_time_book_file_path() -> PathBuf {
    PathBuf::from(DEFAULT_TIMEBOOK_FILE)
}

fn default_log_level_string() -> String {
    default_log_level().to_string()
}
