//! File-backed timebook storage.
//!
//! # Responsibility
//! - Read/write one JSON document at a fixed path.
//! - Emit `store_load`/`store_save` events with duration and status.
//!
//! # Invariants
//! - A save either fully replaces the file or leaves the previous one intact.
//! - Reads never return a partially constructed book.

use super::document::{export_snapshot, import_snapshot, TimeBookDocument};
use super::error::{CorruptedDataError, StorageError, StorageResult};
use crate::store::timebook::TimeBook;
use log::{error, info, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// JSON storage for a single timebook file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonTimeBookStorage {
    path: PathBuf,
}

impl JsonTimeBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates the timebook file.
    ///
    /// # Errors
    /// - `FileMissing` when nothing exists at the path.
    /// - `Io` when the file exists but cannot be read.
    /// - `Corrupted` when the content is not a valid timebook.
    pub fn read(&self) -> StorageResult<TimeBook> {
        let started_at = Instant::now();
        info!("event=store_load module=storage status=start");

        match self.read_inner() {
            Ok(book) => {
                info!(
                    "event=store_load module=storage status=ok duration_ms={} persons={} groups={} mappings={}",
                    started_at.elapsed().as_millis(),
                    book.persons().len(),
                    book.groups().len(),
                    book.mappings().len()
                );
                Ok(book)
            }
            Err(err) => {
                error!(
                    "event=store_load module=storage status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    error_code(&err),
                    err
                );
                Err(err)
            }
        }
    }

    /// Like `read`, but a missing file yields an empty book.
    ///
    /// Corrupted or unreadable files still fail; they are never silently
    /// replaced by an empty book.
    pub fn read_or_default(&self) -> StorageResult<TimeBook> {
        match self.read() {
            Err(StorageError::FileMissing(_)) => {
                warn!("event=store_load module=storage status=empty reason=file_missing");
                Ok(TimeBook::new())
            }
            other => other,
        }
    }

    /// Writes the full book, replacing any previous file.
    ///
    /// Content goes to a sibling temp file first and is renamed into place.
    pub fn save(&self, book: &TimeBook) -> StorageResult<()> {
        let started_at = Instant::now();
        info!("event=store_save module=storage status=start");

        match self.save_inner(book) {
            Ok(()) => {
                info!(
                    "event=store_save module=storage status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=storage status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    error_code(&err),
                    err
                );
                Err(err)
            }
        }
    }

    fn read_inner(&self) -> StorageResult<TimeBook> {
        let bytes = std::fs::read(&self.path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => StorageError::FileMissing(self.path.clone()),
            _ => self.io_error(err),
        })?;
        let document: TimeBookDocument = serde_json::from_slice(&bytes).map_err(|err| {
            CorruptedDataError::new(format!("document does not match schema: {err}"))
        })?;
        Ok(import_snapshot(document)?)
    }

    fn save_inner(&self, book: &TimeBook) -> StorageResult<()> {
        let document = export_snapshot(book);
        let bytes = serde_json::to_vec_pretty(&document).map_err(StorageError::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        let temp_path = self.temp_path();
        std::fs::write(&temp_path, bytes).map_err(|err| StorageError::Io {
            path: temp_path.clone(),
            source: err,
        })?;
        std::fs::rename(&temp_path, &self.path).map_err(|err| {
            let _ = std::fs::remove_file(&temp_path);
            self.io_error(err)
        })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn error_code(err: &StorageError) -> &'static str {
    match err {
        StorageError::FileMissing(_) => "file_missing",
        StorageError::Io { .. } => "io_failed",
        StorageError::Corrupted(_) => "corrupted_data",
        StorageError::Serialize(_) => "encode_failed",
    }
}
