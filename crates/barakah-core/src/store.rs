//! JSON document persistence.
//!
//! The whole application state is one JSON file at
//! `<data_dir>/barakah.json`. It is read once at startup and rewritten
//! in full after every mutation. Writes are best-effort: callers that
//! mutate state fire-and-forget the save, and a write failure drops
//! that snapshot silently. A stored file that fails to parse is
//! discarded in favor of a fresh default document.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::StoreError;
use crate::model::Document;

/// File name of the persisted document (the fixed storage key).
pub const DOCUMENT_FILE: &str = "barakah.json";

/// Returns `~/.config/barakah[-dev]/` based on BARAKAH_ENV.
///
/// Set BARAKAH_ENV=dev to use the development data directory, or
/// BARAKAH_DATA_DIR to point somewhere else entirely.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    if let Ok(dir) = std::env::var("BARAKAH_DATA_DIR") {
        let dir = PathBuf::from(dir);
        fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("BARAKAH_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("barakah-dev")
    } else {
        base_dir.join("barakah")
    };

    fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
    Ok(dir)
}

/// Handle on the persisted document file.
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    /// Store at the default data directory.
    pub fn open() -> Result<Self, StoreError> {
        Ok(DocumentStore {
            path: data_dir()?.join(DOCUMENT_FILE),
        })
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        DocumentStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document. A missing or unparseable file yields a
    /// default document stamped with `today` -- corruption is silent
    /// data loss, never a crash.
    pub fn load(&self, today: NaiveDate) -> Document {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|_| Document::new(today)),
            Err(_) => Document::new(today),
        }
    }

    /// Write the full document schema.
    pub fn save(&self, document: &Document) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, json).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}
