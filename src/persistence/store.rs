//! Document stores
//!
//! Loading is fail-open: a missing, unreadable or corrupt file gives an empty document.
//! Saving overwrites the whole file and reports every failure.

use std::fs;
use std::path::{Path, PathBuf};

use super::Document;
use crate::error::{Error, Result};

/// Load/save pair the session is built on
pub trait DocumentStore {
    /// Current document, or an empty one if nothing usable is stored
    fn load(&self) -> Document;

    /// Replace the stored document
    fn save(&self, doc: &Document) -> Result<()>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn load(&self) -> Document {
        (**self).load()
    }

    fn save(&self, doc: &Document) -> Result<()> {
        (**self).save(doc)
    }
}

/// Pretty-printed JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by the file at `path` (created on first save)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> Error {
        Error::StorageWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Document {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No data file at {}, starting fresh", self.path.display());
                return Document::new();
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", self.path.display(), e);
                return Document::new();
            }
        };

        match serde_json::from_str::<Document>(&json) {
            Ok(doc) => {
                log::info!(
                    "Loaded {} ({} scores, {} diary entries)",
                    self.path.display(),
                    doc.scores().len(),
                    doc.journal().len()
                );
                doc
            }
            Err(e) => {
                log::warn!("Ignoring corrupt data file {}: {}", self.path.display(), e);
                Document::new()
            }
        }
    }

    fn save(&self, doc: &Document) -> Result<()> {
        let mut json = serde_json::to_string_pretty(doc)?;
        json.push('\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
            }
        }
        fs::write(&self.path, json).map_err(|e| self.write_error(e))?;

        log::debug!("Saved {}", self.path.display());
        Ok(())
    }
}
