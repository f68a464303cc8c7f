//! Save/load of the app data file
//!
//! Features:
//! - Single JSON document (username, quiz scores, garden diary)
//! - Unknown keys preserved on rewrite
//! - Missing or corrupt files recovered as an empty document

pub mod document;
pub mod store;

pub use document::{Document, JournalRecord, ScoreRecord};
pub use store::{DocumentStore, JsonFileStore};
