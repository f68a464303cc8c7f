//! The saved document and its records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One completed quiz pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub user: String,
    pub score: u32,
    pub total: u32,
    /// Keys written by someone else, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScoreRecord {
    /// Record with no extra keys
    pub fn new(user: impl Into<String>, score: u32, total: u32) -> Self {
        Self {
            user: user.into(),
            score,
            total,
            extra: Map::new(),
        }
    }
}

/// One garden diary observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalRecord {
    pub user: String,
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JournalRecord {
    /// Record with no extra keys
    pub fn new(user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            text: text.into(),
            extra: Map::new(),
        }
    }
}

/// Root of the data file.
///
/// Sequences are `Option` so that a file without `scores` or `horta` is written back
/// without them, and one with an empty list keeps its empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<ScoreRecord>>,
    /// Garden diary
    #[serde(default, rename = "horta", skip_serializing_if = "Option::is_none")]
    pub journal: Option<Vec<JournalRecord>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// Empty document (`{}`)
    pub fn new() -> Self {
        Self::default()
    }

    /// True for `{}`: no known keys and nothing unknown either
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.scores.is_none()
            && self.journal.is_none()
            && self.extra.is_empty()
    }

    /// Configured username, empty when unset
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    /// Quiz results in the order they were recorded
    pub fn scores(&self) -> &[ScoreRecord] {
        self.scores.as_deref().unwrap_or_default()
    }

    /// Garden diary entries, oldest first
    pub fn journal(&self) -> &[JournalRecord] {
        self.journal.as_deref().unwrap_or_default()
    }

    /// Append a score, creating `scores` if absent
    pub fn push_score(&mut self, record: ScoreRecord) {
        self.scores.get_or_insert_with(Vec::new).push(record);
    }

    /// Append a diary entry, creating `horta` if absent
    pub fn push_journal(&mut self, record: JournalRecord) {
        self.journal.get_or_insert_with(Vec::new).push(record);
    }
}
