//! Session state: the current user and the mutable part of the data file
//!
//! Every mutation reloads the document from the store, applies the change on top of
//! whatever is there now, saves, and keeps the result as the new cache. Edits made to
//! the file by someone else between two mutations are therefore kept.

use crate::error::{Result, ValidationError};
use crate::persistence::{Document, DocumentStore, JournalRecord, ScoreRecord};

/// Author recorded when no username is configured
pub const ANONYMOUS_USER: &str = "Anon";

/// Receives finished quiz passes
pub trait ScoreRecorder {
    /// Save one finished pass for the current user
    fn record_quiz_result(&mut self, score: u32, total: u32) -> Result<()>;
}

/// Cached document plus the store it came from
#[derive(Debug)]
pub struct Session<S: DocumentStore> {
    store: S,
    doc: Document,
}

impl<S: DocumentStore> Session<S> {
    /// Load the document once and cache it
    pub fn initialize(store: S) -> Self {
        let doc = store.load();
        if !doc.username().is_empty() {
            log::info!("Welcome back, {}", doc.username());
        }
        Self { store, doc }
    }

    /// Configured username, empty when unset
    pub fn username(&self) -> &str {
        self.doc.username()
    }

    /// Name recorded as author of scores and diary entries
    pub fn display_user(&self) -> &str {
        author(&self.doc)
    }

    /// Cached copy of the data file
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Recorded quiz results, oldest first
    pub fn scores(&self) -> &[ScoreRecord] {
        self.doc.scores()
    }

    /// Garden diary entries, oldest first
    pub fn journal(&self) -> &[JournalRecord] {
        self.doc.journal()
    }

    /// Best pass recorded for `user`, highest score first then earliest
    pub fn best_score_for(&self, user: &str) -> Option<&ScoreRecord> {
        self.scores()
            .iter()
            .filter(|r| r.user == user)
            .fold(None, |best: Option<&ScoreRecord>, r| match best {
                Some(b) if b.score >= r.score => Some(b),
                _ => Some(r),
            })
    }

    /// Store a trimmed, non-blank username
    pub fn set_username(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        self.update(|doc| doc.username = Some(name.to_string()))?;
        log::info!("Username set to {}", name);
        Ok(())
    }

    /// Append one quiz result. Repeats are kept as separate records.
    pub fn record_score(&mut self, user: &str, score: u32, total: u32) -> Result<()> {
        if total == 0 || score > total {
            return Err(ValidationError::InvalidScore { score, total }.into());
        }
        self.update(|doc| doc.push_score(ScoreRecord::new(user, score, total)))?;
        log::info!("Recorded score {}/{} for {}", score, total, user);
        Ok(())
    }

    /// Append a diary entry authored by the username stored in the reloaded document
    pub fn append_journal_entry(&mut self, text: &str) -> Result<()> {
        let text = non_blank(text)?;
        let mut user = String::new();
        self.update(|doc| {
            user = author(doc).to_string();
            doc.push_journal(JournalRecord::new(user.as_str(), text));
        })?;
        log::info!("Saved diary entry for {}", user);
        Ok(())
    }

    /// Append a diary entry authored by `user`
    pub fn append_journal_entry_for(&mut self, user: &str, text: &str) -> Result<()> {
        let text = non_blank(text)?;
        self.update(|doc| doc.push_journal(JournalRecord::new(user, text)))?;
        log::info!("Saved diary entry for {}", user);
        Ok(())
    }

    /// Reload, apply `f`, save, then adopt the saved document.
    ///
    /// The reloaded document is the base so external edits are kept. A reload that
    /// comes back empty while the cache is not (file deleted or corrupted) falls back
    /// to the cache. On a failed save the cache is left as it was.
    fn update(&mut self, f: impl FnOnce(&mut Document)) -> Result<()> {
        let mut doc = self.store.load();
        if doc.is_empty() && !self.doc.is_empty() {
            log::warn!("Data file came back empty, saving on top of the cached copy");
            doc = self.doc.clone();
        }
        f(&mut doc);
        self.store.save(&doc)?;
        self.doc = doc;
        Ok(())
    }
}

/// Username stored in `doc`, or the anonymous author
fn author(doc: &Document) -> &str {
    match doc.username() {
        "" => ANONYMOUS_USER,
        name => name,
    }
}

fn non_blank(text: &str) -> Result<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyJournalText.into());
    }
    Ok(text)
}

impl<S: DocumentStore> ScoreRecorder for Session<S> {
    fn record_quiz_result(&mut self, score: u32, total: u32) -> Result<()> {
        let user = self.display_user().to_string();
        self.record_score(&user, score, total)
    }
}
