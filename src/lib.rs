//! Aprender e Viver Melhor - healthy eating for school kids
//!
//! Core modules:
//! - `catalog`: Read-only tips, recipes and quiz questions
//! - `persistence`: JSON data file (username, scores, garden diary)
//! - `session`: Current user and every write to the data file
//! - `quiz`: Quiz state machine and scoring
//! - `app`, `views`, `shell`: Presentation layer used by the terminal binary
//! - `settings`: Data file location and other startup options

pub mod app;
pub mod catalog;
pub mod error;
pub mod persistence;
pub mod quiz;
pub mod session;
pub mod settings;
pub mod shell;
pub mod views;

pub use app::App;
pub use catalog::{Catalog, QuizQuestion, Recipe, pick_random};
pub use error::{Error, Result, ValidationError};
pub use persistence::{Document, DocumentStore, JournalRecord, JsonFileStore, ScoreRecord};
pub use quiz::{Feedback, QuizEngine, QuizPhase, QuizResult};
pub use session::{ANONYMOUS_USER, ScoreRecorder, Session};
pub use settings::Settings;
pub use views::View;
