//! Error types
//!
//! Read failures on the data file never show up here: the store recovers them by
//! handing back an empty document. Everything else the shell may need to report does.

use std::path::PathBuf;

use thiserror::Error;

/// User input that was rejected. The shell shows these as warnings and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Por favor, insira um nome válido.")]
    EmptyName,

    #[error("Escreva uma observação antes de salvar.")]
    EmptyJournalText,

    #[error("Selecione uma opção antes de verificar.")]
    NoOptionSelected,

    #[error("Opção {0} não existe; escolha de 1 a 4.")]
    OptionOutOfRange(usize),

    #[error("Comando desconhecido: {0}. Digite 'ajuda' para ver os comandos.")]
    UnknownCommand(String),

    #[error("Pontuação inválida: {score} de {total}")]
    InvalidScore { score: u32, total: u32 },
}

/// Crate error type
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Receita não encontrada: {0}")]
    NotFound(String),

    #[error("Failed to write {}: {source}", .path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Catalog(String),
}

impl Error {
    /// Whether the shell may keep running after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
