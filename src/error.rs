//! Error types for Concord

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConcordError {
    #[error("Lexicon load error: {0}")]
    Load(String),

    #[error("Invalid reference: {0}")]
    Format(String),

    #[error("Unknown book: {0}")]
    UnknownBook(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl serde::Serialize for ConcordError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<rusqlite::Error> for ConcordError {
    fn from(err: rusqlite::Error) -> Self {
        ConcordError::Database(err.to_string())
    }
}
