//! Errors raised below the HTTP layer
//!
//! Repositories, config loading and report assembly return [`Error`];
//! the service maps it onto a response status in one place.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored findings or uploaded JSON with an unexpected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Unreadable or unparsable config file; fatal at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Message is user-facing, e.g. `Patient not found: p1`
    #[error("Not found: {0}")]
    NotFound(String),

    /// Message is user-facing
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Stored data the service cannot interpret
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// `<Kind> not found: <id>`
    pub fn not_found(kind: &str, id: &str) -> Self {
        Error::NotFound(format!("{} not found: {}", kind, id))
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    /// Caused by the request rather than by the service
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::InvalidInput(_))
    }

    /// Message safe to hand back to a client, if any
    pub fn client_message(&self) -> Option<&str> {
        match self {
            Error::NotFound(msg) | Error::InvalidInput(msg) => Some(msg),
            _ => None,
        }
    }
}
