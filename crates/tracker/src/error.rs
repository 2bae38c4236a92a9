//! Session-level error types.

use thiserror::Error;

/// Errors produced by the interactive session (prompting + persistence).
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Failure reading from or writing to the terminal.
    #[error("terminal i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream reached end-of-file mid-session.
    #[error("input stream closed")]
    InputClosed,

    /// Persistence error from the db crate.
    #[error("database error: {0}")]
    Database(#[from] db::DbError),
}

impl TrackerError {
    /// Whether the session can keep running after reporting this error.
    ///
    /// Only statement-level database failures are recoverable; terminal
    /// failures and transport-level database failures end the session.
    pub fn is_recoverable(&self) -> bool {
        match self {
            TrackerError::Database(err) => !err.is_fatal(),
            TrackerError::Io(_) | TrackerError::InputClosed => false,
        }
    }
}
