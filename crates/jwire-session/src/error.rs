//! Session store error types.

use thiserror::Error;

pub type SessionResult<T> = Result<T, SessionError>;

/// Errors raised while opening the persisted credential record.
///
/// Mutations never fail; storage faults can only surface at initialization.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read credential store: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt credential store: {0}")]
    Corrupt(#[from] serde_json::Error),
}
