//! Error types for the session crate.

use thiserror::Error;

/// Errors from the login request or the token store.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The login request never produced a usable response
    /// (connect/DNS/timeout or a transport-level read failure).
    #[error("login request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A JSON body or stored session file failed to parse or serialize.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Token store file I/O failed.
    #[error("token store I/O: {0}")]
    Storage(#[from] std::io::Error),
}

/// Result alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
