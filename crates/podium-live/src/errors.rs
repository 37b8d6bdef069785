//! Error types for the live channel.

use thiserror::Error;

/// Errors raised while establishing the live channel.
///
/// Once the channel is open nothing errors out of it: transport failures
/// surface through the status region and the pump ends at `Closed`.
#[derive(Debug, Error)]
pub enum LiveError {
    /// The configured server URL has no recognized scheme.
    #[error("invalid server URL (expected http:// or https://): {0}")]
    InvalidServerUrl(String),

    /// The WebSocket handshake failed.
    #[error("channel handshake failed: {0}")]
    Handshake(#[from] tokio_tungstenite::tungstenite::Error),
}
