//! Live channel configuration and address construction.

use podium_core::SessionToken;

use crate::errors::LiveError;

/// Everything needed to open one live channel.
#[derive(Clone, Debug)]
pub struct LiveConfig {
    /// Server base URL, e.g. `http://127.0.0.1:8000`.
    pub server_url: String,
    /// Session token authorizing the channel.
    pub token: SessionToken,
}

impl LiveConfig {
    /// Configuration for the server at `server_url` with the given token.
    pub fn new(server_url: impl Into<String>, token: SessionToken) -> Self {
        Self {
            server_url: server_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Build the channel address.
    ///
    /// The channel scheme follows the page's transport security: a secure
    /// server (`https`) gets `wss`, a plain one (`http`) gets `ws`. The
    /// token rides as the final path segment.
    pub fn channel_url(&self) -> Result<String, LiveError> {
        let (scheme, rest) = if let Some(rest) = self.server_url.strip_prefix("https://") {
            ("wss", rest)
        } else if let Some(rest) = self.server_url.strip_prefix("http://") {
            ("ws", rest)
        } else {
            return Err(LiveError::InvalidServerUrl(self.server_url.clone()));
        };

        Ok(format!("{scheme}://{rest}/ws/{}", self.token.as_str()))
    }
}
