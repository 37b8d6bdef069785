//! HTTP login client.
//!
//! One operation: `POST {base}/login` with a form-url-encoded credential
//! body, interpreted into an [`AuthOutcome`]. No retries, no timeout beyond
//! what the transport applies, no other endpoints.

use podium_core::{AuthOutcome, AuthResponse, Credentials};

use crate::errors::SessionError;

/// Client for the external authentication endpoint.
#[derive(Clone, Debug)]
pub struct LoginClient {
    base_url: String,
    http: reqwest::Client,
}

impl LoginClient {
    /// Client for the server at `base_url` (scheme + host, no trailing
    /// slash required).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a credential pair.
    ///
    /// Transport failures and unparseable bodies come back as `Err`; a
    /// well-formed denial is `Ok(AuthOutcome::Denied(_))`.
    #[tracing::instrument(skip_all, fields(username = %credentials.username, server = %self.base_url()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthOutcome, SessionError> {
        let url = format!("{}/login", self.base_url);

        let body = self
            .http
            .post(&url)
            .form(&[
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()
            .await?
            .text()
            .await?;

        let response: AuthResponse = serde_json::from_str(&body)?;
        tracing::debug!(status = %response.status, "login response received");
        Ok(response.outcome())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
