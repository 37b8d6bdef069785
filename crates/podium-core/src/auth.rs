//! Login credentials, the `/login` wire response, and the session token.

use serde::{Deserialize, Serialize};

use crate::constants::GENERIC_LOGIN_FAILURE;

// ─────────────────────────────────────────────────────────────────────────────
// Credentials
// ─────────────────────────────────────────────────────────────────────────────

/// A credential pair captured at submission time.
///
/// Transient by design: never persisted, only encoded into the login
/// request body. No client-side format validation is applied — empty or
/// malformed values are forwarded as-is and the server decides.
#[derive(Clone)]
pub struct Credentials {
    /// Username as typed.
    pub username: String,
    /// Password as typed.
    pub password: String,
}

impl Credentials {
    /// Create a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Manual Debug so passwords never end up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Session token
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque session token issued at login.
///
/// Used as a local access gate and as a path segment when the live channel
/// is opened. No expiry or refresh is modeled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Borrow the raw token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionToken {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for SessionToken {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Auth response
// ─────────────────────────────────────────────────────────────────────────────

/// JSON body of the `/login` response, as the server sends it.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    /// `"success"` grants; any other value, including an absent field,
    /// denies.
    #[serde(default)]
    pub status: String,
    /// Present iff the login was granted.
    #[serde(default)]
    pub token: Option<String>,
    /// Human-readable denial reason, if the server provided one.
    #[serde(default)]
    pub message: Option<String>,
}

/// Interpreted login result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Login succeeded; the token must be persisted exactly once.
    Granted(SessionToken),
    /// Login denied; the message is rendered to the user, nothing stored.
    Denied(String),
}

impl AuthResponse {
    /// Collapse the wire response into an [`AuthOutcome`].
    ///
    /// A `"success"` status without a token violates the protocol
    /// invariant; rather than store an empty token, it is treated as a
    /// denial with the generic fallback message.
    pub fn outcome(self) -> AuthOutcome {
        if self.status == "success" {
            match self.token {
                Some(token) => AuthOutcome::Granted(SessionToken(token)),
                None => AuthOutcome::Denied(GENERIC_LOGIN_FAILURE.to_string()),
            }
        } else {
            AuthOutcome::Denied(
                self.message
                    .unwrap_or_else(|| GENERIC_LOGIN_FAILURE.to_string()),
            )
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
