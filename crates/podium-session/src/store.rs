//! Durable session token storage.
//!
//! A [`TokenStore`] is a narrow accessor over one JSON file holding the
//! session token. The login flow writes it exactly once per successful
//! login; the dashboard flow reads it exactly once per run. Nothing here is
//! ambient global state — callers construct a store for an explicit path
//! and pass it where it is needed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use podium_core::SessionToken;

use crate::errors::SessionError;

/// Default session file name under the data directory.
const SESSION_FILE_NAME: &str = "session.json";

/// On-disk envelope for the stored session.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    version: u32,
    token: SessionToken,
    saved_at: String,
}

/// File-backed accessor for the session token.
#[derive(Clone, Debug)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store addressed at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the conventional location under a data directory.
    pub fn in_data_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(SESSION_FILE_NAME))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored token.
    ///
    /// Returns `None` if the file does not exist, is unreadable, or does
    /// not parse — an unreadable session is the same as no session.
    pub fn load(&self) -> Option<SessionToken> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("failed to read session file: {e}");
                return None;
            }
        };

        match serde_json::from_str::<StoredSession>(&data) {
            Ok(stored) if stored.version == 1 => Some(stored.token),
            Ok(stored) => {
                tracing::warn!("unsupported session file version: {}", stored.version);
                None
            }
            Err(e) => {
                tracing::warn!("failed to parse session file: {e}");
                None
            }
        }
    }

    /// Persist a freshly issued token.
    ///
    /// Creates parent directories if needed. Sets file permissions to
    /// 0o600 on unix.
    pub fn save(&self, token: &SessionToken) -> Result<(), SessionError> {
        let stored = StoredSession {
            version: 1,
            token: token.clone(),
            saved_at: chrono::Utc::now().to_rfc3339(),
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&stored)?;
        std::fs::write(&self.path, &json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            let _ = std::fs::set_permissions(&self.path, perms);
        }

        Ok(())
    }

    /// Remove the stored session, if any.
    pub fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Storage(e)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
