//! Layered settings for the dashboard client.
//!
//! Loading flow:
//! 1. Compiled [`DashSettings::default()`]
//! 2. `~/.podium/settings.json`, merged over the defaults if present
//! 3. `PODIUM_*` environment variables (highest priority)

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized};
use serde::{Deserialize, Serialize};

/// Client settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashSettings {
    /// Base URL of the competition server.
    pub server_url: String,
    /// Directory holding the session file.
    pub data_dir: PathBuf,
}

impl Default for DashSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8000".to_string(),
            data_dir: default_data_dir(),
        }
    }
}

/// Resolve the data directory (`~/.podium`).
fn default_data_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".podium")
}

/// Resolve the settings file path (`~/.podium/settings.json`).
pub fn settings_path() -> PathBuf {
    default_data_dir().join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<DashSettings, figment::Error> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// A missing file yields the defaults; a file with invalid JSON is an
/// error, not a silent fallback.
pub fn load_settings_from_path(path: &Path) -> Result<DashSettings, figment::Error> {
    Figment::from(Serialized::defaults(DashSettings::default()))
        .merge(Json::file(path))
        .merge(Env::prefixed("PODIUM_"))
        .extract()
}
