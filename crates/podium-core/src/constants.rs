//! Fixed user-facing strings.
//!
//! The status and error regions only ever show text; every phrase the
//! client can render lives here so the flows and their tests agree on it.

/// Prefix applied to broadcast notices in the status region.
pub const NOTICE_PREFIX: &str = "Notice: ";

/// Fallback shown when the server denies a login without a message.
pub const GENERIC_LOGIN_FAILURE: &str = "Login failed.";

/// Shown when the login request itself cannot reach the server.
pub const CONNECTIVITY_FAILURE: &str = "Could not reach the server. Please try again.";

/// Status indicator once the live channel is established.
pub const STATUS_CONNECTED: &str = "Connected to the competition server.";

/// Status indicator after the live channel closes. Terminal.
pub const STATUS_DISCONNECTED: &str = "Connection to the server lost.";

/// Status indicator for a channel-level transport error.
pub const STATUS_CHANNEL_ERROR: &str = "Connection error.";
