//! # podium-live
//!
//! The dashboard half of the Podium client: gates on the stored session
//! token, opens a WebSocket to `/ws/<token>`, and routes each pushed
//! message to the dashboard surfaces.
//!
//! The channel is a receive-only consumer with a one-way lifecycle,
//! `Connecting → Open → Closed`. There is no reconnection; one channel per
//! dashboard run, torn down when the run ends.

#![deny(unsafe_code)]

pub mod channel;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod guard;

pub use channel::{ChannelState, LiveChannel};
pub use config::LiveConfig;
pub use errors::LiveError;
