//! # podium-core
//!
//! Shared vocabulary for the Podium competition dashboard client.
//!
//! This crate provides the types the other Podium crates speak in:
//!
//! - **Auth**: `Credentials`, the `/login` wire response, `AuthOutcome`,
//!   and the opaque `SessionToken`
//! - **Messages**: `InboundMessage`, the tagged union pushed over the live
//!   channel, with a forward-compatible `Unknown` variant
//! - **Surfaces**: narrow traits for the collaborator-owned UI regions
//!   (status, scoreboard, login error) and page navigation
//! - **Constants**: the fixed user-facing strings

#![deny(unsafe_code)]

pub mod auth;
pub mod constants;
pub mod messages;
pub mod surface;

pub use auth::{AuthOutcome, AuthResponse, Credentials, SessionToken};
pub use messages::InboundMessage;
pub use surface::{DashboardPage, LoginPage, Navigator, Route};
