//! # podium-session
//!
//! The session-initiating half of the Podium client: exchanges a credential
//! pair for a session token over HTTP and owns the durable token store the
//! dashboard later reads.
//!
//! The two halves of the client never call each other; the token file is
//! their only coupling.

#![deny(unsafe_code)]

pub mod errors;
pub mod initiator;
pub mod login;
pub mod store;

pub use errors::SessionError;
pub use initiator::SessionInitiator;
pub use login::LoginClient;
pub use store::TokenStore;
