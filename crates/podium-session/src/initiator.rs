//! Submit orchestration for the login page.
//!
//! Translates one credential submission into either a stored session token
//! plus a navigation to the dashboard, or a visible error. Every failure
//! mode of the request is caught here; only a failed token write propagates,
//! because by then the success path is already one-way.

use podium_core::{AuthOutcome, Credentials, LoginPage, Navigator, Route};
use podium_core::constants::CONNECTIVITY_FAILURE;

use crate::errors::SessionError;
use crate::login::LoginClient;
use crate::store::TokenStore;

/// The session-initiating unit: login client plus token store.
#[derive(Clone, Debug)]
pub struct SessionInitiator {
    client: LoginClient,
    store: TokenStore,
}

impl SessionInitiator {
    /// Wire a login client to the token store it writes on success.
    pub fn new(client: LoginClient, store: TokenStore) -> Self {
        Self { client, store }
    }

    /// Handle one form submission.
    ///
    /// - Granted: exactly one store write, then one navigation to the
    ///   dashboard.
    /// - Denied: the server's message is rendered; no write, no navigation.
    /// - Request failure: a generic connectivity message is rendered; no
    ///   write, no navigation, the form stays up for retry.
    pub async fn submit(
        &self,
        credentials: &Credentials,
        page: &mut impl LoginPage,
        nav: &mut impl Navigator,
    ) -> Result<(), SessionError> {
        match self.client.login(credentials).await {
            Ok(AuthOutcome::Granted(token)) => {
                self.store.save(&token)?;
                nav.navigate(Route::Dashboard);
                Ok(())
            }
            Ok(AuthOutcome::Denied(message)) => {
                page.show_error(&message);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("login request failed: {e}");
                page.show_error(CONNECTIVITY_FAILURE);
                Ok(())
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
