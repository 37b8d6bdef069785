//! Access guard for the dashboard.

use podium_core::{Navigator, Route, SessionToken};
use podium_session::TokenStore;

/// Gate the dashboard on a stored session token.
///
/// Reads the store exactly once. Absence sends the user back to the login
/// page and returns `None` — no channel is opened, no dashboard state is
/// initialized. A token cleared later does not retroactively close a
/// channel this call admitted.
pub fn admit(store: &TokenStore, nav: &mut impl Navigator) -> Option<SessionToken> {
    match store.load() {
        Some(token) => Some(token),
        None => {
            tracing::debug!("no session token stored, returning to login");
            nav.navigate(Route::Login);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        routes: Vec<Route>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, route: Route) {
            self.routes.push(route);
        }
    }

    #[test]
    fn missing_token_navigates_to_login() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::in_data_dir(dir.path());
        let mut nav = RecordingNavigator::default();

        assert!(admit(&store, &mut nav).is_none());
        assert_eq!(nav.routes, vec![Route::Login]);
    }

    #[test]
    fn stored_token_is_admitted_without_navigation() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::in_data_dir(dir.path());
        store.save(&SessionToken::from("abc123")).unwrap();
        let mut nav = RecordingNavigator::default();

        assert_eq!(admit(&store, &mut nav), Some(SessionToken::from("abc123")));
        assert!(nav.routes.is_empty());
    }
}
