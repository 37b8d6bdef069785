//! Terminal implementations of the collaborator surfaces.
//!
//! The flows only know the traits in `podium_core::surface`; these types
//! are what a "page" means when the client runs in a terminal.

use podium_core::{DashboardPage, LoginPage, Navigator, Route};

/// Prints where a navigation landed and what to do there.
///
/// The login and watch commands are separate processes, so "navigating"
/// means telling the user which command comes next.
pub struct TermNavigator;

impl Navigator for TermNavigator {
    fn navigate(&mut self, route: Route) {
        match route {
            Route::Login => {
                println!("Not signed in. Run `podium-dash login` to start a session.");
            }
            Route::Dashboard => {
                println!("Signed in. Run `podium-dash watch` to follow the live scoreboard.");
            }
        }
    }
}

/// The login form's error region, rendered to stderr.
pub struct TermLoginPage;

impl LoginPage for TermLoginPage {
    fn show_error(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

/// The dashboard's status and scoreboard regions, rendered to stdout.
#[derive(Default)]
pub struct TermDashboard;

impl DashboardPage for TermDashboard {
    fn set_status(&mut self, text: &str) {
        println!("== {text}");
    }

    fn set_scoreboard(&mut self, rendered: &str) {
        println!("{rendered}");
    }
}
