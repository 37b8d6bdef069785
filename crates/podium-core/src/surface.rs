//! Collaborator-owned UI surfaces.
//!
//! The login and dashboard flows never touch concrete output directly.
//! They drive these narrow traits, and the binary (or a test) decides what
//! a "page" actually is — a terminal, a recording fake, eventually a GUI.

/// The two pages the client can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// The credential form.
    Login,
    /// The live scoreboard view.
    Dashboard,
}

/// Moves the user between pages.
pub trait Navigator {
    /// Take the user to `route`. One-way; there is no rollback.
    fn navigate(&mut self, route: Route);
}

/// The login page's error region.
pub trait LoginPage {
    /// Render a denial or connectivity message. The form stays on-screen
    /// for retry.
    fn show_error(&mut self, message: &str);
}

/// The dashboard's status and scoreboard regions.
pub trait DashboardPage {
    /// Replace the status line.
    fn set_status(&mut self, text: &str);

    /// Replace the scoreboard region wholesale. No diffing.
    fn set_scoreboard(&mut self, rendered: &str);
}
