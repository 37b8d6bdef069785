//! # podium-dash
//!
//! Competition dashboard client binary. `login` exchanges credentials for a
//! session token; `watch` gates on that token and follows the live
//! scoreboard until the channel closes.

#![deny(unsafe_code)]

mod settings;
mod term;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use podium_core::Credentials;
use podium_live::{LiveChannel, LiveConfig, guard};
use podium_session::{LoginClient, SessionInitiator, TokenStore};

/// Podium dashboard client.
#[derive(Parser, Debug)]
#[command(name = "podium-dash", about = "Podium competition dashboard client")]
struct Cli {
    /// Server base URL (overrides settings and environment).
    #[arg(long)]
    server_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store a session token.
    Login {
        /// Username for the competition account.
        #[arg(long)]
        username: String,

        /// Password for the competition account.
        #[arg(long)]
        password: String,
    },

    /// Open the live scoreboard (requires a stored session).
    Watch,
}

/// Pick the server URL: a CLI flag beats settings and environment.
fn resolve_server_url(settings: &settings::DashSettings, cli_override: Option<String>) -> String {
    let server_url = cli_override.unwrap_or_else(|| settings.server_url.clone());
    tracing::info!(%server_url, "using competition server");
    server_url
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let settings = settings::load_settings().context("loading settings")?;
    let server_url = resolve_server_url(&settings, cli.server_url);

    let store = TokenStore::in_data_dir(&settings.data_dir);
    tracing::debug!(session_file = %store.path().display(), "session store resolved");

    match cli.command {
        Command::Login { username, password } => {
            let initiator = SessionInitiator::new(LoginClient::new(&server_url), store);
            let mut page = term::TermLoginPage;
            let mut nav = term::TermNavigator;

            initiator
                .submit(&Credentials::new(username, password), &mut page, &mut nav)
                .await
                .context("storing session token")?;
        }

        Command::Watch => {
            let mut nav = term::TermNavigator;
            let Some(token) = guard::admit(&store, &mut nav) else {
                return Ok(());
            };

            let config = LiveConfig::new(&server_url, token);
            let mut channel = LiveChannel::connect(&config)
                .await
                .context("opening live channel")?;

            let mut page = term::TermDashboard;
            channel.run(&mut page).await;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_overrides_configured_server_url() {
        let settings = settings::DashSettings {
            server_url: "http://configured.example.com".to_string(),
            ..settings::DashSettings::default()
        };

        let url = resolve_server_url(&settings, Some("http://flag.example.com".to_string()));
        assert_eq!(url, "http://flag.example.com");
    }

    #[test]
    fn configured_server_url_used_without_flag() {
        let settings = settings::DashSettings {
            server_url: "http://configured.example.com".to_string(),
            ..settings::DashSettings::default()
        };

        let url = resolve_server_url(&settings, None);
        assert_eq!(url, "http://configured.example.com");
    }
}
