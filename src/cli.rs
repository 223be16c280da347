//! Command line flags

use std::sync::Arc;

use bevy::log::DEFAULT_FILTER;
use clap::Parser;
use tracing::{info, warn};

use crate::auth::{AuthServices, HttpBackend};
use crate::core::{AppSettings, Screen};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tapchess", version, about = "Tap-to-move chess board")]
pub struct Cli {
    /// Account service base URL, overrides the saved setting for this run
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Keep accounts in memory instead of talking to the account service
    #[arg(long)]
    pub offline: bool,

    /// Open on the start screen
    #[arg(long)]
    pub skip_splash: bool,

    /// Extra tracing filter directives, e.g. `tapchess=debug`
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

impl Cli {
    pub fn initial_screen(&self) -> Screen {
        if self.skip_splash {
            Screen::Start
        } else {
            Screen::Splash
        }
    }

    pub fn log_filter(&self) -> String {
        match &self.log_filter {
            Some(extra) => format!("{DEFAULT_FILTER}{extra}"),
            None => format!("{DEFAULT_FILTER}info"),
        }
    }

    /// Identity and record backends for this run.
    ///
    /// An unusable HTTP client falls back to the memory backend so the app
    /// still starts.
    pub fn auth_services(&self, settings: &AppSettings) -> AuthServices {
        if self.offline {
            info!("[AUTH] Offline mode, accounts kept in memory");
            return AuthServices::offline();
        }

        let base_url = self.api_url.as_deref().unwrap_or(&settings.api_base_url);
        match HttpBackend::new(base_url) {
            Ok(backend) => {
                info!("[AUTH] Account service at {}", backend.base_url());
                AuthServices::from_backend(Arc::new(backend))
            }
            Err(e) => {
                warn!("[AUTH] {}, falling back to offline mode", e);
                AuthServices::offline()
            }
        }
    }
}
