//! Server configuration module

use clap::Parser;

use crate::config::{logging::LoggingConfig, server::ServerRuntimeConfig};

pub(crate) mod logging;
pub(crate) mod server;

/// Checkout JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "checkout-json", about = "Checkout JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Load configuration from `.env`, the environment and CLI arguments, in rising precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // A missing .env file is fine
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
