//! Environment-driven server configuration.

use crate::error::config::ConfigError;

/// Default listen port, matching the reference deployment.
pub const DEFAULT_PORT: u16 = 4000;

/// Runtime configuration read from the environment.
pub struct Config {
    /// TCP port the HTTP server listens on (`PORT`, default 4000).
    pub port: u16,
    /// sea-orm connection URL (`DATABASE_URL`, default `sqlite::memory:`).
    pub database_url: String,
    /// Whether to populate the store with sample data on startup
    /// (`SEED_SAMPLE_DATA`, default true).
    pub seed_sample_data: bool,
}

impl Config {
    /// Reads configuration from the environment, applying defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PORT").ok(),
            std::env::var("DATABASE_URL").ok(),
            std::env::var("SEED_SAMPLE_DATA").ok(),
        )
    }

    // Separated from the env reads so tests never touch process-wide state.
    fn from_vars(
        port: Option<String>,
        database_url: Option<String>,
        seed_sample_data: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        let database_url = database_url.unwrap_or_else(|| "sqlite::memory:".to_string());

        let seed_sample_data = match seed_sample_data {
            Some(value) => value != "false" && value != "0",
            None => true,
        };

        Ok(Self {
            port,
            database_url,
            seed_sample_data,
        })
    }
}
