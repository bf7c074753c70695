//! Configuration error types.

use thiserror::Error;

/// Errors raised while reading server configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `PORT` was set but did not parse as a TCP port number.
    #[error("Invalid PORT value: {0:?}")]
    InvalidPort(String),
}
