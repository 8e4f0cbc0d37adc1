//! Process configuration sourced from the environment.

use std::env;

use thiserror::Error;

/// Default listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration problems that abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    #[error("missing required environment variable {name}")]
    MissingVar {
        /// The variable that was not set.
        name: &'static str,
    },
    /// `PORT` was set but does not parse as a TCP port.
    #[error("invalid PORT value {value:?}")]
    InvalidPort {
        /// The rejected value.
        value: String,
    },
}

/// Everything the gateway needs to start.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Remote document-store environment identifier.
    pub env_id: String,
    /// Bearer token presented on every upstream call.
    pub access_token: String,
    /// TCP port to listen on.
    pub port: u16,
}

impl GatewayConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env_id = required(&lookup, "DOCSTORE_ENV_ID")?;
        let access_token = required(&lookup, "DOCSTORE_ACCESS_TOKEN")?;
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
        };
        Ok(Self {
            env_id,
            access_token,
            port,
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingVar { name })
}
