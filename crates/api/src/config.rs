//! Process configuration read from the environment at startup.

use std::net::SocketAddr;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "ROSTER_BIND_ADDR";
pub const MAX_UPLOAD_BYTES_VAR: &str = "ROSTER_MAX_UPLOAD_BYTES";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is invalid ({value:?}): {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Upper bound on request bodies, uploads included.
    pub max_upload_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source (unset variables fall back to defaults).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match lookup(BIND_ADDR_VAR) {
            Some(value) => {
                config.bind_addr = value.trim().parse().map_err(|e: std::net::AddrParseError| {
                    ConfigError::Invalid {
                        var: BIND_ADDR_VAR,
                        value: value.clone(),
                        reason: e.to_string(),
                    }
                })?;
            }
            None => tracing::debug!("{BIND_ADDR_VAR} not set; using {DEFAULT_BIND_ADDR}"),
        }

        if let Some(value) = lookup(MAX_UPLOAD_BYTES_VAR) {
            let parsed: usize = value.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    var: MAX_UPLOAD_BYTES_VAR,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
            if parsed == 0 {
                return Err(ConfigError::Invalid {
                    var: MAX_UPLOAD_BYTES_VAR,
                    value,
                    reason: "must be greater than zero".to_string(),
                });
            }
            config.max_upload_bytes = parsed;
        }

        Ok(config)
    }
}
