//! Server configuration loaded from the environment.

use std::net::SocketAddr;

use crate::shuttle::ShuttleConfig;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

pub const BIND_ADDR_VAR: &str = "SHUTTLE_BIND_ADDR";
pub const BASE_URL_VAR: &str = "SHUTTLE_BASE_URL";
pub const TIMEOUT_VAR: &str = "SHUTTLE_TIMEOUT_SECS";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} {value:?}: {message}")]
    Invalid {
        var: &'static str,
        value: String,
        message: String,
    },
}

/// Settings for the HTTP server and its upstream client.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// Settings for the shuttle site client
    pub shuttle: ShuttleConfig,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or empty variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind_raw = get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                value: bind_raw.clone(),
                message: e.to_string(),
            })?;

        let mut shuttle = ShuttleConfig::new();

        if let Some(url) = get(BASE_URL_VAR) {
            let url = url.trim();
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid {
                    var: BASE_URL_VAR,
                    value: url.to_string(),
                    message: "must start with http:// or https://".to_string(),
                });
            }
            shuttle = shuttle.with_base_url(url);
        }

        if let Some(raw) = get(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::Invalid {
                    var: TIMEOUT_VAR,
                    value: raw.clone(),
                    message: e.to_string(),
                })?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    var: TIMEOUT_VAR,
                    value: raw,
                    message: "must be greater than zero".to_string(),
                });
            }
            shuttle = shuttle.with_timeout(secs);
        }

        Ok(Self { bind_addr, shuttle })
    }
}
