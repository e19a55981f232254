//! Configuration loading and representation.
//!
//! Read once from the environment at startup:
//!
//! | variable | default |
//! |---|---|
//! | `DASHBOARD_BIND_ADDR` | `0.0.0.0:8080` |
//! | `DASHBOARD_SEED_PATH` | unset (built-in placeholder data) |
//! | `DASHBOARD_LOG_FORMAT` | `json` |

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use dashboard_observability::{LogFormat, UnknownLogFormat};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DASHBOARD_BIND_ADDR is not a socket address: {0:?}")]
    InvalidBindAddr(String),
    #[error("DASHBOARD_LOG_FORMAT: {0}")]
    InvalidLogFormat(#[from] UnknownLogFormat),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub bind_addr: SocketAddr,
    pub seed_path: Option<PathBuf>,
    pub log_format: LogFormat,
    /// Variables that were unset or blank and fell back to their default.
    pub defaulted: Vec<&'static str>,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map instead of the
    /// process environment). Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut defaulted = Vec::new();
        let mut get = |key: &'static str| {
            let value = lookup(key).filter(|v| !v.trim().is_empty());
            if value.is_none() {
                defaulted.push(key);
            }
            value
        };

        let raw_addr = get("DASHBOARD_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_addr.clone()))?;

        let seed_path = get("DASHBOARD_SEED_PATH").map(PathBuf::from);

        let log_format = match get("DASHBOARD_LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            seed_path,
            log_format,
            defaulted,
        })
    }

    /// Report each defaulted variable. Call once logging is initialised,
    /// since the log format itself comes from this config.
    pub fn log_defaults(&self) {
        for key in &self.defaulted {
            match *key {
                "DASHBOARD_BIND_ADDR" => {
                    tracing::info!(bind_addr = %self.bind_addr, "DASHBOARD_BIND_ADDR not set; using default")
                }
                "DASHBOARD_LOG_FORMAT" => {
                    tracing::info!(log_format = ?self.log_format, "DASHBOARD_LOG_FORMAT not set; using default")
                }
                // the seed loader reports its own fallback
                _ => {}
            }
        }
    }
}
