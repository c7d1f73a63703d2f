//! Environment-driven configuration.
//!
//! | variable | default |
//! |---|---|
//! | `ROSTER_BIND_ADDR` | `0.0.0.0:8080` |
//! | `ROSTER_LOG_FORMAT` | `json` (`pretty`, `compact`) |
//! | `ROSTER_DEFAULT_STRATEGY` | `manual` (`declarative`) |
//!
//! Log filtering uses the standard `RUST_LOG`.

use std::net::SocketAddr;

use thiserror::Error;

use roster_characters::ValidationStrategy;
use roster_core::DomainError;
use roster_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "ROSTER_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "ROSTER_LOG_FORMAT";
pub const DEFAULT_STRATEGY_VAR: &str = "ROSTER_DEFAULT_STRATEGY";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: invalid socket address `{value}`: {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("{var}: {source}")]
    InvalidStrategy {
        var: &'static str,
        source: DomainError,
    },
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    /// Strategy behind the unversioned `/createCharacter` endpoint.
    pub default_strategy: ValidationStrategy,
    /// Non-fatal problems found while loading; logged once tracing is up.
    pub warnings: Vec<String>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut warnings = Vec::new();

        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = raw_addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: raw_addr.clone(),
                source,
            })?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(raw) => raw.parse::<LogFormat>().unwrap_or_else(|e| {
                warnings.push(format!("{LOG_FORMAT_VAR}: {e}; using json"));
                LogFormat::default()
            }),
        };

        let default_strategy = match lookup(DEFAULT_STRATEGY_VAR) {
            None => ValidationStrategy::default(),
            Some(raw) => raw.parse::<ValidationStrategy>().map_err(|source| {
                ConfigError::InvalidStrategy {
                    var: DEFAULT_STRATEGY_VAR,
                    source,
                }
            })?,
        };

        Ok(Self {
            bind_addr,
            log_format,
            default_strategy,
            warnings,
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_format: LogFormat::default(),
            default_strategy: ValidationStrategy::default(),
            warnings: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.default_strategy, ValidationStrategy::Manual);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn reads_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "127.0.0.1:3000"),
            (LOG_FORMAT_VAR, "pretty"),
            (DEFAULT_STRATEGY_VAR, "declarative"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.default_strategy, ValidationStrategy::Declarative);
    }

    #[test]
    fn bad_bind_addr_is_an_error() {
        let err = ApiConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
        assert!(err.to_string().contains("localhost"));
    }

    #[test]
    fn unknown_strategy_is_an_error() {
        let err =
            ApiConfig::from_lookup(lookup(&[(DEFAULT_STRATEGY_VAR, "annotations")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStrategy { .. }));
    }

    #[test]
    fn unknown_log_format_falls_back_with_warning() {
        let config = ApiConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, "xml")])).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.warnings.len(), 1);
    }
}
