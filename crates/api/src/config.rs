//! Runtime configuration read from the environment at startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

use estoque_observability::LogFormat;
use estoque_products::IdStrategy;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,
    pub id_strategy: IdStrategy,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            id_strategy: IdStrategy::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl ApiConfig {
    /// Read `HOST`, `PORT`, `PRODUCT_ID_STRATEGY` and `LOG_FORMAT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or blank keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get("HOST") {
            config.host = raw.trim().parse().map_err(|e| invalid("HOST", e))?;
        }
        if let Some(raw) = get("PORT") {
            config.port = raw.trim().parse().map_err(|e| invalid("PORT", e))?;
        }
        if let Some(raw) = get("PRODUCT_ID_STRATEGY") {
            config.id_strategy = raw.parse().map_err(|e| invalid("PRODUCT_ID_STRATEGY", e))?;
        }
        if let Some(raw) = get("LOG_FORMAT") {
            config.log_format = raw.parse().map_err(|e| invalid("LOG_FORMAT", e))?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn invalid(key: &'static str, reason: impl core::fmt::Display) -> ConfigError {
    ConfigError::Invalid {
        key,
        reason: reason.to_string(),
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
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_every_key() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
            ("PRODUCT_ID_STRATEGY", "monotonic"),
            ("LOG_FORMAT", "pretty"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8081");
        assert_eq!(config.id_strategy, IdStrategy::Monotonic);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[("PORT", "  ")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn rejects_bad_port() {
        let err = ApiConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn rejects_unknown_strategy() {
        let err = ApiConfig::from_lookup(lookup(&[("PRODUCT_ID_STRATEGY", "uuid")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PRODUCT_ID_STRATEGY", .. }));
    }
}
