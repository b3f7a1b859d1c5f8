//! Process configuration, read from `STOREFRONT_*` environment variables.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use axum::http::HeaderValue;
use thiserror::Error;

use storefront_observability::LogFormat;

pub const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 3333));
pub const DEFAULT_CATALOG_SIZE: usize = 50;
pub const DEFAULT_CATALOG_SEED: u64 = 42;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(var: &'static str, reason: impl ToString) -> Self {
        Self::Invalid {
            var,
            reason: reason.to_string(),
        }
    }
}

/// Runtime settings for the API binary.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Number of generated demo products.
    pub catalog_size: usize,
    /// RNG seed for the generated catalog; a fixed seed keeps pages stable
    /// across restarts.
    pub catalog_seed: u64,
    /// Allowed CORS origin; `None` allows any origin.
    pub cors_origin: Option<HeaderValue>,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            catalog_size: DEFAULT_CATALOG_SIZE,
            catalog_seed: DEFAULT_CATALOG_SEED,
            cors_origin: None,
            log_format: LogFormat::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank values take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = match get("STOREFRONT_BIND_ADDR") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid("STOREFRONT_BIND_ADDR", e))?,
            None => DEFAULT_BIND_ADDR,
        };

        let catalog_size = match get("STOREFRONT_CATALOG_SIZE") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid("STOREFRONT_CATALOG_SIZE", e))?,
            None => DEFAULT_CATALOG_SIZE,
        };

        let catalog_seed = match get("STOREFRONT_CATALOG_SEED") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid("STOREFRONT_CATALOG_SEED", e))?,
            None => DEFAULT_CATALOG_SEED,
        };

        let cors_origin = get("STOREFRONT_CORS_ORIGIN")
            .map(|v| HeaderValue::from_str(v.trim()))
            .transpose()
            .map_err(|e| ConfigError::invalid("STOREFRONT_CORS_ORIGIN", e))?;

        let log_format = get("STOREFRONT_LOG_FORMAT")
            .map(|v| v.parse::<LogFormat>())
            .transpose()
            .map_err(|e| ConfigError::invalid("STOREFRONT_LOG_FORMAT", e))?
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            catalog_size,
            catalog_seed,
            cors_origin,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3333".parse().unwrap());
        assert_eq!(config.bind_addr, ApiConfig::default().bind_addr);
        assert_eq!(config.catalog_size, 50);
        assert_eq!(config.catalog_seed, 42);
        assert!(config.cors_origin.is_none());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_every_variable() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("STOREFRONT_BIND_ADDR", "127.0.0.1:8080"),
            ("STOREFRONT_CATALOG_SIZE", "500"),
            ("STOREFRONT_CATALOG_SEED", "7"),
            ("STOREFRONT_CORS_ORIGIN", "http://localhost:4200"),
            ("STOREFRONT_LOG_FORMAT", "pretty"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.catalog_size, 500);
        assert_eq!(config.catalog_seed, 7);
        assert_eq!(config.cors_origin.unwrap(), "http://localhost:4200");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[("STOREFRONT_CATALOG_SIZE", "  ")])).unwrap();
        assert_eq!(config.catalog_size, DEFAULT_CATALOG_SIZE);
    }

    #[test]
    fn malformed_values_are_rejected() {
        for (var, value) in [
            ("STOREFRONT_BIND_ADDR", "localhost"),
            ("STOREFRONT_CATALOG_SIZE", "-1"),
            ("STOREFRONT_CATALOG_SEED", "seed"),
            ("STOREFRONT_LOG_FORMAT", "xml"),
        ] {
            let err = ApiConfig::from_lookup(lookup(&[(var, value)])).unwrap_err();
            assert!(err.to_string().starts_with(var), "unexpected error: {err}");
        }
    }
}
