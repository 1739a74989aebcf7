// src/config.rs
//! Server configuration read from the environment

use std::env;
use std::str::FromStr;
use tracing::warn;

use crate::paging::{PagingOptions, DEFAULT_SIZE, MAX_SIZE};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:3001,http://localhost:5173";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub paging: PagingOptions,
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            paging: PagingOptions::default(),
            cors_origins: split_origins(DEFAULT_CORS_ORIGINS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Values that fail to
    /// parse fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT);

        let max_size = parse_or(&lookup, "PAGING_MAX_SIZE", MAX_SIZE).max(1);
        let mut default_size = parse_or(&lookup, "PAGING_DEFAULT_SIZE", DEFAULT_SIZE).max(1);
        if default_size > max_size {
            warn!(
                default_size = default_size,
                max_size = max_size,
                "PAGING_DEFAULT_SIZE exceeds PAGING_MAX_SIZE, lowering it"
            );
            default_size = max_size;
        }

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| split_origins(&raw))
            .unwrap_or_else(|| split_origins(DEFAULT_CORS_ORIGINS));

        Self {
            port,
            paging: PagingOptions {
                default_size,
                max_size,
            },
            cors_origins,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key = key, value = %raw, default = %default, "Invalid value, using default");
            default
        }),
        None => default,
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.paging, PagingOptions::default());
        assert_eq!(config.cors_origins.len(), 3);
    }

    #[test]
    fn test_server_config_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("PAGING_DEFAULT_SIZE", "10"),
            ("PAGING_MAX_SIZE", "100"),
            ("CORS_ORIGINS", "https://a.example, ,https://b.example"),
        ]));
        assert_eq!(config.port, 9000);
        assert_eq!(config.paging.default_size, 10);
        assert_eq!(config.paging.max_size, 100);
        assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_server_config_invalid_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("PAGING_MAX_SIZE", "0"),
            ("PAGING_DEFAULT_SIZE", "30"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.paging.max_size, 1);
        assert_eq!(config.paging.default_size, 1);
    }
}
