//! Server configuration, read from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::RouteCacheConfig;

/// Default directory for static assets.
const DEFAULT_STATIC_DIR: &str = "static";

/// Error in a configuration variable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {variable}: {value:?} ({reason})")]
pub struct ConfigError {
    pub variable: &'static str,
    pub value: String,
    pub reason: String,
}

/// Configuration for the metro server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Map file to load. The built-in demo map is used when unset.
    pub map_path: Option<PathBuf>,

    /// Address to listen on (`METRO_ADDR`).
    pub addr: SocketAddr,

    /// Directory served under `/static` (`METRO_STATIC_DIR`).
    pub static_dir: PathBuf,

    /// Route cache settings (`METRO_ROUTE_CACHE_TTL_SECS`,
    /// `METRO_ROUTE_CACHE_CAPACITY`).
    pub route_cache: RouteCacheConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            map_path: None,
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            route_cache: RouteCacheConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or empty variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let addr = match get("METRO_ADDR") {
            Some(value) => value.parse().map_err(|e: std::net::AddrParseError| ConfigError {
                variable: "METRO_ADDR",
                value,
                reason: e.to_string(),
            })?,
            None => defaults.addr,
        };

        let ttl = match get("METRO_ROUTE_CACHE_TTL_SECS") {
            Some(value) => {
                let secs = parse_number("METRO_ROUTE_CACHE_TTL_SECS", value.clone())?;
                let ttl = Duration::from_secs(secs);
                if ttl > RouteCacheConfig::MAX_TTL {
                    return Err(ConfigError {
                        variable: "METRO_ROUTE_CACHE_TTL_SECS",
                        value,
                        reason: "too large".to_string(),
                    });
                }
                ttl
            }
            None => defaults.route_cache.ttl,
        };

        let max_capacity = match get("METRO_ROUTE_CACHE_CAPACITY") {
            Some(value) => parse_number("METRO_ROUTE_CACHE_CAPACITY", value)?,
            None => defaults.route_cache.max_capacity,
        };

        Ok(Self {
            map_path: get("METRO_MAP").map(PathBuf::from),
            addr,
            static_dir: get("METRO_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            route_cache: RouteCacheConfig { ttl, max_capacity },
        })
    }
}

fn parse_number(variable: &'static str, value: String) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError {
        variable,
        value,
        reason: e.to_string(),
    })
}
