//! Runtime configuration from environment variables (a `.env` file is loaded by the binary).

use crate::error::ConfigError;
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://postgres:password@db:5432/postgres";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    /// Volatile; every restart starts empty.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Env `DATABASE_URL`.
    pub database_url: String,
    /// Env `STORE_BACKEND`: `postgres` (default) or `memory`.
    pub store_backend: StoreBackend,
    /// Env `BIND_ADDR`.
    pub bind_addr: SocketAddr,
    /// Env `DB_MAX_CONNECTIONS`.
    pub db_max_connections: u32,
    /// Env `CORS_ORIGIN`: the frontend allowed to call the API from a browser.
    pub cors_origin: HeaderValue,
    /// Env `MAX_BODY_BYTES`.
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            store_backend: StoreBackend::Postgres,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            db_max_connections: DEFAULT_MAX_CONNECTIONS,
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; unset variables fall back to the defaults above.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);
        let store_backend = match lookup("STORE_BACKEND") {
            Some(v) => v.parse()?,
            None => defaults.store_backend,
        };
        let bind_addr = parse_var(&lookup, "BIND_ADDR", defaults.bind_addr)?;
        let db_max_connections = parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.db_max_connections)?;
        let max_body_bytes = parse_var(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes)?;
        let cors_origin = match lookup("CORS_ORIGIN") {
            Some(v) => HeaderValue::from_str(v.trim()).map_err(|_| ConfigError::InvalidValue {
                var: "CORS_ORIGIN",
                value: v.clone(),
            })?,
            None => defaults.cors_origin,
        };
        Ok(AppConfig {
            database_url,
            store_backend,
            bind_addr,
            db_max_connections,
            cors_origin,
            max_body_bytes,
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value: v }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|var| map.get(var).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = from_map(&[]).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.store_backend, StoreBackend::Postgres);
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.cors_origin, DEFAULT_CORS_ORIGIN);
        assert_eq!(cfg.db_max_connections, 5);
    }

    #[test]
    fn reads_overrides() {
        let cfg = from_map(&[
            ("DATABASE_URL", "postgres://localhost/garden"),
            ("STORE_BACKEND", "Memory"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("MAX_BODY_BYTES", "1024"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url, "postgres://localhost/garden");
        assert_eq!(cfg.store_backend, StoreBackend::Memory);
        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(cfg.db_max_connections, 12);
        assert_eq!(cfg.max_body_bytes, 1024);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            from_map(&[("DB_MAX_CONNECTIONS", "many")]),
            Err(ConfigError::InvalidValue { var: "DB_MAX_CONNECTIONS", .. })
        ));
        assert!(matches!(
            from_map(&[("STORE_BACKEND", "redis")]),
            Err(ConfigError::UnknownBackend(_))
        ));
        assert!(from_map(&[("BIND_ADDR", "nowhere")]).is_err());
    }
}
