// src/config.rs
use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;

/// Origins the frontend is served from during development.
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value '{value}'")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Immutable server configuration, built once at startup and passed by
/// reference into router construction.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub allowed_origins: Vec<HeaderValue>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origins: ALLOWED_ORIGINS
                .iter()
                .map(|origin| HeaderValue::from_static(origin))
                .collect(),
        }
    }
}

impl ServerConfig {
    /// Load the configuration, letting a `PORT` variable override the
    /// default port. A `PORT` that is not a valid u16 is a startup error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(value) = std::env::var("PORT") {
            config.port = parse_port(&value)?;
        }
        Ok(config)
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value.parse().map_err(|source| ConfigError::InvalidPort {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.allowed_origins.len(), 2);
        assert_eq!(config.allowed_origins[0], "http://localhost:3000");
        assert_eq!(config.allowed_origins[1], "http://127.0.0.1:3000");
    }

    #[test]
    fn port_parsing() {
        assert_eq!(parse_port("3001").unwrap(), 3001);
        assert!(parse_port("not-a-port").is_err());
        assert!(parse_port("70000").is_err());
    }
}
