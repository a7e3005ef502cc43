//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Default upstream service address. Every tool request resolves against
/// this base unless `MCP_BASE_URL` overrides it at startup.
pub const DEFAULT_BASE_URL: &str = "https://mcpcounpon.onrender.com";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream HTTP service configuration.
    pub upstream: UpstreamConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the upstream HTTP service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base address every tool request is resolved against. Fixed for the
    /// lifetime of the process; tools cannot change it per call.
    pub base_url: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "coupon-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            upstream: UpstreamConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `MCP_`:
    /// `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("MCP_BASE_URL") {
            info!("Upstream base URL loaded from environment");
            config.upstream.base_url = base_url;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.name, "coupon-mcp-server");
        assert_eq!(config.upstream.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_base_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_BASE_URL", "http://localhost:4000");
        }
        let config = Config::from_env();
        assert_eq!(config.upstream.base_url, "http://localhost:4000");
        unsafe {
            std::env::remove_var("MCP_BASE_URL");
        }
    }

    #[test]
    fn test_base_url_default_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_BASE_URL");
        }
        let config = Config::from_env();
        assert_eq!(config.upstream.base_url, DEFAULT_BASE_URL);
    }
}
