//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::transport::HttpConfig;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Prompt storage configuration.
    pub storage: StorageConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP transport configuration.
    pub http: HttpConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for prompt storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory holding one subdirectory per category.
    pub root: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("prompts"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "prompt-house".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            storage: StorageConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            http: HttpConfig::default(),
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
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_PROMPTS_DIR`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(root) = std::env::var("MCP_PROMPTS_DIR") {
            config.storage.root = PathBuf::from(root);
        }

        // Load transport configuration from environment
        config.http = HttpConfig::from_env();

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
        assert_eq!(config.server.name, "prompt-house");
        assert_eq!(config.storage.root, PathBuf::from("prompts"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.http.port, 8765);
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "renamed-house");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "renamed-house");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_prompts_dir_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_PROMPTS_DIR", "/tmp/house");
        }
        let config = Config::from_env();
        assert_eq!(config.storage.root, PathBuf::from("/tmp/house"));
        unsafe {
            std::env::remove_var("MCP_PROMPTS_DIR");
        }
    }

    #[test]
    fn test_http_port_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_HTTP_PORT", "9100");
        }
        let config = Config::from_env();
        assert_eq!(config.http.port, 9100);
        unsafe {
            std::env::remove_var("MCP_HTTP_PORT");
        }
    }

    #[test]
    fn test_bad_http_port_falls_back_to_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_HTTP_PORT", "not-a-port");
        }
        let config = Config::from_env();
        assert_eq!(config.http.port, 8765);
        unsafe {
            std::env::remove_var("MCP_HTTP_PORT");
        }
    }
}
