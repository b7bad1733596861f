//! Configuration Module
//!
//! This module defines all configuration structures for the validation service.
//! Configuration is loaded from TOML files and parsed using serde.

use serde::Deserialize;
use std::fs;

/// Main configuration structure
///
/// Contains all configuration sections for the validation service.
/// Loaded from a TOML file (e.g., config/default.toml).
///
/// # Example TOML
/// ```toml
/// [api]
/// host = "127.0.0.1"
/// port = 8080
///
/// [kueue]
/// enabled = true
/// supported_queues = ["default-queue", "high-priority"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub kueue: KueueConfig,
}

/// API server configuration
///
/// Controls the JSON-RPC API endpoint settings.
///
/// # Fields
/// - `host`: IP address to bind to (e.g., "127.0.0.1" or "0.0.0.0")
/// - `port`: TCP port to listen on (e.g., 8080)
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

/// Kueue feature configuration
///
/// Describes the cluster's queue-based scheduling setup.
///
/// # Fields
/// - `enabled`: whether the Kueue batch-queueing subsystem is active
/// - `supported_queues`: allow-list of queue names the cluster recognizes.
///   The configured order is the order used when listing queues in
///   validation error messages.
#[derive(Debug, Clone, Deserialize)]
pub struct KueueConfig {
    pub enabled: bool,
    pub supported_queues: Vec<String>,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    ///
    /// # Example
    /// ```no_run
    /// # fn main() -> anyhow::Result<()> {
    /// let config = speccheck::Config::load("config/default.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(path: &str) -> anyhow::Result<Self> {
        // Read the file contents as a string
        let content = fs::read_to_string(path)?;

        // Parse the TOML into our Config structure
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }
}
