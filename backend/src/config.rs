//! Configuration management for the Cafeteria Management Dashboard
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CMS_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Snapshot storage configuration
    pub storage: StorageConfig,

    /// Tab access gate configuration
    pub gate: GateConfig,

    /// Reporting configuration
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding the per-collection snapshot files
    pub data_dir: String,

    /// Seed sample data when the backing store is completely empty
    pub seed_demo_data: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GateConfig {
    /// Shared passphrase unlocking the dashboard tabs for a session.
    /// Pure presentation state; no store operation consults it.
    pub passphrase: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Currency suffix used when formatting exported amounts
    pub currency: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("CMS_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("storage.data_dir", "data")?
            .set_default("storage.seed_demo_data", true)?
            .set_default("gate.passphrase", "P@ssw0rd")?
            .set_default("report.currency", "EGP")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CMS_ prefix)
            .add_source(
                Environment::with_prefix("CMS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
