//! Application configuration loaded from environment variables.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Deployment Metadata ===
    /// Deployment environment name (development, staging, production).
    #[serde(default = "default_app_env")]
    pub app_env: String,

    /// Host name reported by the environment endpoint.
    #[serde(default = "default_hostname")]
    pub hostname: String,

    /// Service name reported by the environment endpoint.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

fn default_port() -> u16 {
    8080
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_hostname() -> String {
    "unknown".to_string()
}

fn default_service_name() -> String {
    "local".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.app_env.is_empty() {
            return Err(Error::InvalidConfig("APP_ENV must not be empty".to_string()));
        }

        if self.service_name.is_empty() {
            return Err(Error::InvalidConfig(
                "SERVICE_NAME must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            app_env: default_app_env(),
            hostname: default_hostname(),
            service_name: default_service_name(),
        }
    }
}
