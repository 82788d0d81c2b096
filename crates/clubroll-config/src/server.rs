//! HTTP server settings.
//!
//! - `HOST` (default: `0.0.0.0`)
//! - `PORT` (default: `5000`)
//! - `LOG_DIR` (default: `storage/logs`)

use crate::env::parsed_or;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            log_dir: "storage/logs".to_string(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: parsed_or("PORT", defaults.port),
            log_dir: std::env::var("LOG_DIR").unwrap_or(defaults.log_dir),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
