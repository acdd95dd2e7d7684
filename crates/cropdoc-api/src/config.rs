//! Server configuration.
//!
//! Values come from three layers, later layers winning:
//!
//! 1. Built-in defaults (`127.0.0.1:5000`, built-in catalog, permissive CORS)
//! 2. An optional TOML file
//! 3. The `CROPDOC_BIND` environment variable
//!
//! Command-line flags are applied on top by the binary.
//!
//! Example:
//! ```toml
//! bind = "0.0.0.0:8080"
//! catalog_path = "/etc/cropdoc/diseases.toml"
//! cors_allow_any = false
//! ```

use std::{
    net::{Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::info;

use cropdoc_contracts::error::{CropdocError, CropdocResult};

/// Environment variable overriding `bind`.
pub const BIND_ENV: &str = "CROPDOC_BIND";

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind: SocketAddr,
    /// Catalog file to load. The built-in catalog is used when absent.
    pub catalog_path: Option<PathBuf>,
    /// Allow cross-origin requests from any origin.
    pub cors_allow_any: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            catalog_path: None,
            cors_allow_any: true,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> CropdocResult<Self> {
        toml::from_str(s).map_err(|e| CropdocError::ConfigError {
            reason: format!("failed to parse server config TOML: {}", e),
        })
    }

    pub fn from_file(path: &Path) -> CropdocResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CropdocError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Defaults, overlaid with `path` if given, overlaid with the environment.
    pub fn load(path: Option<&Path>) -> CropdocResult<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> CropdocResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(BIND_ENV) {
            self.bind = raw.trim().parse().map_err(|e| CropdocError::ConfigError {
                reason: format!("invalid {BIND_ENV} value '{raw}': {e}"),
            })?;
            info!(bind = %self.bind, "bind address overridden from environment");
        }
        Ok(self)
    }
}
