//! TOML-based server configuration.
//!
//! Reads `server.toml`:
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:3000"
//! max_body_bytes = 65536
//! read_timeout_secs = 10
//!
//! [logging]
//! filter = "info"
//! ```
//!
//! Every field is optional and falls back to the values above.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crew_core::{CrewError, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ServerSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Socket address to listen on
    pub bind: String,
    /// Largest request body accepted, in bytes
    pub max_body_bytes: usize,
    /// Per-connection read timeout
    pub read_timeout_secs: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            max_body_bytes: 64 * 1024,
            read_timeout_secs: 10,
        }
    }
}

impl ServerSection {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Default location: `<config_dir>/crew/server.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("crew").join(CONFIG_FILE_NAME))
    }

    /// Parses a configuration document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.check()?;
        Ok(config)
    }

    /// Loads configuration from a file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| CrewError::Io {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&source).map_err(|e| {
            CrewError::config(format!("Invalid config file '{}': {}", path.display(), e))
        })
    }

    /// Resolves configuration.
    ///
    /// - an explicit path must exist and parse
    /// - otherwise the default path is used when the file is present
    /// - otherwise built-in defaults apply
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!("[ServerConfig] Loading {}", path.display());
            return Self::load_from(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!("[ServerConfig] Loading {}", path.display());
                Self::load_from(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    fn check(&self) -> Result<()> {
        if self.server.bind.trim().is_empty() {
            return Err(CrewError::config("server.bind must not be empty"));
        }
        if self.server.max_body_bytes == 0 {
            return Err(CrewError::config("server.max_body_bytes must be positive"));
        }
        if self.server.read_timeout_secs == 0 {
            return Err(CrewError::config("server.read_timeout_secs must be positive"));
        }
        Ok(())
    }
}
