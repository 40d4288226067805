//! CLI configuration for wgraph
//!
//! Settings are read from a TOML file named by `--config` or the
//! `WGRAPH_CONFIG` environment variable. Command-line flags take precedence
//! over file values.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::OutputFormat;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "WGRAPH_CONFIG";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        if let Some(level) = &config.logging.level {
            if level.trim().is_empty() {
                crate::bail_invalid!("logging.level", "(empty)");
            }
        }
        Ok(config)
    }

    /// Load from `explicit`, else from `WGRAPH_CONFIG`, else use defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match resolve_path(explicit, std::env::var_os(CONFIG_ENV)) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "load_config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Pick the config file path: an explicit path wins over the environment
pub fn resolve_path(explicit: Option<&Path>, env_value: Option<OsString>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}
