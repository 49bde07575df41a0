//! # Host Configuration
//!
//! Settings are layered: built-in defaults, then an optional JSON file,
//! then command-line options.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Host runtime configuration
///
/// Missing JSON keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostRuntimeConfig {
    /// Command script to replay instead of reading the terminal
    pub script: Option<PathBuf>,
    /// Prompt printed before each interactive line and each echoed line
    pub prompt: String,
    /// Printed once when an interactive session starts
    pub banner: String,
    /// Printed once when the session ends
    pub farewell: String,
    /// Whether script mode echoes each command before its reply
    pub echo_commands: bool,
    /// Maximum commands to evaluate (0 = unlimited)
    pub max_commands: usize,
    /// Default log filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for HostRuntimeConfig {
    fn default() -> Self {
        Self {
            script: None,
            prompt: "> ".to_string(),
            banner: "Welcome to dirspace".to_string(),
            farewell: "bye.".to_string(),
            echo_commands: true,
            max_commands: 0,
            log_filter: "warn".to_string(),
        }
    }
}

impl HostRuntimeConfig {
    /// Parses a configuration from JSON text
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json_str(&text)
    }
}
