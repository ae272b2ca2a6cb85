//! Configuration management for nmview

use crate::error::{NmviewError, NmviewResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main nmview configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NmviewConfig {
    /// How to reach nmcli
    #[serde(default)]
    pub nmcli: NmcliSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NmcliSettings {
    /// Path to the nmcli executable
    #[serde(default = "default_nmcli_path")]
    pub path: PathBuf,
}

fn default_nmcli_path() -> PathBuf {
    PathBuf::from("/usr/bin/nmcli")
}

impl Default for NmcliSettings {
    fn default() -> Self {
        Self {
            path: default_nmcli_path(),
        }
    }
}

impl NmviewConfig {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> NmviewResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| NmviewError::Config(format!("Failed to read config {:?}: {}", path.as_ref(), e)))?;

        toml::from_str(&content)
            .map_err(|e| NmviewError::Config(format!("Failed to parse config: {}", e)))
    }
}
