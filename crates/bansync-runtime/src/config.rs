//! Runtime configuration, loaded from a TOML file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Process-level settings.
///
/// Defaults match the historical document file names, so a config file
/// is only needed to override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Directory holding both documents.
    pub data_dir: PathBuf,
    /// Registry document file name inside `data_dir`.
    pub registry_file: String,
    /// Ban log document file name inside `data_dir`.
    pub ban_log_file: String,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            registry_file: bansync_store::REGISTRY_FILE.to_string(),
            ban_log_file: bansync_store::BAN_LOG_FILE.to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Load from a TOML file; an absent file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Full path of the registry document.
    pub fn registry_path(&self) -> PathBuf {
        self.data_dir.join(&self.registry_file)
    }

    /// Full path of the ban log document.
    pub fn ban_log_path(&self) -> PathBuf {
        self.data_dir.join(&self.ban_log_file)
    }
}
