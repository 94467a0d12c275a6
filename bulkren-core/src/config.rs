use crate::executor::FailurePolicy;
use crate::preview::Preview;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".bulkren";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DefaultsConfig {
    /// What to do after a rename fails: "abort" or "continue"
    #[serde(default)]
    pub on_error: FailurePolicy,

    /// Dry-run preview format: "plain", "table" or "json"
    #[serde(default)]
    pub preview_format: Preview,
}

impl Config {
    /// Path of the config file relative to `dir`
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load config from .bulkren/config.toml in the current directory if it exists
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_from_dir(&cwd)
    }

    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = Self::path_in(dir);
        if config_path.exists() {
            return Self::load_from_path(&config_path);
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}
