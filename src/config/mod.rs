// src/config/mod.rs
//! User settings loaded from the TOML config file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Settings with CLI-overridable defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gallery columns (1-8).
    pub columns: u16,
    /// Whether the preview panel starts visible.
    pub preview: bool,
    /// Log destination; the terminal itself never carries logs.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: 4,
            preview: true,
            log_file: None,
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `path` is
    /// `None`. A missing file yields defaults; a malformed one is an
    /// error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("imgsift").join("config.toml"))
    }

    /// Log file to write, defaulting next to the config.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::config_dir().map(|dir| dir.join("imgsift").join("imgsift.log")))
    }
}
