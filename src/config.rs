// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Error;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Pennywise", "pennywise"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix used when printing amounts.
    pub currency_symbol: String,
    /// Start sessions with an empty store instead of the sample data.
    pub start_empty: bool,
    /// `tracing` filter directive used when `PENNYWISE_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            currency_symbol: "$".to_string(),
            start_empty: false,
            log_filter: "warn".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.json"))
}

impl Config {
    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read config at {}", path.display()))?;
        let cfg: Config = serde_json::from_str(&raw)
            .map_err(|e| Error::Config(e.to_string()))
            .with_context(|| format!("Parse config at {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Loads from `path` if given, otherwise from the platform config dir.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(p) => Config::load_from(p),
            None => Config::load_from(&config_path()?),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create config dir")?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Write config at {}", path.display()))?;
        Ok(())
    }
}
