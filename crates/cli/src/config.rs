// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration.
//!
//! `config.toml` lives in the fieldline home directory: `$FIELDLINE_HOME`
//! when set, else `<user config dir>/fieldline`. The pending queue lives
//! beside it as `pending.jsonl`, so everything the client owns is in one
//! place.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const QUEUE_FILE_NAME: &str = "pending.jsonl";
const HOME_ENV: &str = "FIELDLINE_HOME";

/// Client configuration stored in `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the backend, e.g. "https://erp.example.com".
    pub base_url: String,
}

/// Resolves the fieldline home directory.
pub fn home_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    dirs::config_dir()
        .map(|dir| dir.join("fieldline"))
        .ok_or(Error::NoHomeDir)
}

/// Path of the pending-record queue file.
pub fn queue_path() -> Result<PathBuf> {
    Ok(home_dir()?.join(QUEUE_FILE_NAME))
}

impl Config {
    /// Loads the configuration from the resolved home directory.
    pub fn load() -> Result<Self> {
        Self::load_from(&home_dir()?)
    }

    /// Loads the configuration from a specific home directory.
    pub fn load_from(home: &Path) -> Result<Self> {
        let path = home.join(CONFIG_FILE_NAME);
        let raw = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotInitialized
            } else {
                e.into()
            }
        })?;
        Ok(toml::from_str(&raw)?)
    }

    /// Writes the configuration into a specific home directory.
    ///
    /// Creates the directory if missing and returns the config path.
    pub fn save_to(&self, home: &Path) -> Result<PathBuf> {
        fs::create_dir_all(home)?;
        let path = home.join(CONFIG_FILE_NAME);
        fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(path)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
