// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::config::{self, Config, CONFIG_FILE_NAME};
use crate::error::{Error, Result};

/// Writes the initial configuration, refusing to overwrite an existing one.
pub fn run(url: &str) -> Result<()> {
    let home = config::home_dir()?;
    let path = home.join(CONFIG_FILE_NAME);
    if path.exists() {
        return Err(Error::AlreadyInitialized(path.display().to_string()));
    }

    let config = Config {
        base_url: url.trim_end_matches('/').to_string(),
    };
    let path = config.save_to(&home)?;
    println!("initialized: {}", path.display());
    Ok(())
}
