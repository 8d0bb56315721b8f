// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use fl_client::ResourceClient;
use fl_core::NetworkState;

use crate::config::Config;
use crate::error::Result;

/// Probes backend connectivity and reports the result.
pub async fn run() -> Result<()> {
    let config = Config::load()?;
    let client = ResourceClient::new(&config.base_url);

    match client.probe().await {
        NetworkState::Connected => println!("online: {}", config.base_url),
        _ => println!("offline: {}", config.base_url),
    }
    Ok(())
}
