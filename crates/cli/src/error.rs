// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the flrs library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'fieldline init --url <base-url>' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("cannot determine the fieldline home directory\n  hint: set FIELDLINE_HOME")]
    NoHomeDir,

    #[error("invalid payload: {0}\n  hint: --data expects a JSON object")]
    InvalidPayload(String),

    #[error("invalid --set argument: '{0}'\n  hint: expected field=value")]
    InvalidAssignment(String),

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] fl_core::Error),

    #[error(transparent)]
    Client(#[from] fl_client::Error),
}

/// A specialized Result type for flrs operations.
pub type Result<T> = std::result::Result<T, Error>;
