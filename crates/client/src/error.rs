// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for fl-client operations.

use thiserror::Error;

/// All possible errors that can occur in fl-client operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("network status is unknown: refusing to submit\n  hint: wait for connectivity to resolve, or pass an explicit network state")]
    UnknownConnectivity,

    /// The backend answered with a non-2xx status. The body carries the
    /// server's message when one was returned.
    #[error("remote request failed ({status}): {body}")]
    Remote { status: u16, body: String },

    /// The request never produced a response (DNS, refused connection,
    /// timed out at the transport layer).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Core(#[from] fl_core::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Core(e.into())
    }
}

/// A specialized Result type for fl-client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
