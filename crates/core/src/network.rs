// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Network connectivity state.
//!
//! Connectivity is always passed explicitly into the submission gate;
//! nothing in this workspace subscribes to ambient network events.
//! Unknown is the fail-safe state: it blocks all writes.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Tri-state network connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkState {
    /// The backend is reachable.
    Connected,
    /// The backend is not reachable; writes go to the pending queue.
    Disconnected,
    /// Connectivity has not been resolved yet. Blocks all writes.
    Unknown,
}

impl NetworkState {
    /// Returns the string representation used in display and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkState::Connected => "online",
            NetworkState::Disconnected => "offline",
            NetworkState::Unknown => "unknown",
        }
    }

    /// Returns true if the backend is reachable.
    pub fn is_connected(&self) -> bool {
        matches!(self, NetworkState::Connected)
    }

    /// Returns true if connectivity is unresolved.
    pub fn is_unknown(&self) -> bool {
        matches!(self, NetworkState::Unknown)
    }
}

impl fmt::Display for NetworkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NetworkState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "online" | "connected" => Ok(NetworkState::Connected),
            "offline" | "disconnected" => Ok(NetworkState::Disconnected),
            "unknown" => Ok(NetworkState::Unknown),
            _ => Err(Error::InvalidNetworkState(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "network_tests.rs"]
mod tests;
