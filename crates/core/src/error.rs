// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for fl-core operations.

use thiserror::Error;

/// All possible errors that can occur in fl-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("required field missing: '{field}'\n  hint: set '{field}' before submitting")]
    FieldRequired { field: &'static str },

    #[error("unknown doctype: '{0}'\n  hint: valid doctypes are: customer, item, item-price, contact, address, quotation, sales-order, sales-taxes-template, task")]
    InvalidDoctype(String),

    #[error("invalid filter expression: '{0}'\n  hint: expected field<op>value, e.g. status=Open or grand_total>=100")]
    InvalidFilter(String),

    #[error("invalid filter operator: '{0}'\n  hint: valid operators are: =, !=, >, <, >=, <=, like, not like, in")]
    InvalidOperator(String),

    #[error("invalid network state: '{0}'\n  hint: valid states are: online, offline, unknown")]
    InvalidNetworkState(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted queue entry: {0}")]
    CorruptedQueue(String),
}

/// A specialized Result type for fl-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
