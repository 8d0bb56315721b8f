// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command implementations for the fieldline CLI.

pub mod get;
pub mod init;
pub mod list;
pub mod new;
pub mod ping;
pub mod queue;

use serde_json::Value;

use fl_client::RemoteRecord;

/// Renders a JSON value for text output, without quotes around strings.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Splits a comma-separated `--fields` argument.
pub(crate) fn split_fields(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|field| field.trim().to_string())
        .filter(|field| !field.is_empty())
        .collect()
}

/// One line per record: name first, then the remaining fields.
pub(crate) fn record_line(record: &RemoteRecord) -> String {
    let mut parts = vec![record.name().unwrap_or("<unnamed>").to_string()];
    if let Some(object) = record.0.as_object() {
        for (field, value) in object {
            if field != "name" {
                parts.push(format!("{field}={}", display_value(value)));
            }
        }
    }
    parts.join("  ")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
