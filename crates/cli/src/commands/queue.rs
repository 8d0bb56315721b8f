// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use fl_client::{ResourceClient, SubmissionGate};
use fl_core::PendingQueue;

use super::display_value;
use crate::cli::OutputFormat;
use crate::config::{self, Config};
use crate::error::Result;

/// Shows pending records, oldest first.
///
/// Works without a configured backend: an uninitialized home simply has
/// an empty queue.
pub fn list(output: OutputFormat) -> Result<()> {
    let queue = PendingQueue::open(config::queue_path()?)?;
    let pending = queue.peek_all()?;

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pending)?),
        OutputFormat::Text => {
            if pending.is_empty() {
                println!("queue is empty");
                return Ok(());
            }
            for record in &pending {
                println!(
                    "{}  {}  {}",
                    record.created_at.format("%Y-%m-%d %H:%M:%S"),
                    record.doctype,
                    summarize(&record.payload)
                );
            }
        }
    }
    Ok(())
}

/// Sends pending records to the backend, oldest first.
///
/// A failure stops the drain; the failing record and everything after it
/// stay queued for the next flush.
pub async fn flush() -> Result<()> {
    let config = Config::load()?;
    let queue = PendingQueue::open(config::queue_path()?)?;
    if queue.is_empty()? {
        println!("queue is empty");
        return Ok(());
    }

    let client = ResourceClient::new(&config.base_url);
    let mut gate = SubmissionGate::new(client, queue);

    let report = gate.flush().await?;
    println!(
        "sent {} record(s), {} remaining",
        report.sent, report.remaining
    );
    if let Some(err) = report.stalled_on {
        return Err(err.into());
    }
    Ok(())
}

/// Drops all pending records.
pub fn clear() -> Result<()> {
    let mut queue = PendingQueue::open(config::queue_path()?)?;
    let count = queue.len()?;
    queue.clear()?;
    println!("cleared {count} pending record(s)");
    Ok(())
}

fn summarize(payload: &serde_json::Value) -> String {
    payload
        .as_object()
        .map(|object| {
            object
                .iter()
                .map(|(field, value)| format!("{field}={}", display_value(value)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_else(|| payload.to_string())
}
