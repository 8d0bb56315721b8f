// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::{Map, Value};

use fl_client::{ResourceClient, Submission, SubmissionGate};
use fl_core::{DocType, NetworkState, PendingQueue};

use crate::cli::NetworkArg;
use crate::config::{self, Config};
use crate::error::{Error, Result};

/// Creates a record through the submission gate.
///
/// Connectivity is resolved up front (probe on `auto`) and passed
/// explicitly into the gate; offline submissions land in the pending
/// queue and are reported as queued.
pub async fn run(
    doctype: &str,
    sets: &[String],
    data: Option<&str>,
    network: NetworkArg,
) -> Result<()> {
    let doctype: DocType = doctype.parse()?;
    let payload = build_payload(sets, data)?;

    let config = Config::load()?;
    let client = ResourceClient::new(&config.base_url);
    let state = resolve_network(network, &client).await;

    let queue = PendingQueue::open(config::queue_path()?)?;
    let mut gate = SubmissionGate::new(client, queue);

    match gate.submit(state, doctype, payload).await? {
        Submission::Sent(record) => {
            println!("created {}", record.name().unwrap_or("<unnamed>"));
        }
        Submission::Queued => {
            println!(
                "offline: queued for sync ({} pending)",
                gate.queue().len()?
            );
        }
    }
    Ok(())
}

/// Builds the create payload from `--data` and `--set` arguments.
///
/// `--set` fields are applied on top of the `--data` object; values stay
/// strings, matching what a form screen would submit.
fn build_payload(sets: &[String], data: Option<&str>) -> Result<Value> {
    let mut payload = match data {
        Some(raw) => {
            let value: Value =
                serde_json::from_str(raw).map_err(|e| Error::InvalidPayload(e.to_string()))?;
            if !value.is_object() {
                return Err(Error::InvalidPayload("expected a JSON object".to_string()));
            }
            value
        }
        None => Value::Object(Map::new()),
    };

    for set in sets {
        let (field, value) = set
            .split_once('=')
            .ok_or_else(|| Error::InvalidAssignment(set.clone()))?;
        let field = field.trim();
        if field.is_empty() {
            return Err(Error::InvalidAssignment(set.clone()));
        }
        payload[field] = Value::from(value.trim());
    }

    Ok(payload)
}

/// Maps the CLI flag onto an explicit network state.
async fn resolve_network(arg: NetworkArg, client: &ResourceClient) -> NetworkState {
    match arg {
        NetworkArg::Auto => client.probe().await,
        NetworkArg::Online => NetworkState::Connected,
        NetworkArg::Offline => NetworkState::Disconnected,
        NetworkArg::Unknown => NetworkState::Unknown,
    }
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
