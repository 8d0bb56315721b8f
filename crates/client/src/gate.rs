// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Connectivity-aware submission gate.
//!
//! Given an explicit network state and a create payload, the gate either
//! submits to the backend now or appends the payload to the durable
//! pending queue. Submission is exclusive-or: a payload is never both
//! sent and queued. Unknown connectivity blocks the write entirely, and
//! a failed *online* attempt is a hard error, never a queue trigger.

use serde_json::Value;
use tracing::{debug, info};

use fl_core::{validate_required, DocType, NetworkState, PendingQueue, PendingRecord};

use crate::error::{Error, Result};
use crate::resource::{RemoteRecord, RemoteResource};

/// Outcome of a gated submission.
#[derive(Debug)]
pub enum Submission {
    /// The record was created on the backend.
    Sent(RemoteRecord),
    /// The payload was appended to the local pending queue.
    Queued,
}

impl Submission {
    /// True when the payload was deferred to the local queue.
    pub fn is_offline(&self) -> bool {
        matches!(self, Submission::Queued)
    }
}

/// Result of draining the pending queue.
#[derive(Debug)]
pub struct FlushReport {
    /// Records successfully created on the backend.
    pub sent: usize,
    /// Records still queued after the drain.
    pub remaining: usize,
    /// The error that stopped the drain, if it did not complete.
    pub stalled_on: Option<Error>,
}

/// Routes record creates between the backend and the pending queue.
pub struct SubmissionGate<R> {
    remote: R,
    queue: PendingQueue,
}

impl<R: RemoteResource> SubmissionGate<R> {
    /// Creates a gate over a remote client and an opened queue.
    pub fn new(remote: R, queue: PendingQueue) -> Self {
        SubmissionGate { remote, queue }
    }

    /// Returns the pending queue.
    pub fn queue(&self) -> &PendingQueue {
        &self.queue
    }

    /// Returns the remote client.
    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Submits a record create, routing on connectivity.
    ///
    /// - Required fields are validated before any network or storage call.
    /// - `Unknown` fails with [`Error::UnknownConnectivity`] and touches
    ///   nothing.
    /// - `Connected` delegates to the backend; remote failures propagate
    ///   unchanged.
    /// - `Disconnected` appends to the queue, durable before returning.
    pub async fn submit(
        &mut self,
        network: NetworkState,
        doctype: DocType,
        payload: Value,
    ) -> Result<Submission> {
        validate_required(doctype, &payload)?;

        match network {
            NetworkState::Unknown => Err(Error::UnknownConnectivity),
            NetworkState::Connected => {
                let record = self.remote.create(doctype, &payload).await?;
                info!(
                    doctype = doctype.as_str(),
                    name = record.name().unwrap_or_default(),
                    "record created"
                );
                Ok(Submission::Sent(record))
            }
            NetworkState::Disconnected => {
                let pending = PendingRecord::new(doctype, payload);
                self.queue.enqueue(&pending)?;
                info!(doctype = doctype.as_str(), "record queued offline");
                Ok(Submission::Queued)
            }
        }
    }

    /// Drains the pending queue in order, oldest first.
    ///
    /// Each record is created on the backend and removed from the queue.
    /// The first failure stops the drain; the failing entry and everything
    /// after it stay queued. The returned report carries the stalling
    /// error, if any. Storage failures while rewriting the queue are
    /// returned as hard errors.
    pub async fn flush(&mut self) -> Result<FlushReport> {
        let pending = self.queue.peek_all()?;
        let total = pending.len();
        debug!(total, "flushing pending queue");

        let mut sent = 0;
        let mut stalled_on = None;
        for record in &pending {
            match self.remote.create(record.doctype, &record.payload).await {
                Ok(created) => {
                    info!(
                        doctype = record.doctype.as_str(),
                        name = created.name().unwrap_or_default(),
                        "pending record synced"
                    );
                    sent += 1;
                }
                Err(e) => {
                    stalled_on = Some(e);
                    break;
                }
            }
        }

        if sent > 0 {
            self.queue.remove_first(sent)?;
        }

        Ok(FlushReport {
            sent,
            remaining: total - sent,
            stalled_on,
        })
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
