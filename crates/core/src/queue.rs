// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable queue for record creates deferred while offline.
//!
//! Pending records are stored as JSONL (one JSON object per line) and
//! each append is fsynced, so a queued record survives process restart.
//! The queue is append-only and dedup-free: entries are independent and
//! a payload is only removed after it has been sent to the backend.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::doctype::DocType;
use crate::error::{Error, Result};

/// A record create deferred to local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingRecord {
    /// Target doctype for the create.
    pub doctype: DocType,
    /// The payload as it would have been posted.
    pub payload: Value,
    /// When the record was queued.
    pub created_at: DateTime<Utc>,
}

impl PendingRecord {
    /// Creates a pending record stamped with the current time.
    pub fn new(doctype: DocType, payload: Value) -> Self {
        PendingRecord {
            doctype,
            payload,
            created_at: Utc::now(),
        }
    }
}

/// Durable queue of pending records backed by a JSONL file.
pub struct PendingQueue {
    path: PathBuf,
}

impl PendingQueue {
    /// Creates or opens a queue at the given path.
    ///
    /// The parent directory and the file are created if missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(PendingQueue { path })
    }

    /// Appends a pending record, fsynced before returning.
    pub fn enqueue(&mut self, record: &PendingRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let json = serde_json::to_string(record)?;
        writeln!(file, "{json}")?;
        file.sync_all()?;

        Ok(())
    }

    /// Reads all queued records in order without removing them.
    pub fn peek_all(&self) -> Result<Vec<PendingRecord>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: PendingRecord = serde_json::from_str(&line)
                .map_err(|e| Error::CorruptedQueue(format!("line {}: {e}", index + 1)))?;
            records.push(record);
        }

        Ok(records)
    }

    /// Returns the number of queued records.
    pub fn len(&self) -> Result<usize> {
        Ok(self.peek_all()?.len())
    }

    /// Returns true if the queue has no records.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Removes the first `count` records.
    ///
    /// Used after a partial drain: the sent records are dropped and the
    /// file is rewritten with the remainder.
    pub fn remove_first(&mut self, count: usize) -> Result<()> {
        let records = self.peek_all()?;
        if count >= records.len() {
            return self.clear();
        }

        let mut file = File::create(&self.path)?;
        for record in &records[count..] {
            let json = serde_json::to_string(record)?;
            writeln!(file, "{json}")?;
        }
        file.sync_all()?;

        Ok(())
    }

    /// Drops all queued records.
    pub fn clear(&mut self) -> Result<()> {
        File::create(&self.path)?;
        Ok(())
    }

    /// Returns the path to the queue file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
