// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! fl-core: Shared library for the fieldline ERP client
//!
//! This crate provides the doctype table, filter model, network state,
//! and the durable pending-record queue used by both the fl-client
//! library and the fieldline CLI. It has no network dependencies.

pub mod doctype;
pub mod error;
pub mod filter;
pub mod network;
pub mod queue;

pub use doctype::{validate_required, DocType};
pub use error::{Error, Result};
pub use filter::{Filter, FilterOp};
pub use network::NetworkState;
pub use queue::{PendingQueue, PendingRecord};
