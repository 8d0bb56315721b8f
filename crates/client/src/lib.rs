// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! fl-client: HTTP client and submission gate for the fieldline CLI
//!
//! This crate talks to a Frappe/ERPNext-style REST backend
//! (`/api/resource/<DocType>`) and decides, based on explicit network
//! state, whether a record create goes to the backend now or into the
//! local pending queue.

pub mod error;
pub mod gate;
pub mod resource;
mod wrappers;

pub use error::{Error, Result};
pub use gate::{FlushReport, Submission, SubmissionGate};
pub use resource::{ListOptions, RemoteRecord, RemoteResource, ResourceClient};
pub use wrappers::STANDARD_SELLING;
