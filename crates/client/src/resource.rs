// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Generic resource client for the `/api/resource/<DocType>` surface.
//!
//! One request builder serves every doctype: list/create/get_by_name map
//! onto GET and POST with the backend's query encoding (`fields` and
//! `filters` as JSON-encoded arrays, `limit_page_length`, `order_by`),
//! and responses unwrap a `{"data": ...}` envelope. No retries and no
//! timeout beyond the transport default.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use fl_core::{DocType, Filter, NetworkState};

use crate::error::{Error, Result};

/// Default page size for list requests.
pub const DEFAULT_PAGE_LENGTH: usize = 20;

/// Default ordering: newest records first.
pub const DEFAULT_ORDER_BY: &str = "creation desc";

/// Options for a list request.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Fields to fetch; None uses the doctype's default field list.
    pub fields: Option<Vec<String>>,
    /// Filters, serialized verbatim. Empty means no restriction.
    pub filters: Vec<Filter>,
    pub limit_page_length: usize,
    pub order_by: String,
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions {
            fields: None,
            filters: Vec::new(),
            limit_page_length: DEFAULT_PAGE_LENGTH,
            order_by: DEFAULT_ORDER_BY.to_string(),
        }
    }
}

impl ListOptions {
    /// List options restricted by the given filters, defaults otherwise.
    pub fn filtered(filters: Vec<Filter>) -> Self {
        ListOptions {
            filters,
            ..ListOptions::default()
        }
    }
}

/// An opaque server-owned record.
///
/// The backend assigns every record a unique `name`; nothing else about
/// the shape is assumed, and records are never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteRecord(pub Value);

impl RemoteRecord {
    /// Returns the server-assigned unique name, if present.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Returns a field of the record, if present.
    pub fn field(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// Seam between the submission gate and the HTTP client.
///
/// Tests substitute a recording fake; production code uses
/// [`ResourceClient`].
#[async_trait]
pub trait RemoteResource {
    /// Lists records of a doctype.
    async fn list(&self, doctype: DocType, opts: &ListOptions) -> Result<Vec<RemoteRecord>>;

    /// Creates a record and returns the server's copy.
    async fn create(&self, doctype: DocType, payload: &Value) -> Result<RemoteRecord>;

    /// Fetches a single record by its unique name.
    async fn get_by_name(
        &self,
        doctype: DocType,
        name: &str,
        fields: Option<&[&str]>,
    ) -> Result<RemoteRecord>;
}

/// Response envelope: every endpoint wraps its result in `{"data": ...}`.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// HTTP client for a Frappe-style REST backend.
pub struct ResourceClient {
    http: reqwest::Client,
    base_url: String,
}

impl ResourceClient {
    /// Creates a client for the given base URL (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ResourceClient {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn resource_url(&self, doctype: DocType) -> String {
        format!(
            "{}/api/resource/{}",
            self.base_url,
            encode_segment(doctype.as_str())
        )
    }

    /// Builds the query parameters for a list request.
    fn list_params(doctype: DocType, opts: &ListOptions) -> Result<Vec<(&'static str, String)>> {
        let fields = match &opts.fields {
            Some(fields) => serde_json::to_string(fields)?,
            None => serde_json::to_string(doctype.default_fields())?,
        };
        let filters = serde_json::to_string(&opts.filters)?;

        Ok(vec![
            ("fields", fields),
            ("filters", filters),
            ("limit_page_length", opts.limit_page_length.to_string()),
            ("order_by", opts.order_by.clone()),
        ])
    }

    /// Sends a request and maps non-2xx responses to [`Error::Remote`].
    ///
    /// The error body is the server's response body when present, the
    /// status reason when the body is empty, or the transport message if
    /// the body could not be read.
    async fn execute(
        &self,
        doctype: DocType,
        action: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response> {
        debug!(doctype = doctype.as_str(), action, "remote request");

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(doctype = doctype.as_str(), action, "transport error: {e}");
                return Err(e.into());
            }
        };

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = match resp.text().await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
            Err(e) => e.to_string(),
        };

        let err = Error::Remote {
            status: status.as_u16(),
            body,
        };
        warn!(doctype = doctype.as_str(), action, "remote error: {err}");
        Err(err)
    }

    /// Probes `/api/method/ping`.
    ///
    /// Any HTTP response means the backend is reachable; only a transport
    /// failure maps to Disconnected.
    pub async fn probe(&self) -> NetworkState {
        let url = format!("{}/api/method/ping", self.base_url);
        match self.http.get(&url).send().await {
            Ok(_) => NetworkState::Connected,
            Err(e) => {
                debug!("probe failed: {e}");
                NetworkState::Disconnected
            }
        }
    }
}

#[async_trait]
impl RemoteResource for ResourceClient {
    async fn list(&self, doctype: DocType, opts: &ListOptions) -> Result<Vec<RemoteRecord>> {
        let url = self.resource_url(doctype);
        let params = Self::list_params(doctype, opts)?;

        let resp = self
            .execute(doctype, "list", self.http.get(&url).query(&params))
            .await?;
        let envelope: Envelope<Vec<RemoteRecord>> = resp.json().await?;
        Ok(envelope.data)
    }

    async fn create(&self, doctype: DocType, payload: &Value) -> Result<RemoteRecord> {
        let url = self.resource_url(doctype);
        let body = serde_json::json!({ "data": payload });

        let resp = self
            .execute(doctype, "create", self.http.post(&url).json(&body))
            .await?;
        let envelope: Envelope<RemoteRecord> = resp.json().await?;
        Ok(envelope.data)
    }

    async fn get_by_name(
        &self,
        doctype: DocType,
        name: &str,
        fields: Option<&[&str]>,
    ) -> Result<RemoteRecord> {
        let url = format!("{}/{}", self.resource_url(doctype), encode_segment(name));
        let mut req = self.http.get(&url);
        if let Some(fields) = fields {
            req = req.query(&[("fields", serde_json::to_string(fields)?)]);
        }

        let resp = self.execute(doctype, "get", req).await?;
        let envelope: Envelope<RemoteRecord> = resp.json().await?;
        Ok(envelope.data)
    }
}

/// Percent-encodes spaces so multi-word doctypes and names form valid
/// path segments ("Sales Order" -> "Sales%20Order").
fn encode_segment(segment: &str) -> String {
    segment.replace(' ', "%20")
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
