// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Convenience lookups over the generic resource client.
//!
//! These are the handful of multi-filter reads the field app needs that
//! don't reduce to a plain list call: records linked to a customer via
//! the Dynamic Link child table, and price-list rates for an item.

use serde_json::Value;

use fl_core::{DocType, Filter, FilterOp};

use crate::error::Result;
use crate::resource::{ListOptions, RemoteRecord, RemoteResource, ResourceClient};

/// The backend's default selling price list.
pub const STANDARD_SELLING: &str = "Standard Selling";

impl ResourceClient {
    /// Contacts linked to a customer through the Dynamic Link child table.
    pub async fn customer_contacts(&self, customer: &str) -> Result<Vec<RemoteRecord>> {
        self.list(DocType::Contact, &ListOptions::filtered(dynamic_link(customer)))
            .await
    }

    /// Addresses linked to a customer through the Dynamic Link child table.
    pub async fn customer_addresses(&self, customer: &str) -> Result<Vec<RemoteRecord>> {
        self.list(DocType::Address, &ListOptions::filtered(dynamic_link(customer)))
            .await
    }

    /// Price-list rate for an item, if one exists.
    pub async fn item_price(
        &self,
        item_code: &str,
        price_list: &str,
    ) -> Result<Option<RemoteRecord>> {
        let opts = ListOptions {
            filters: vec![
                Filter::eq("item_code", item_code),
                Filter::eq("price_list", price_list),
            ],
            limit_page_length: 1,
            ..ListOptions::default()
        };
        let mut records = self.list(DocType::ItemPrice, &opts).await?;
        Ok(if records.is_empty() {
            None
        } else {
            Some(records.remove(0))
        })
    }
}

fn dynamic_link(customer: &str) -> Vec<Filter> {
    vec![
        Filter::on_child("Dynamic Link", "link_doctype", FilterOp::Eq, "Customer"),
        Filter::on_child(
            "Dynamic Link",
            "link_name",
            FilterOp::Eq,
            Value::from(customer),
        ),
    ]
}

#[cfg(test)]
#[path = "wrappers_tests.rs"]
mod tests;
