// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The doctype table: server-side resource types this client knows.
//!
//! Each doctype carries its server name, the default field list fetched
//! by list requests, and the fields that must be present before a create
//! is allowed to leave the device. This single table replaces a separate
//! hand-written request function per resource.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A server-side record type addressable under `/api/resource/<DocType>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocType {
    Customer,
    Item,
    #[serde(rename = "Item Price")]
    ItemPrice,
    Contact,
    Address,
    Quotation,
    #[serde(rename = "Sales Taxes and Charges Template")]
    SalesTaxesTemplate,
    #[serde(rename = "Sales Order")]
    SalesOrder,
    Task,
}

impl DocType {
    /// Returns the server-side name used in resource paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Customer => "Customer",
            DocType::Item => "Item",
            DocType::ItemPrice => "Item Price",
            DocType::Contact => "Contact",
            DocType::Address => "Address",
            DocType::Quotation => "Quotation",
            DocType::SalesTaxesTemplate => "Sales Taxes and Charges Template",
            DocType::SalesOrder => "Sales Order",
            DocType::Task => "Task",
        }
    }

    /// Fields fetched by list requests when the caller does not override.
    pub fn default_fields(&self) -> &'static [&'static str] {
        match self {
            DocType::Customer => &[
                "name",
                "customer_name",
                "customer_group",
                "territory",
                "customer_type",
            ],
            DocType::Item => &["name", "item_name", "item_group", "stock_uom"],
            DocType::ItemPrice => &["price_list_rate"],
            DocType::Contact => &["name", "first_name", "last_name"],
            DocType::Address => &["name", "address_line1", "city"],
            DocType::Quotation => &[
                "name",
                "customer_name",
                "transaction_date",
                "status",
                "grand_total",
                "valid_till",
            ],
            DocType::SalesTaxesTemplate => &["name", "title"],
            DocType::SalesOrder => &["name", "transaction_date", "status", "grand_total"],
            DocType::Task => &["name", "subject", "status", "exp_start_date", "exp_end_date"],
        }
    }

    /// Fields that must be present and non-empty in a create payload.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            DocType::Customer => &["customer_name"],
            DocType::Item => &["item_code"],
            DocType::Quotation => &["party_name"],
            DocType::SalesOrder => &["customer"],
            DocType::Task => &["subject"],
            _ => &[],
        }
    }

    /// All doctypes, in table order.
    pub fn all() -> &'static [DocType] {
        &[
            DocType::Customer,
            DocType::Item,
            DocType::ItemPrice,
            DocType::Contact,
            DocType::Address,
            DocType::Quotation,
            DocType::SalesTaxesTemplate,
            DocType::SalesOrder,
            DocType::Task,
        ]
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocType {
    type Err = Error;

    /// Accepts both CLI form ("sales-order") and server form ("Sales Order").
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.to_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "customer" => Ok(DocType::Customer),
            "item" => Ok(DocType::Item),
            "item-price" => Ok(DocType::ItemPrice),
            "contact" => Ok(DocType::Contact),
            "address" => Ok(DocType::Address),
            "quotation" => Ok(DocType::Quotation),
            "sales-taxes-template" | "sales-taxes-and-charges-template" => {
                Ok(DocType::SalesTaxesTemplate)
            }
            "sales-order" => Ok(DocType::SalesOrder),
            "task" => Ok(DocType::Task),
            _ => Err(Error::InvalidDoctype(s.to_string())),
        }
    }
}

/// Checks that every required field for the doctype is present and
/// non-empty in the create payload.
///
/// Runs before any network call or local write so that invalid payloads
/// never reach the backend or the pending queue.
pub fn validate_required(doctype: DocType, payload: &Value) -> Result<()> {
    for field in doctype.required_fields() {
        let present = match payload.get(field) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        };
        if !present {
            return Err(Error::FieldRequired { field });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "doctype_tests.rs"]
mod tests;
