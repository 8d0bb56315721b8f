// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use fl_client::{RemoteResource, ResourceClient};
use fl_core::DocType;

use super::{display_value, split_fields};
use crate::config::Config;
use crate::error::Result;

/// Fetches a single record by its server-assigned name.
pub async fn run(doctype: &str, name: &str, fields: Option<&str>) -> Result<()> {
    let doctype: DocType = doctype.parse()?;

    let config = Config::load()?;
    let client = ResourceClient::new(&config.base_url);

    let fields = fields.map(split_fields);
    let field_refs: Option<Vec<&str>> = fields
        .as_ref()
        .map(|fields| fields.iter().map(String::as_str).collect());

    let record = client
        .get_by_name(doctype, name, field_refs.as_deref())
        .await?;

    if let Some(object) = record.0.as_object() {
        for (field, value) in object {
            println!("{field}: {}", display_value(value));
        }
    } else {
        println!("{}", record.0);
    }
    Ok(())
}
