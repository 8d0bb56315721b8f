// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use fl_client::{ListOptions, RemoteResource, ResourceClient};
use fl_core::{DocType, Filter};

use super::{record_line, split_fields};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;

/// Lists records of a doctype.
pub async fn run(
    doctype: &str,
    filters: &[String],
    fields: Option<&str>,
    limit: usize,
    order_by: &str,
    output: OutputFormat,
) -> Result<()> {
    let doctype: DocType = doctype.parse()?;
    let filters = filters
        .iter()
        .map(|expr| Filter::parse(expr))
        .collect::<fl_core::Result<Vec<_>>>()?;

    let config = Config::load()?;
    let client = ResourceClient::new(&config.base_url);
    let opts = ListOptions {
        fields: fields.map(split_fields),
        filters,
        limit_page_length: limit,
        order_by: order_by.to_string(),
    };

    let records = client.list(doctype, &opts).await?;
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Text => {
            if records.is_empty() {
                println!("no {} records", doctype);
            }
            for record in &records {
                println!("{}", record_line(record));
            }
        }
    }
    Ok(())
}
