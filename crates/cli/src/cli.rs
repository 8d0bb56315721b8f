// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How to resolve connectivity before a submission.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum NetworkArg {
    /// Probe the backend's ping endpoint.
    #[default]
    Auto,
    /// Assume the backend is reachable.
    Online,
    /// Skip the network and queue locally.
    Offline,
    /// Treat connectivity as unresolved (blocks the write).
    Unknown,
}

#[derive(Parser)]
#[command(name = "fieldline")]
#[command(version)]
#[command(about = "An offline-capable CLI client for Frappe/ERPNext-style REST backends")]
#[command(
    long_about = "An offline-capable CLI client for Frappe/ERPNext-style REST backends.\n\n\
    Lists and creates business records (tasks, customers, items, quotations,\n\
    sales orders) through /api/resource/<DocType>. Creates attempted while\n\
    offline are queued durably and sent later with 'fieldline queue flush'."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize the client configuration
    #[command(after_help = "Examples:\n  \
        fieldline init --url https://erp.example.com")]
    Init {
        /// Base URL of the backend
        #[arg(long)]
        url: String,
    },

    /// List records of a doctype
    #[command(
        arg_required_else_help = true,
        after_help = "Examples:\n  \
        fieldline list task                        Newest 20 tasks\n  \
        fieldline list task -f status=Open         Open tasks only\n  \
        fieldline list quotation -f grand_total>=100 --limit 5\n  \
        fieldline list customer --fields name,customer_name -o json"
    )]
    List {
        /// Doctype (task, customer, item, quotation, sales-order, ...)
        doctype: String,

        /// Filter expression (field=value, field!=value, field>value,
        /// field~value); repeatable
        #[arg(long, short)]
        filter: Vec<String>,

        /// Comma-separated field list (defaults to the doctype's field table)
        #[arg(long)]
        fields: Option<String>,

        /// Page size
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Sort order
        #[arg(long, default_value = "creation desc")]
        order_by: String,

        #[arg(long, short = 'o', value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Fetch a single record by name
    #[command(arg_required_else_help = true)]
    Get {
        /// Doctype (task, customer, item, quotation, sales-order, ...)
        doctype: String,

        /// Server-assigned record name (e.g. "SAL-ORD-2026-00042")
        name: String,

        /// Comma-separated field list to fetch
        #[arg(long)]
        fields: Option<String>,
    },

    /// Create a record, queueing it locally when offline
    #[command(
        arg_required_else_help = true,
        after_help = "Examples:\n  \
        fieldline new task -s subject=\"Follow up\" -s status=Open\n  \
        fieldline new customer -s customer_name=Acme\n  \
        fieldline new task --data '{\"subject\": \"Call back\"}' --network offline"
    )]
    New {
        /// Doctype to create
        doctype: String,

        /// Set a field (field=value); repeatable
        #[arg(long, short)]
        set: Vec<String>,

        /// Full JSON object payload (--set fields are applied on top)
        #[arg(long)]
        data: Option<String>,

        /// Connectivity handling
        #[arg(long, value_enum, default_value_t)]
        network: NetworkArg,
    },

    /// Inspect or drain the offline queue
    Queue {
        #[command(subcommand)]
        command: QueueCommand,
    },

    /// Probe backend connectivity
    Ping,
}

#[derive(Subcommand)]
pub enum QueueCommand {
    /// Show pending records, oldest first
    List {
        #[arg(long, short = 'o', value_enum, default_value_t)]
        output: OutputFormat,
    },
    /// Send pending records to the backend, oldest first
    Flush,
    /// Drop all pending records
    Clear,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
