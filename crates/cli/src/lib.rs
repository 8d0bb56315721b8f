// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! flrs - Library backing the `fieldline` CLI.
//!
//! fieldline is an offline-capable command-line client for
//! Frappe/ERPNext-style REST backends: it lists and creates business
//! records through `/api/resource/<DocType>`, and queues creates locally
//! when the device is offline so they can be flushed later.
//!
//! # Main Components
//!
//! - [`Cli`] - Command-line surface (init, list, get, new, queue, ping)
//! - [`Config`] - Backend URL stored in the fieldline home directory
//! - [`Error`] - Error types for all operations
//!
//! The heavy lifting lives in `fl-core` (doctype table, filters, pending
//! queue) and `fl-client` (HTTP client, submission gate).

mod cli;
mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command, NetworkArg, OutputFormat, QueueCommand};
pub use config::Config;
pub use error::{Error, Result};

/// Dispatches a parsed command.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init { url } => commands::init::run(&url),
        Command::List {
            doctype,
            filter,
            fields,
            limit,
            order_by,
            output,
        } => commands::list::run(&doctype, &filter, fields.as_deref(), limit, &order_by, output).await,
        Command::Get {
            doctype,
            name,
            fields,
        } => commands::get::run(&doctype, &name, fields.as_deref()).await,
        Command::New {
            doctype,
            set,
            data,
            network,
        } => commands::new::run(&doctype, &set, data.as_deref(), network).await,
        Command::Queue { command } => match command {
            QueueCommand::List { output } => commands::queue::list(output),
            QueueCommand::Flush => commands::queue::flush().await,
            QueueCommand::Clear => commands::queue::clear(),
        },
        Command::Ping => commands::ping::run().await,
    }
}
