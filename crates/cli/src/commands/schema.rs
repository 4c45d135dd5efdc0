// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for the request bodies the list
//! commands print.

use schemars::schema_for;
use sieve_core::{ListArchivesRequest, ListChatsRequest, ListCustomersRequest, ListThreadsRequest};

use crate::cli::SchemaCommand;
use crate::error::Result;

/// Renders the schema for one request body.
pub fn render(cmd: SchemaCommand) -> Result<String> {
    let schema = match cmd {
        SchemaCommand::Archives => schema_for!(ListArchivesRequest),
        SchemaCommand::Customers => schema_for!(ListCustomersRequest),
        SchemaCommand::Chats => schema_for!(ListChatsRequest),
        SchemaCommand::Threads => schema_for!(ListThreadsRequest),
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    println!("{}", render(cmd)?);
    Ok(())
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
