// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sieve - build filtered list requests for the chat platform agent API.
//!
//! This crate provides the `sieve` CLI. Each list command turns flags, an
//! optional saved filters file, and user configuration into the JSON body
//! of one agent API action and prints it.
//!
//! # Main Components
//!
//! - [`Cli`] - Argument parsing
//! - [`Config`] - User defaults for paging, ordering and output
//! - [`Error`] - Error types for all operations
//!
//! The filter types themselves live in [`sieve_core`].
//!
//! ```rust,ignore
//! use clap::Parser;
//! use sieve::Cli;
//!
//! let cli = Cli::parse_from(["sieve", "chats", "--without-active"]);
//! sieve::run(cli)?;
//! ```

mod cli;
mod commands;
mod env;
mod logging;
mod output;
mod parse;

pub mod config;
pub mod error;

pub use cli::{
    ArchivesArgs, ChatsArgs, Cli, Command, ConfigCommand, CustomersArgs, RequestArgs,
    SchemaCommand, ThreadsArgs,
};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init as init_logging;

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
///
/// Configuration is only loaded by commands that use it, so `schema`,
/// `completion` and `config path` work even with a broken config file.
pub fn run(cli: Cli) -> Result<()> {
    let config = || Config::resolve(cli.config.clone());
    match cli.command {
        Command::Archives { filters, request } => {
            commands::archives::run(filters, request, &config()?)
        }
        Command::Customers { filters, request } => {
            commands::customers::run(filters, request, &config()?)
        }
        Command::Chats { filters, request } => commands::chats::run(filters, request, &config()?),
        Command::Threads { filters, request } => {
            commands::threads::run(filters, request, &config()?)
        }
        Command::Config(ConfigCommand::Show) => commands::config::show(&config()?),
        Command::Config(ConfigCommand::Path) => commands::config::path(),
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "sieve", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
