// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use args::{ArchivesArgs, ChatsArgs, CustomersArgs, RequestArgs, ThreadsArgs};

#[derive(Parser)]
#[command(name = "sieve")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build filtered list requests for the chat platform agent API")]
#[command(
    long_about = "Build filtered list requests for the chat platform agent API.\n\n\
    Each command assembles the JSON body of one list action from flags and prints it,\n\
    ready to be sent by any HTTP client."
)]
pub struct Cli {
    /// Read defaults from this config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a list_archives request
    #[command(after_help = "\
Examples:
  sieve archives --group 1,2 --from 2020-01-01      Chats in groups 1 and 2 since 2020
  sieve archives --tags '!spam' --query refund      Refund chats not tagged spam
  sieve archives --thread K600PKZON8                Look up chats by thread ID
  sieve archives --property routing.pinned=?        Chats with a pinned routing property")]
    Archives {
        #[command(flatten)]
        filters: ArchivesArgs,
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Build a list_customers request
    #[command(after_help = "\
Examples:
  sieve customers --chats-count gte:1,lte:5         Customers with 1 to 5 chats
  sieve customers --country '!PL' --sort-by created_at
  sieve customers --created gte:2020-01-01 --include-without-chats false")]
    Customers {
        #[command(flatten)]
        filters: CustomersArgs,
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Build a list_chats request
    #[command(after_help = "\
Examples:
  sieve chats --without-active                      Only inactive chats
  sieve chats --group 3 --property source.type=api,facebook")]
    Chats {
        #[command(flatten)]
        filters: ChatsArgs,
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Build a list_threads request
    #[command(after_help = "\
Examples:
  sieve threads --chat-id PJ0MRSHTDG --from 2020-01-01 --min-events-count 2")]
    Threads {
        #[command(flatten)]
        filters: ThreadsArgs,
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Output JSON Schema for a request body
    #[command(subcommand)]
    Schema(SchemaCommand),

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Schema output commands.
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Output JSON Schema for the list_archives body
    Archives,
    /// Output JSON Schema for the list_customers body
    Customers,
    /// Output JSON Schema for the list_chats body
    Chats,
    /// Output JSON Schema for the list_threads body
    Threads,
}

/// Configuration commands.
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the path of the default config file
    Path,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
