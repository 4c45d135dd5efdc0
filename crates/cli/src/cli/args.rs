// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Argument structs for CLI commands.
//!
//! [`RequestArgs`] is flattened into every list command; the others hold
//! the filter flags of one resource each.

use std::path::PathBuf;

use clap::Args;
use sieve_core::{CustomersSortBy, DateRangeFilter, RangeFilter, SortOrder};

/// Paging, ordering and output flags shared by all list commands.
#[derive(Args, Clone, Debug, Default)]
pub struct RequestArgs {
    /// Maximum number of results per page
    #[arg(short = 'n', long)]
    pub limit: Option<u32>,

    /// Result ordering (asc, desc)
    #[arg(long, value_name = "ORDER")]
    pub sort_order: Option<SortOrder>,

    /// Page cursor returned by a previous response
    #[arg(long)]
    pub page_id: Option<String>,

    /// Start from filters saved as JSON; flags override its fields
    #[arg(long, value_name = "PATH")]
    pub filters_file: Option<PathBuf>,

    /// Indent JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print only the request body, without the action wrapper
    #[arg(long)]
    pub body_only: bool,
}

/// Flags for `sieve archives`.
#[derive(Args, Clone, Debug, Default)]
pub struct ArchivesArgs {
    /// Agents taking part (property spec: ?, !?, a,b or !a,b)
    #[arg(long, value_name = "SPEC")]
    pub agents: Option<String>,

    /// Group IDs (comma-separated or repeated)
    #[arg(long = "group", value_delimiter = ',', value_name = "ID")]
    pub groups: Vec<u32>,

    /// Thread IDs; cannot be combined with other filters (comma-separated or repeated)
    #[arg(long = "thread", value_delimiter = ',', value_name = "ID")]
    pub threads: Vec<String>,

    /// Free-text search
    #[arg(long, short)]
    pub query: Option<String>,

    /// Exclude chats before this date
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Exclude chats after this date
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Tags (property spec)
    #[arg(long, value_name = "SPEC")]
    pub tags: Option<String>,

    /// Sales (property spec)
    #[arg(long, value_name = "SPEC")]
    pub sales: Option<String>,

    /// Goals (property spec)
    #[arg(long, value_name = "SPEC")]
    pub goals: Option<String>,

    /// Event types (v1,v2 or !v1,v2)
    #[arg(long, value_name = "SPEC")]
    pub event_types: Option<String>,

    /// Survey answers as type:answer_id (repeatable)
    #[arg(long = "survey", value_name = "TYPE:ANSWER")]
    pub surveys: Vec<String>,

    /// Chat properties as namespace.name=SPEC (repeatable)
    #[arg(long = "property", value_name = "NS.NAME=SPEC")]
    pub properties: Vec<String>,

    /// Match all listed values instead of any
    #[arg(long)]
    pub require_every_value: bool,
}

/// Flags for `sieve customers`.
#[derive(Args, Clone, Debug, Default)]
pub struct CustomersArgs {
    /// Countries (v1,v2 or !v1,v2)
    #[arg(long, value_name = "SPEC")]
    pub country: Option<String>,

    /// Emails (v1,v2 or !v1,v2)
    #[arg(long, value_name = "SPEC")]
    pub email: Option<String>,

    /// Names (v1,v2 or !v1,v2)
    #[arg(long, value_name = "SPEC")]
    pub name: Option<String>,

    /// Customer IDs (v1,v2 or !v1,v2)
    #[arg(long, value_name = "SPEC")]
    pub id: Option<String>,

    /// Groups the customer chatted in (v1,v2 or !v1,v2)
    #[arg(long, value_name = "SPEC")]
    pub chat_groups: Option<String>,

    /// Chats count range, e.g. gte:1,lte:5
    #[arg(long, value_name = "RANGE")]
    pub chats_count: Option<RangeFilter>,

    /// Threads count range
    #[arg(long, value_name = "RANGE")]
    pub threads_count: Option<RangeFilter>,

    /// Visits count range
    #[arg(long, value_name = "RANGE")]
    pub visits_count: Option<RangeFilter>,

    /// Creation date range, e.g. gte:2020-01-01
    #[arg(long, value_name = "RANGE")]
    pub created: Option<DateRangeFilter>,

    /// Date range of the last agent activity
    #[arg(long, value_name = "RANGE")]
    pub agent_last_activity: Option<DateRangeFilter>,

    /// Date range of the customer's last activity
    #[arg(long, value_name = "RANGE")]
    pub customer_last_activity: Option<DateRangeFilter>,

    /// Include (true) or exclude (false) customers without chats
    #[arg(long, value_name = "BOOL")]
    pub include_without_chats: Option<bool>,

    /// Sort field (created_at, threads_count, visits_count, agent_last_event, customer_last_event)
    #[arg(long, value_name = "FIELD")]
    pub sort_by: Option<CustomersSortBy>,
}

/// Flags for `sieve chats`.
#[derive(Args, Clone, Debug, Default)]
pub struct ChatsArgs {
    /// Leave ongoing chats out
    #[arg(long)]
    pub without_active: bool,

    /// Include chats that have no threads
    #[arg(long)]
    pub with_chats_without_threads: bool,

    /// Group IDs (comma-separated or repeated)
    #[arg(long = "group", value_delimiter = ',', value_name = "ID")]
    pub groups: Vec<u32>,

    /// Chat properties as namespace.name=SPEC (repeatable)
    #[arg(long = "property", value_name = "NS.NAME=SPEC")]
    pub properties: Vec<String>,

    /// Match all listed property values instead of any
    #[arg(long)]
    pub require_every_value: bool,
}

/// Flags for `sieve threads`.
#[derive(Args, Clone, Debug, Default)]
pub struct ThreadsArgs {
    /// Chat whose threads are listed
    #[arg(long)]
    pub chat_id: String,

    /// Exclude threads before this date
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Exclude threads after this date
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Skip threads with fewer events
    #[arg(long, value_name = "COUNT")]
    pub min_events_count: Option<u32>,
}
