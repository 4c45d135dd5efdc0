// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `sieve chats`: builds a `list_chats` request.

use sieve_core::{ChatsFilters, ListChatsRequest};

use crate::cli::{ChatsArgs, RequestArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output;
use crate::parse;

use super::{apply_paging, load_filters, output_options};

/// Builds the request body from flags, saved filters and config.
pub fn build(args: ChatsArgs, request: &RequestArgs, config: &Config) -> Result<ListChatsRequest> {
    let mut filters: ChatsFilters = load_filters(request.filters_file.as_deref())?;

    if args.without_active {
        filters = filters.without_active_chats();
    }
    if args.with_chats_without_threads {
        filters = filters.with_chats_without_threads();
    }
    if !args.groups.is_empty() {
        filters = filters.by_groups(args.groups);
    }
    if !args.properties.is_empty() {
        let mut properties = filters.properties.take().unwrap_or_default();
        for arg in &args.properties {
            let (namespace, name, filter) =
                parse::named_property(arg, args.require_every_value)?;
            properties.insert(namespace, name, filter);
        }
        filters = filters.by_properties(properties);
    }

    Ok(apply_paging(ListChatsRequest::new(filters), request, config))
}

/// Run the chats command.
pub fn run(args: ChatsArgs, request: RequestArgs, config: &Config) -> Result<()> {
    let options = output_options(&request, config);
    let body = build(args, &request, config)?;
    output::print(&body, options)
}

#[cfg(test)]
#[path = "chats_tests.rs"]
mod tests;
