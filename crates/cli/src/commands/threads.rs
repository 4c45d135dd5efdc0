// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `sieve threads`: builds a `list_threads` request.

use sieve_core::{normalize_timestamp, ListThreadsRequest, ThreadsFilters};

use crate::cli::{RequestArgs, ThreadsArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output;

use super::{apply_paging, load_filters, output_options};

/// Builds the request body from flags, saved filters and config.
pub fn build(
    args: ThreadsArgs,
    request: &RequestArgs,
    config: &Config,
) -> Result<ListThreadsRequest> {
    let mut filters: ThreadsFilters = load_filters(request.filters_file.as_deref())?;

    if let Some(from) = &args.from {
        filters = filters.from_date(normalize_timestamp(from)?);
    }
    if let Some(to) = &args.to {
        filters = filters.to_date(normalize_timestamp(to)?);
    }

    let mut body = ListThreadsRequest::new(args.chat_id, filters);
    if let Some(count) = args.min_events_count {
        body = body.with_min_events_count(count);
    }
    Ok(apply_paging(body, request, config))
}

/// Run the threads command.
pub fn run(args: ThreadsArgs, request: RequestArgs, config: &Config) -> Result<()> {
    let options = output_options(&request, config);
    let body = build(args, &request, config)?;
    output::print(&body, options)
}

#[cfg(test)]
#[path = "threads_tests.rs"]
mod tests;
