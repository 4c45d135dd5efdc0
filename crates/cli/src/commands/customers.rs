// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `sieve customers`: builds a `list_customers` request.

use sieve_core::{CustomersFilters, ListCustomersRequest};

use crate::cli::{CustomersArgs, RequestArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output;
use crate::parse;

use super::{apply_paging, load_filters, output_options};

/// Builds the request body from flags, saved filters and config.
pub fn build(
    args: CustomersArgs,
    request: &RequestArgs,
    config: &Config,
) -> Result<ListCustomersRequest> {
    let mut filters: CustomersFilters = load_filters(request.filters_file.as_deref())?;

    if let Some(spec) = &args.country {
        filters.country = Some(parse::value_set(spec, "country")?);
    }
    if let Some(spec) = &args.email {
        filters.email = Some(parse::value_set(spec, "email")?);
    }
    if let Some(spec) = &args.name {
        filters.name = Some(parse::value_set(spec, "name")?);
    }
    if let Some(spec) = &args.id {
        filters.customer_id = Some(parse::value_set(spec, "customer id")?);
    }
    if let Some(spec) = &args.chat_groups {
        filters.chat_group_ids = Some(parse::value_set(spec, "chat group id")?);
    }
    if let Some(range) = args.chats_count {
        filters = filters.by_chats_count(range);
    }
    if let Some(range) = args.threads_count {
        filters = filters.by_threads_count(range);
    }
    if let Some(range) = args.visits_count {
        filters = filters.by_visits_count(range);
    }
    if let Some(range) = args.created {
        filters = filters.by_creation_time(range);
    }
    if let Some(range) = args.agent_last_activity {
        filters = filters.by_agents_last_activity(range);
    }
    if let Some(range) = args.customer_last_activity {
        filters = filters.by_customers_last_activity(range);
    }
    if let Some(include) = args.include_without_chats {
        filters = filters.with_include_customers_without_chats(include);
    }

    let mut body = apply_paging(ListCustomersRequest::new(filters), request, config);
    if let Some(sort_by) = args.sort_by.or(config.customers.sort_by) {
        body = body.with_sort_by(sort_by);
    }
    Ok(body)
}

/// Run the customers command.
pub fn run(args: CustomersArgs, request: RequestArgs, config: &Config) -> Result<()> {
    let options = output_options(&request, config);
    let body = build(args, &request, config)?;
    output::print(&body, options)
}

#[cfg(test)]
#[path = "customers_tests.rs"]
mod tests;
