// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `sieve archives`: builds a `list_archives` request.

use sieve_core::{normalize_timestamp, ArchivesFilters, ListArchivesRequest, PropertyFilter};

use crate::cli::{ArchivesArgs, RequestArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output;
use crate::parse;

use super::{apply_paging, load_filters, output_options};

/// Builds the request body from flags, saved filters and config.
pub fn build(
    args: ArchivesArgs,
    request: &RequestArgs,
    config: &Config,
) -> Result<ListArchivesRequest> {
    let mut filters: ArchivesFilters = load_filters(request.filters_file.as_deref())?;
    let every = args.require_every_value;

    if let Some(spec) = &args.agents {
        let (includes, values) = parse::property_spec(spec)?;
        filters = filters.by_agents(includes, values, every);
    }
    if !args.groups.is_empty() {
        filters = filters.by_groups(args.groups);
    }
    if let Some(query) = args.query {
        filters = filters.by_query(query);
    }
    if let Some(from) = &args.from {
        filters = filters.from_date(normalize_timestamp(from)?);
    }
    if let Some(to) = &args.to {
        filters = filters.to_date(normalize_timestamp(to)?);
    }
    if let Some(spec) = &args.tags {
        let (includes, values) = parse::property_spec(spec)?;
        filters = filters.by_tags(includes, values, every);
    }
    if let Some(spec) = &args.sales {
        let (includes, values) = parse::property_spec(spec)?;
        filters = filters.by_sales(includes, values, every);
    }
    if let Some(spec) = &args.goals {
        let (includes, values) = parse::property_spec(spec)?;
        filters = filters.by_goals(includes, values, every);
    }
    if let Some(spec) = &args.event_types {
        let set = parse::value_set::<String>(spec, "event types")?;
        filters = filters.by_event_types(set.is_inclusive(), set.values().to_vec(), every);
    }
    if !args.surveys.is_empty() {
        let surveys = args
            .surveys
            .iter()
            .map(|s| parse::survey(s))
            .collect::<Result<Vec<_>>>()?;
        filters = filters.by_surveys(surveys);
    }
    if !args.properties.is_empty() {
        let mut properties = filters.properties.take().unwrap_or_default();
        for arg in &args.properties {
            let (namespace, name, filter): (String, String, PropertyFilter) =
                parse::named_property(arg, every)?;
            properties.insert(namespace, name, filter);
        }
        filters = filters.by_properties(properties);
    }
    // Applied last: thread lookup replaces everything above.
    if !args.threads.is_empty() {
        filters = filters.by_threads(args.threads);
    }

    Ok(apply_paging(
        ListArchivesRequest::new(filters),
        request,
        config,
    ))
}

/// Run the archives command.
pub fn run(args: ArchivesArgs, request: RequestArgs, config: &Config) -> Result<()> {
    let options = output_options(&request, config);
    let body = build(args, &request, config)?;
    output::print(&body, options)
}

#[cfg(test)]
#[path = "archives_tests.rs"]
mod tests;
