// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command implementations.
//!
//! Each list command splits into `build`, which turns flags and config into
//! a request body, and `run`, which prints it.

pub mod archives;
pub mod chats;
pub mod config;
pub mod customers;
pub mod schema;
pub mod threads;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use sieve_core::Request;

use crate::cli::RequestArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputOptions;

/// Reads saved filters, or starts from defaults when no file is given.
pub(crate) fn load_filters<T>(path: Option<&Path>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            let filters = serde_json::from_str(&content)?;
            tracing::debug!("loaded filters from {}", path.display());
            Ok(filters)
        }
        None => Ok(T::default()),
    }
}

/// Applies paging flags, falling back to config defaults.
pub(crate) fn apply_paging<R: Request>(mut request: R, args: &RequestArgs, config: &Config) -> R {
    if let Some(limit) = args.limit.or(config.limit) {
        request = request.with_limit(limit);
    }
    if let Some(sort_order) = args.sort_order.or(config.sort_order) {
        request = request.with_sort_order(sort_order);
    }
    if let Some(page_id) = &args.page_id {
        request = request.with_page_id(page_id.clone());
    }
    request
}

pub(crate) fn output_options(args: &RequestArgs, config: &Config) -> OutputOptions {
    OutputOptions {
        pretty: args.pretty || config.pretty,
        body_only: args.body_only,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
