// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! Stdout carries only request JSON, so every log line goes to stderr.
//! `SIEVE_LOG` takes a full filter directive (e.g. `sieve_core=debug`) and
//! wins over `-v`. An invalid directive is reported as a warning and `-v`
//! applies instead.

use tracing_subscriber::EnvFilter;

use crate::env;

/// Maps the `-v` count to a default level.
pub fn level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Builds the filter from `SIEVE_LOG` or the verbosity level.
///
/// An unparsable directive falls back to the level and is returned as a
/// warning message for the caller to log once a subscriber is installed.
pub fn filter(verbose: u8, directive: Option<&str>) -> (EnvFilter, Option<String>) {
    let fallback = || EnvFilter::new(level(verbose));
    match directive.map(|d| (d, EnvFilter::try_new(d))) {
        Some((_, Ok(filter))) => (filter, None),
        Some((d, Err(e))) => (
            fallback(),
            Some(format!("ignoring invalid SIEVE_LOG directive {:?}: {}", d, e)),
        ),
        None => (fallback(), None),
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbose: u8) {
    let directive = env::log_filter();
    let (filter, warning) = filter(verbose, directive.as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Some(warning) = warning {
        tracing::warn!("{}", warning);
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
