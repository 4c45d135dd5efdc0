// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sieve-core operations.
//!
//! Building filters never fails. Errors only come from parsing user input
//! into filter values and from serializing payloads.

use thiserror::Error;

/// All possible errors that can occur in sieve-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid timestamp: '{0}'\n  hint: use ISO 8601, e.g. 2017-10-12T14:19:21.010200Z or 2017-10-12T15:19:21+01:00")]
    InvalidTimestamp(String),

    #[error("invalid sort order: '{0}'\n  hint: valid orders are: asc, desc")]
    InvalidSortOrder(String),

    #[error("invalid sort field: '{0}'\n  hint: valid fields are: created_at, threads_count, visits_count, agent_last_event, customer_last_event")]
    InvalidSortBy(String),

    #[error("invalid range: '{0}'\n  hint: use comma-separated bounds like gte:1,lte:5 (bounds: lt, lte, gt, gte, eq)")]
    InvalidRange(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for sieve-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
