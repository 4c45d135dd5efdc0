// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the sieve CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] sieve_core::Error),

    #[error("config file not found: {0}\n  hint: pass --config with an existing file or unset SIEVE_CONFIG")]
    ConfigNotFound(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid property filter: '{0}'\n  hint: use namespace.name=SPEC where SPEC is ?, !?, v1,v2 or !v1,v2")]
    InvalidProperty(String),

    #[error("invalid survey filter: '{0}'\n  hint: use type:answer_id, e.g. post_chat:1")]
    InvalidSurvey(String),

    #[error("invalid value '{value}' for {field}")]
    InvalidValue { field: &'static str, value: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for sieve CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
