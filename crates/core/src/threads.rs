// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filters for the `list_threads` action.

use serde::{Deserialize, Serialize};

use crate::timestamp::IntoTimestamp;

/// Date bounds applied when listing a chat's threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ThreadsFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl ThreadsFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Excludes threads before `date`.
    pub fn from_date(mut self, date: impl IntoTimestamp) -> Self {
        self.from = Some(date.into_timestamp());
        self
    }

    /// Excludes threads after `date`.
    pub fn to_date(mut self, date: impl IntoTimestamp) -> Self {
        self.to = Some(date.into_timestamp());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

#[cfg(test)]
#[path = "threads_tests.rs"]
mod tests;
