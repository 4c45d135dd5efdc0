// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filters for the `list_chats` action.

use serde::{Deserialize, Serialize};

use crate::value::PropertiesFilters;

/// Filters applied when listing chats.
///
/// Active chats are included by default. The two toggles are only written
/// when they differ from the server's defaults, so a fresh filter
/// serializes to `{}` and [`without_active_chats`](Self::without_active_chats)
/// yields `{"include_active":false}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ChatsFilters {
    #[serde(default = "default_include_active", skip_serializing_if = "is_true")]
    pub include_active: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub include_chats_without_threads: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertiesFilters>,
}

fn default_include_active() -> bool {
    true
}

fn is_true(value: &bool) -> bool {
    *value
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Default for ChatsFilters {
    fn default() -> Self {
        ChatsFilters {
            include_active: default_include_active(),
            include_chats_without_threads: false,
            group_ids: None,
            properties: None,
        }
    }
}

impl ChatsFilters {
    /// Creates chat filters that include active chats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leaves active (ongoing) chats out of the results.
    pub fn without_active_chats(mut self) -> Self {
        self.include_active = false;
        self
    }

    /// Includes chats that have no threads.
    pub fn with_chats_without_threads(mut self) -> Self {
        self.include_chats_without_threads = true;
        self
    }

    pub fn by_groups(mut self, group_ids: Vec<u32>) -> Self {
        self.group_ids = Some(group_ids);
        self
    }

    pub fn by_properties(mut self, properties: PropertiesFilters) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Returns true if nothing differs from the defaults.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
#[path = "chats_tests.rs"]
mod tests;
