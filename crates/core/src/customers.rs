// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filters for the `list_customers` action.

use serde::{Deserialize, Serialize};

use crate::value::{DateRangeFilter, IntegerFilter, RangeFilter, StringFilter};

/// Filters applied when listing customers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CustomersFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<StringFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<StringFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<StringFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<StringFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_group_ids: Option<IntegerFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chats_count: Option<RangeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads_count: Option<RangeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visits_count: Option<RangeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateRangeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_last_event_created_at: Option<DateRangeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_last_event_created_at: Option<DateRangeFilter>,
    /// Explicit `false` is meaningful and is sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_customers_without_chats: Option<bool>,
}

impl CustomersFilters {
    /// Creates an empty set of customer filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches (`inclusive`) or excludes customers by country.
    pub fn by_country(mut self, values: Vec<String>, inclusive: bool) -> Self {
        self.country = Some(StringFilter::new(values, inclusive));
        self
    }

    /// Matches (`inclusive`) or excludes customers by email.
    pub fn by_email(mut self, values: Vec<String>, inclusive: bool) -> Self {
        self.email = Some(StringFilter::new(values, inclusive));
        self
    }

    /// Matches (`inclusive`) or excludes customers by name.
    pub fn by_name(mut self, values: Vec<String>, inclusive: bool) -> Self {
        self.name = Some(StringFilter::new(values, inclusive));
        self
    }

    /// Matches (`inclusive`) or excludes customers by ID.
    pub fn by_id(mut self, values: Vec<String>, inclusive: bool) -> Self {
        self.customer_id = Some(StringFilter::new(values, inclusive));
        self
    }

    /// Matches (`inclusive`) or excludes customers by the groups they chatted in.
    pub fn by_chat_group_ids(mut self, values: Vec<i64>, inclusive: bool) -> Self {
        self.chat_group_ids = Some(IntegerFilter::new(values, inclusive));
        self
    }

    pub fn by_chats_count(mut self, range: RangeFilter) -> Self {
        self.chats_count = Some(range);
        self
    }

    pub fn by_threads_count(mut self, range: RangeFilter) -> Self {
        self.threads_count = Some(range);
        self
    }

    pub fn by_visits_count(mut self, range: RangeFilter) -> Self {
        self.visits_count = Some(range);
        self
    }

    pub fn by_creation_time(mut self, range: DateRangeFilter) -> Self {
        self.created_at = Some(range);
        self
    }

    /// Matches by when an agent last interacted with the customer.
    pub fn by_agents_last_activity(mut self, range: DateRangeFilter) -> Self {
        self.agent_last_event_created_at = Some(range);
        self
    }

    /// Matches by when the customer was last active.
    pub fn by_customers_last_activity(mut self, range: DateRangeFilter) -> Self {
        self.customer_last_event_created_at = Some(range);
        self
    }

    pub fn with_include_customers_without_chats(mut self, include: bool) -> Self {
        self.include_customers_without_chats = Some(include);
        self
    }

    /// Returns true if no filter has been set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
#[path = "customers_tests.rs"]
mod tests;
