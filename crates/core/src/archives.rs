// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filters for the `list_archives` action.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::timestamp::IntoTimestamp;
use crate::value::{EventTypesFilter, PropertiesFilters, PropertyFilter, SurveyFilter};

/// Filters applied when listing archived chats.
///
/// Built empty with [`ArchivesFilters::new`] and extended with chained
/// `by_*` calls. Unset fields are left out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ArchivesFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<PropertyFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<u32>>,
    /// Excludes chats before this timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Excludes chats after this timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertiesFilters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<PropertyFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales: Option<PropertyFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<PropertyFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surveys: Option<Vec<SurveyFilter>>,
    /// Cannot be combined with any other archive filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_ids: Option<Vec<String>>,
    /// Free-text search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_types: Option<EventTypesFilter>,
}

impl ArchivesFilters {
    /// Creates an empty set of archive filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches chats by the agents who took part.
    ///
    /// See [`PropertyFilter::new`] for how the arguments combine.
    pub fn by_agents(
        mut self,
        includes: bool,
        values: Option<Vec<Value>>,
        require_every_value: bool,
    ) -> Self {
        self.agents = Some(PropertyFilter::new(includes, values, require_every_value));
        self
    }

    pub fn by_groups(mut self, group_ids: Vec<u32>) -> Self {
        self.group_ids = Some(group_ids);
        self
    }

    /// Matches chats containing the given threads.
    ///
    /// Thread lookup cannot be combined with other criteria, so this drops
    /// every filter set so far and keeps only the thread IDs.
    pub fn by_threads(self, thread_ids: Vec<String>) -> Self {
        if !self.is_empty() {
            tracing::debug!("thread filter replaces previously set archive filters");
        }
        ArchivesFilters {
            thread_ids: Some(thread_ids),
            ..Self::default()
        }
    }

    pub fn by_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Excludes chats before `date`.
    pub fn from_date(mut self, date: impl IntoTimestamp) -> Self {
        self.from = Some(date.into_timestamp());
        self
    }

    /// Excludes chats after `date`.
    pub fn to_date(mut self, date: impl IntoTimestamp) -> Self {
        self.to = Some(date.into_timestamp());
        self
    }

    pub fn by_properties(mut self, properties: PropertiesFilters) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn by_surveys(mut self, surveys: Vec<SurveyFilter>) -> Self {
        self.surveys = Some(surveys);
        self
    }

    /// Matches chats by tags. See [`PropertyFilter::new`].
    pub fn by_tags(
        mut self,
        includes: bool,
        values: Option<Vec<Value>>,
        require_every_value: bool,
    ) -> Self {
        self.tags = Some(PropertyFilter::new(includes, values, require_every_value));
        self
    }

    /// Matches chats by sales. See [`PropertyFilter::new`].
    pub fn by_sales(
        mut self,
        includes: bool,
        values: Option<Vec<Value>>,
        require_every_value: bool,
    ) -> Self {
        self.sales = Some(PropertyFilter::new(includes, values, require_every_value));
        self
    }

    /// Matches chats by goals. See [`PropertyFilter::new`].
    pub fn by_goals(
        mut self,
        includes: bool,
        values: Option<Vec<Value>>,
        require_every_value: bool,
    ) -> Self {
        self.goals = Some(PropertyFilter::new(includes, values, require_every_value));
        self
    }

    /// Matches (or excludes) chats by the types of events they contain.
    pub fn by_event_types(
        mut self,
        includes: bool,
        values: Vec<String>,
        require_every_value: bool,
    ) -> Self {
        self.event_types = Some(EventTypesFilter::new(
            includes,
            values,
            require_every_value,
        ));
        self
    }

    /// Returns true if no filter has been set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
#[path = "archives_tests.rs"]
mod tests;
