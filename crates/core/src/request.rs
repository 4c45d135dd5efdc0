// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request bodies for the list actions of the agent API.
//!
//! Each envelope wraps a filter aggregate under the `filters` key together
//! with pagination and ordering. An aggregate with nothing set is left out
//! entirely.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::archives::ArchivesFilters;
use crate::chats::ChatsFilters;
use crate::customers::CustomersFilters;
use crate::error::{Error, Result};
use crate::payload::Payload;
use crate::threads::ThreadsFilters;

/// Agent API actions that accept filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ListArchives,
    ListCustomers,
    ListChats,
    ListThreads,
}

impl Action {
    /// Returns the action name used in the API path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ListArchives => "list_archives",
            Action::ListCustomers => "list_customers",
            Action::ListChats => "list_chats",
            Action::ListThreads => "list_threads",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(Error::InvalidSortOrder(s.to_string())),
        }
    }
}

/// Field customers are sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum CustomersSortBy {
    CreatedAt,
    ThreadsCount,
    VisitsCount,
    AgentLastEvent,
    CustomerLastEvent,
}

impl CustomersSortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomersSortBy::CreatedAt => "created_at",
            CustomersSortBy::ThreadsCount => "threads_count",
            CustomersSortBy::VisitsCount => "visits_count",
            CustomersSortBy::AgentLastEvent => "agent_last_event",
            CustomersSortBy::CustomerLastEvent => "customer_last_event",
        }
    }
}

impl fmt::Display for CustomersSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CustomersSortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "created_at" => Ok(CustomersSortBy::CreatedAt),
            "threads_count" => Ok(CustomersSortBy::ThreadsCount),
            "visits_count" => Ok(CustomersSortBy::VisitsCount),
            "agent_last_event" => Ok(CustomersSortBy::AgentLastEvent),
            "customer_last_event" => Ok(CustomersSortBy::CustomerLastEvent),
            _ => Err(Error::InvalidSortBy(s.to_string())),
        }
    }
}

/// Paging and ordering shared by every list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Pagination {
    /// Cursor returned by a previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// A request body for one of the list actions.
pub trait Request: Payload {
    /// The action this body is sent to.
    fn action(&self) -> Action;

    fn pagination_mut(&mut self) -> &mut Pagination;

    /// Requests the page identified by `page_id` (builder pattern).
    fn with_page_id(mut self, page_id: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.pagination_mut().page_id = Some(page_id.into());
        self
    }

    /// Sets the result ordering (builder pattern).
    fn with_sort_order(mut self, sort_order: SortOrder) -> Self
    where
        Self: Sized,
    {
        self.pagination_mut().sort_order = Some(sort_order);
        self
    }

    /// Caps the page size (builder pattern).
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.pagination_mut().limit = Some(limit);
        self
    }
}

/// Body of `list_archives`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ListArchivesRequest {
    #[serde(default, skip_serializing_if = "ArchivesFilters::is_empty")]
    pub filters: ArchivesFilters,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ListArchivesRequest {
    pub fn new(filters: ArchivesFilters) -> Self {
        ListArchivesRequest {
            filters,
            pagination: Pagination::default(),
        }
    }
}

impl Payload for ListArchivesRequest {}

impl Request for ListArchivesRequest {
    fn action(&self) -> Action {
        Action::ListArchives
    }

    fn pagination_mut(&mut self) -> &mut Pagination {
        &mut self.pagination
    }
}

/// Body of `list_customers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ListCustomersRequest {
    #[serde(default, skip_serializing_if = "CustomersFilters::is_empty")]
    pub filters: CustomersFilters,
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<CustomersSortBy>,
}

impl ListCustomersRequest {
    pub fn new(filters: CustomersFilters) -> Self {
        ListCustomersRequest {
            filters,
            pagination: Pagination::default(),
            sort_by: None,
        }
    }

    pub fn with_sort_by(mut self, sort_by: CustomersSortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }
}

impl Payload for ListCustomersRequest {}

impl Request for ListCustomersRequest {
    fn action(&self) -> Action {
        Action::ListCustomers
    }

    fn pagination_mut(&mut self) -> &mut Pagination {
        &mut self.pagination
    }
}

/// Body of `list_chats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ListChatsRequest {
    #[serde(default, skip_serializing_if = "ChatsFilters::is_empty")]
    pub filters: ChatsFilters,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ListChatsRequest {
    pub fn new(filters: ChatsFilters) -> Self {
        ListChatsRequest {
            filters,
            pagination: Pagination::default(),
        }
    }
}

impl Payload for ListChatsRequest {}

impl Request for ListChatsRequest {
    fn action(&self) -> Action {
        Action::ListChats
    }

    fn pagination_mut(&mut self) -> &mut Pagination {
        &mut self.pagination
    }
}

/// Body of `list_threads`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ListThreadsRequest {
    pub chat_id: String,
    #[serde(default, skip_serializing_if = "ThreadsFilters::is_empty")]
    pub filters: ThreadsFilters,
    #[serde(flatten)]
    pub pagination: Pagination,
    /// Skips threads with fewer events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_events_count: Option<u32>,
}

impl ListThreadsRequest {
    pub fn new(chat_id: impl Into<String>, filters: ThreadsFilters) -> Self {
        ListThreadsRequest {
            chat_id: chat_id.into(),
            filters,
            pagination: Pagination::default(),
            min_events_count: None,
        }
    }

    pub fn with_min_events_count(mut self, count: u32) -> Self {
        self.min_events_count = Some(count);
        self
    }
}

impl Payload for ListThreadsRequest {}

impl Request for ListThreadsRequest {
    fn action(&self) -> Action {
        Action::ListThreads
    }

    fn pagination_mut(&mut self) -> &mut Pagination {
        &mut self.pagination
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
