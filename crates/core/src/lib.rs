// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sieve-core: filter and request payload builders for the agent API.
//!
//! Builders start empty, are extended with chained calls, and serialize to
//! the JSON body an HTTP client sends to the chat platform:
//!
//! ```
//! use sieve_core::{ArchivesFilters, Payload};
//!
//! let body = ArchivesFilters::new()
//!     .by_groups(vec![1, 2])
//!     .from_date("2020-01-01")
//!     .to_json()
//!     .unwrap();
//! assert_eq!(body, r#"{"group_ids":[1,2],"from":"2020-01-01"}"#);
//! ```

pub mod archives;
pub mod chats;
pub mod customers;
pub mod error;
pub mod payload;
pub mod request;
pub mod threads;
pub mod timestamp;
pub mod value;

pub use archives::ArchivesFilters;
pub use chats::ChatsFilters;
pub use customers::CustomersFilters;
pub use error::{Error, Result};
pub use payload::Payload;
pub use request::{
    Action, CustomersSortBy, ListArchivesRequest, ListChatsRequest, ListCustomersRequest,
    ListThreadsRequest, Pagination, Request, SortOrder,
};
pub use threads::ThreadsFilters;
pub use timestamp::{normalize_timestamp, parse_timestamp, timestamp, IntoTimestamp};
pub use value::{
    DateRangeFilter, EventTypesFilter, IntegerFilter, PropertiesFilters, PropertyFilter,
    RangeFilter, StringFilter, SurveyFilter, ValueSet,
};
