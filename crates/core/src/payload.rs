// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Serialization of request bodies.
//!
//! Anything implementing [`Payload`] can be handed to an HTTP client as a
//! JSON body. The client itself lives outside this crate.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// A value that serializes to a JSON request body.
pub trait Payload: Serialize {
    /// Serializes to a JSON value.
    fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serializes to a compact JSON string.
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes to an indented JSON string.
    fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Payload for crate::archives::ArchivesFilters {}
impl Payload for crate::customers::CustomersFilters {}
impl Payload for crate::chats::ChatsFilters {}
impl Payload for crate::threads::ThreadsFilters {}
