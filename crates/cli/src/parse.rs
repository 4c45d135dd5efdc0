// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsers for the compact filter syntax accepted on the command line.
//!
//! # Property specs
//!
//! - `?` - property exists
//! - `!?` - property does not exist
//! - `v1,v2` - property matches one of the values
//! - `!v1,v2` - property matches none of the values
//!
//! Values that parse as JSON numbers or booleans and print back unchanged are
//! sent as such. Anything else, including `1e2` or integers too large for
//! an exact JSON number, is sent verbatim as a string.
//!
//! # Value sets
//!
//! `v1,v2` includes, `!v1,v2` excludes.

use std::str::FromStr;

use serde_json::Value;
use sieve_core::{PropertyFilter, SurveyFilter, ValueSet};

use crate::error::{Error, Result};

/// Parses a property spec into the `(includes, values)` pair taken by the
/// `by_*` property builders. `None` values mean an existence check.
pub fn property_spec(spec: &str) -> Result<(bool, Option<Vec<Value>>)> {
    let spec = spec.trim();
    let (includes, rest) = match spec.strip_prefix('!') {
        Some(rest) => (false, rest),
        None => (true, spec),
    };

    if rest == "?" {
        return Ok((includes, None));
    }

    let values: Vec<Value> = split_list(rest).map(json_or_string).collect();
    if values.is_empty() {
        return Err(Error::InvalidProperty(spec.to_string()));
    }
    Ok((includes, Some(values)))
}

/// Parses a property spec into a filter.
pub fn property_filter(spec: &str, require_every_value: bool) -> Result<PropertyFilter> {
    let (includes, values) = property_spec(spec)?;
    Ok(PropertyFilter::new(includes, values, require_every_value))
}

/// Parses `namespace.name=SPEC` into its parts and filter.
pub fn named_property(
    arg: &str,
    require_every_value: bool,
) -> Result<(String, String, PropertyFilter)> {
    let invalid = || Error::InvalidProperty(arg.to_string());
    let (key, spec) = arg.split_once('=').ok_or_else(invalid)?;
    let (namespace, name) = key.trim().split_once('.').ok_or_else(invalid)?;
    if namespace.is_empty() || name.is_empty() {
        return Err(invalid());
    }
    let filter = property_filter(spec, require_every_value)
        .map_err(|_| invalid())?;
    Ok((namespace.to_string(), name.to_string(), filter))
}

/// Parses `v1,v2` / `!v1,v2` into an include or exclude set.
pub fn value_set<T: FromStr>(spec: &str, field: &'static str) -> Result<ValueSet<T>> {
    let spec = spec.trim();
    let (inclusive, rest) = match spec.strip_prefix('!') {
        Some(rest) => (false, rest),
        None => (true, spec),
    };

    let values = split_list(rest)
        .map(|item| {
            item.parse::<T>().map_err(|_| Error::InvalidValue {
                field,
                value: item.to_string(),
            })
        })
        .collect::<Result<Vec<T>>>()?;
    if values.is_empty() {
        return Err(Error::InvalidValue {
            field,
            value: spec.to_string(),
        });
    }
    Ok(ValueSet::new(values, inclusive))
}

/// Parses `type:answer_id`.
pub fn survey(arg: &str) -> Result<SurveyFilter> {
    match arg.split_once(':') {
        Some((survey_type, answer_id))
            if !survey_type.trim().is_empty() && !answer_id.trim().is_empty() =>
        {
            Ok(SurveyFilter::new(survey_type.trim(), answer_id.trim()))
        }
        _ => Err(Error::InvalidSurvey(arg.to_string())),
    }
}

fn split_list(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn json_or_string(item: &str) -> Value {
    match serde_json::from_str::<Value>(item) {
        Ok(value @ (Value::Number(_) | Value::Bool(_))) if value.to_string() == item => value,
        _ => Value::String(item.to_string()),
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
