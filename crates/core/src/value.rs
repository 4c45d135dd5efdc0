// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sub-filter value objects shared by the resource filters.
//!
//! Mutually exclusive shapes (presence check vs. value set, include vs.
//! exclude) are enums, so a filter can never carry both at once.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::timestamp::{normalize_timestamp, IntoTimestamp};

/// Matcher for a named property's value(s).
///
/// Deserializing rejects objects that mix the presence check with a value
/// set, or both value sets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum PropertyFilter {
    /// Property must (or must not) be present, regardless of value.
    Exists { exists: bool },
    /// Property must hold one of (or all of) the values.
    Values {
        values: Vec<Value>,
        require_every_value: bool,
    },
    /// Property must not hold any of (or all of) the values.
    ExcludeValues {
        exclude_values: Vec<Value>,
        require_every_value: bool,
    },
}

impl PropertyFilter {
    /// Creates a property filter.
    ///
    /// Without values the filter only checks existence, using `includes` as
    /// the expected presence, and `require_every_value` is ignored. With
    /// values, `includes` selects whether they must match or be excluded,
    /// and `require_every_value` switches from "any" to "all" matching.
    pub fn new(includes: bool, values: Option<Vec<Value>>, require_every_value: bool) -> Self {
        match values {
            None => PropertyFilter::Exists { exists: includes },
            Some(values) if includes => PropertyFilter::Values {
                values,
                require_every_value,
            },
            Some(exclude_values) => PropertyFilter::ExcludeValues {
                exclude_values,
                require_every_value,
            },
        }
    }

    /// Returns the existence flag for presence-check filters.
    pub fn exists(&self) -> Option<bool> {
        match self {
            PropertyFilter::Exists { exists } => Some(*exists),
            _ => None,
        }
    }

    /// Returns the "all values" flag for value-set filters.
    pub fn require_every_value(&self) -> Option<bool> {
        match self {
            PropertyFilter::Exists { .. } => None,
            PropertyFilter::Values {
                require_every_value,
                ..
            }
            | PropertyFilter::ExcludeValues {
                require_every_value,
                ..
            } => Some(*require_every_value),
        }
    }
}

/// Include-or-exclude set of plain values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum ValueSet<T> {
    /// Values to match.
    Include { values: Vec<T> },
    /// Values to exclude.
    Exclude { exclude_values: Vec<T> },
}

/// Filter on string fields (country, email, name, customer ID).
pub type StringFilter = ValueSet<String>;

/// Filter on integer fields (chat group IDs).
pub type IntegerFilter = ValueSet<i64>;

impl<T> ValueSet<T> {
    /// Creates a set that matches `values` when `inclusive`, or excludes
    /// them otherwise.
    pub fn new(values: Vec<T>, inclusive: bool) -> Self {
        if inclusive {
            ValueSet::Include { values }
        } else {
            ValueSet::Exclude {
                exclude_values: values,
            }
        }
    }

    pub fn is_inclusive(&self) -> bool {
        matches!(self, ValueSet::Include { .. })
    }

    pub fn values(&self) -> &[T] {
        match self {
            ValueSet::Include { values } => values,
            ValueSet::Exclude { exclude_values } => exclude_values,
        }
    }
}

/// Filter on event types in archived chats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum EventTypesFilter {
    Values {
        values: Vec<String>,
        require_every_value: bool,
    },
    ExcludeValues {
        exclude_values: Vec<String>,
        require_every_value: bool,
    },
}

impl EventTypesFilter {
    /// Creates an event type filter; `includes` picks match or exclude.
    pub fn new(includes: bool, values: Vec<String>, require_every_value: bool) -> Self {
        if includes {
            EventTypesFilter::Values {
                values,
                require_every_value,
            }
        } else {
            EventTypesFilter::ExcludeValues {
                exclude_values: values,
                require_every_value,
            }
        }
    }
}

/// Wire form shared by the value-set filters. Every key is optional here;
/// which combinations are allowed is decided per filter type.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawValueFilter<T> {
    exists: Option<bool>,
    values: Option<Vec<T>>,
    exclude_values: Option<Vec<T>>,
    require_every_value: Option<bool>,
}

enum Shape<T> {
    Exists(bool),
    Include(Vec<T>),
    Exclude(Vec<T>),
}

impl<T> RawValueFilter<T> {
    fn shape<E: de::Error>(self) -> std::result::Result<(Shape<T>, Option<bool>), E> {
        let shape = match (self.exists, self.values, self.exclude_values) {
            (Some(exists), None, None) => Shape::Exists(exists),
            (None, Some(values), None) => Shape::Include(values),
            (None, None, Some(values)) => Shape::Exclude(values),
            (None, None, None) => {
                return Err(E::custom("expected `exists`, `values` or `exclude_values`"))
            }
            _ => {
                return Err(E::custom(
                    "`exists`, `values` and `exclude_values` are mutually exclusive",
                ))
            }
        };
        Ok((shape, self.require_every_value))
    }
}

impl<'de> Deserialize<'de> for PropertyFilter {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (shape, every) =
            RawValueFilter::<Value>::deserialize(deserializer)?.shape::<D::Error>()?;
        match shape {
            Shape::Exists(_) if every.is_some() => Err(de::Error::custom(
                "`require_every_value` cannot be combined with `exists`",
            )),
            Shape::Exists(exists) => Ok(PropertyFilter::Exists { exists }),
            Shape::Include(values) => Ok(PropertyFilter::Values {
                values,
                require_every_value: every.unwrap_or(false),
            }),
            Shape::Exclude(exclude_values) => Ok(PropertyFilter::ExcludeValues {
                exclude_values,
                require_every_value: every.unwrap_or(false),
            }),
        }
    }
}

impl<'de, T> Deserialize<'de> for ValueSet<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (shape, every) =
            RawValueFilter::<T>::deserialize(deserializer)?.shape::<D::Error>()?;
        if every.is_some() {
            return Err(de::Error::unknown_field(
                "require_every_value",
                &["values", "exclude_values"],
            ));
        }
        match shape {
            Shape::Exists(_) => Err(de::Error::unknown_field(
                "exists",
                &["values", "exclude_values"],
            )),
            Shape::Include(values) => Ok(ValueSet::Include { values }),
            Shape::Exclude(exclude_values) => Ok(ValueSet::Exclude { exclude_values }),
        }
    }
}

impl<'de> Deserialize<'de> for EventTypesFilter {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (shape, every) =
            RawValueFilter::<String>::deserialize(deserializer)?.shape::<D::Error>()?;
        let require_every_value = every.unwrap_or(false);
        match shape {
            Shape::Exists(_) => Err(de::Error::unknown_field(
                "exists",
                &["values", "exclude_values", "require_every_value"],
            )),
            Shape::Include(values) => Ok(EventTypesFilter::Values {
                values,
                require_every_value,
            }),
            Shape::Exclude(exclude_values) => Ok(EventTypesFilter::ExcludeValues {
                exclude_values,
                require_every_value,
            }),
        }
    }
}

/// Numeric range to match counters against.
///
/// Bounds are independent and combinable, e.g. `gte` + `lte` for a closed
/// interval. Unset bounds are omitted; zero is a real bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RangeFilter {
    /// Less than or equal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<i64>,
    /// Less than.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<i64>,
    /// Greater than or equal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<i64>,
    /// Greater than.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<i64>,
    /// Equal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eq: Option<i64>,
}

impl RangeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lte(mut self, value: i64) -> Self {
        self.lte = Some(value);
        self
    }

    pub fn lt(mut self, value: i64) -> Self {
        self.lt = Some(value);
        self
    }

    pub fn gte(mut self, value: i64) -> Self {
        self.gte = Some(value);
        self
    }

    pub fn gt(mut self, value: i64) -> Self {
        self.gt = Some(value);
        self
    }

    pub fn eq(mut self, value: i64) -> Self {
        self.eq = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl FromStr for RangeFilter {
    type Err = Error;

    /// Parses `gte:1,lte:5` style bounds.
    fn from_str(s: &str) -> Result<Self> {
        let mut range = RangeFilter::new();
        for (bound, raw) in split_bounds(s)? {
            let value: i64 = raw
                .parse()
                .map_err(|_| Error::InvalidRange(s.to_string()))?;
            range = match bound {
                Bound::Lte => range.lte(value),
                Bound::Lt => range.lt(value),
                Bound::Gte => range.gte(value),
                Bound::Gt => range.gt(value),
                Bound::Eq => range.eq(value),
            };
        }
        Ok(range)
    }
}

/// Date range to match timestamps against.
///
/// Bounds hold ISO 8601 timestamps with microsecond resolution, see
/// [`crate::timestamp`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DateRangeFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eq: Option<String>,
}

impl DateRangeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lte(mut self, date: impl IntoTimestamp) -> Self {
        self.lte = Some(date.into_timestamp());
        self
    }

    pub fn lt(mut self, date: impl IntoTimestamp) -> Self {
        self.lt = Some(date.into_timestamp());
        self
    }

    pub fn gte(mut self, date: impl IntoTimestamp) -> Self {
        self.gte = Some(date.into_timestamp());
        self
    }

    pub fn gt(mut self, date: impl IntoTimestamp) -> Self {
        self.gt = Some(date.into_timestamp());
        self
    }

    pub fn eq(mut self, date: impl IntoTimestamp) -> Self {
        self.eq = Some(date.into_timestamp());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl FromStr for DateRangeFilter {
    type Err = Error;

    /// Parses `gte:2020-01-01,lt:2020-02-01T00:00:00Z` style bounds,
    /// normalizing every timestamp to microsecond form.
    fn from_str(s: &str) -> Result<Self> {
        let mut range = DateRangeFilter::new();
        for (bound, raw) in split_bounds(s)? {
            let date = normalize_timestamp(raw)?;
            range = match bound {
                Bound::Lte => range.lte(date),
                Bound::Lt => range.lt(date),
                Bound::Gte => range.gte(date),
                Bound::Gt => range.gt(date),
                Bound::Eq => range.eq(date),
            };
        }
        Ok(range)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Lte,
    Lt,
    Gte,
    Gt,
    Eq,
}

/// Splits `op:value` pairs on commas. Only the first `:` of each pair
/// separates, so timestamps keep their colons.
fn split_bounds(s: &str) -> Result<Vec<(Bound, &str)>> {
    let invalid = || Error::InvalidRange(s.to_string());
    if s.trim().is_empty() {
        return Err(invalid());
    }

    s.split(',')
        .map(|pair| {
            let (op, value) = pair.split_once(':').ok_or_else(invalid)?;
            let bound = match op.trim().to_lowercase().as_str() {
                "lte" => Bound::Lte,
                "lt" => Bound::Lt,
                "gte" => Bound::Gte,
                "gt" => Bound::Gt,
                "eq" => Bound::Eq,
                _ => return Err(invalid()),
            };
            Ok((bound, value.trim()))
        })
        .collect()
}

/// Survey answer to match in archives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SurveyFilter {
    /// Survey type, e.g. `pre_chat` or `post_chat`.
    #[serde(rename = "type")]
    pub survey_type: String,
    pub answer_id: String,
}

impl SurveyFilter {
    pub fn new(survey_type: impl Into<String>, answer_id: impl Into<String>) -> Self {
        SurveyFilter {
            survey_type: survey_type.into(),
            answer_id: answer_id.into(),
        }
    }
}

/// Chat property filters keyed by namespace, then property name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct PropertiesFilters(BTreeMap<String, BTreeMap<String, PropertyFilter>>);

impl PropertiesFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the filter for `namespace.name` (builder pattern).
    pub fn with(
        mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        filter: PropertyFilter,
    ) -> Self {
        self.insert(namespace, name, filter);
        self
    }

    /// Adds (or replaces) the filter for `namespace.name`.
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        filter: PropertyFilter,
    ) {
        self.0
            .entry(namespace.into())
            .or_default()
            .insert(name.into(), filter);
    }

    pub fn get(&self, namespace: &str, name: &str) -> Option<&PropertyFilter> {
        self.0.get(namespace)?.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
