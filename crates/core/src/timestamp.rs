// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp formatting for date filters.
//!
//! The API expects ISO 8601 timestamps with microsecond resolution and an
//! explicit offset, e.g. `2017-10-12T15:19:21.010200+01:00` or
//! `2017-10-12T14:19:21.010200Z` in UTC.

use std::fmt::Display;

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, TimeZone};

use crate::error::{Error, Result};

/// Formats a datetime the way date filters expect it.
///
/// UTC (and any zero offset) is written with a `Z` suffix.
pub fn timestamp<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Values accepted as a date bound.
///
/// Strings are passed through untouched; datetimes are formatted with
/// [`timestamp`].
pub trait IntoTimestamp {
    fn into_timestamp(self) -> String;
}

impl IntoTimestamp for String {
    fn into_timestamp(self) -> String {
        self
    }
}

impl IntoTimestamp for &str {
    fn into_timestamp(self) -> String {
        self.to_string()
    }
}

impl<Tz> IntoTimestamp for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn into_timestamp(self) -> String {
        timestamp(&self)
    }
}

/// Parses user input into a timestamp.
///
/// Accepts RFC 3339 timestamps with any sub-second precision, or a bare
/// `YYYY-MM-DD` date which is taken as midnight UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
        .ok_or_else(|| Error::InvalidTimestamp(s.to_string()))
}

/// Parses user input and re-emits it in canonical microsecond form.
pub fn normalize_timestamp(s: &str) -> Result<String> {
    parse_timestamp(s).map(|dt| timestamp(&dt))
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
