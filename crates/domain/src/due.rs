use chrono::{prelude::*, Duration};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Hour of the day a bare due date is considered to expire at
pub const DATE_ONLY_DUE_HOUR: i64 = 9;

/// Years a parsed due value must fall in
pub const MIN_DUE_YEAR: i32 = 1;
pub const MAX_DUE_YEAR: i32 = 9999;

const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d/%H:%M:%S",
];

/// The due time of a `Transaction` as it was given by the client.
///
/// Clients may send a bare date, a date-time without any zone information
/// or a fully zoned timestamp. The raw value is kept as is and only turned
/// into an instant with `DueValue::normalize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueValue {
    Date(NaiveDate),
    Naive(NaiveDateTime),
    Zoned(DateTime<FixedOffset>),
}

#[derive(Error, Debug, PartialEq)]
#[error(
    "Due value: `{0}` is not a date, a date-time or an RFC 3339 timestamp between the years 1 and 9999"
)]
pub struct InvalidDueValue(pub String);

impl DueValue {
    /// A zoned due value `minutes` from `now`, expressed in the local offset
    pub fn minutes_from(now: DateTime<Utc>, offset: &FixedOffset, minutes: i64) -> Self {
        Self::Zoned(now.with_timezone(offset) + Duration::minutes(minutes))
    }

    /// Resolves the due value to an instant in the local offset.
    ///
    /// - a bare date expires at 09:00 local time that day
    /// - a naive date-time is assumed to already be local time
    /// - a zoned timestamp is converted to the local offset
    ///
    /// Returns `None` when the instant is outside of what chrono can represent.
    pub fn normalize(&self, offset: &FixedOffset) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Date(date) => date
                .and_time(NaiveTime::default())
                .checked_add_signed(Duration::hours(DATE_ONLY_DUE_HOUR))
                .and_then(|naive| assume_local(naive, offset)),
            Self::Naive(naive) => assume_local(*naive, offset),
            Self::Zoned(dt) => Some(dt.with_timezone(offset)),
        }
    }

    fn year(&self) -> i32 {
        match self {
            Self::Date(date) => date.year(),
            Self::Naive(naive) => naive.year(),
            Self::Zoned(dt) => dt.year(),
        }
    }
}

fn assume_local(naive: NaiveDateTime, offset: &FixedOffset) -> Option<DateTime<FixedOffset>> {
    naive
        .checked_sub_signed(Duration::seconds(offset.local_minus_utc() as i64))
        .map(|utc| offset.from_utc_datetime(&utc))
}

impl FromStr for DueValue {
    type Err = InvalidDueValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let due = parse_due(s).ok_or_else(|| InvalidDueValue(s.to_string()))?;
        if !(MIN_DUE_YEAR..=MAX_DUE_YEAR).contains(&due.year()) {
            return Err(InvalidDueValue(s.to_string()));
        }
        Ok(due)
    }
}

fn parse_due(s: &str) -> Option<DueValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(DueValue::Zoned(dt));
    }
    for format in NAIVE_FORMATS.iter() {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(DueValue::Naive(naive));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(DueValue::Date)
}

impl Display for DueValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Naive(naive) => write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S%.f")),
            Self::Zoned(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

impl Serialize for DueValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DueValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
