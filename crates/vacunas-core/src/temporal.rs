//! # Calendar Dates
//!
//! Every date exchanged with the backend (birth dates, application dates,
//! next-dose dates) is a calendar date. The backend sometimes appends a time
//! of day to an otherwise date-only field, so decoding normalizes to the
//! calendar date immediately and the rest of the system only ever compares
//! whole days.
//!
//! ## Accepted input
//!
//! | Form | Example | Calendar date taken |
//! |------|---------|---------------------|
//! | date only | `2024-06-15` | as written |
//! | local date-time | `2024-06-15T23:00:00`, `2024-06-15 08:30` | date part as written |
//! | RFC 3339 with offset | `2024-06-15T23:00:00Z` | date in the local time zone |
//!
//! Serialization always writes `YYYY-MM-DD`.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DateParseError;

/// Wire format for serialized dates.
const ISO_DATE: &str = "%Y-%m-%d";

/// Date-time layouts without an offset. The date part is kept verbatim.
const LOCAL_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A day on the calendar, with no time-of-day or zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from year, month and day. `None` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The current calendar date in the local time zone.
    ///
    /// Reads the clock on every call.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parse any of the accepted layouts (see module docs).
    pub fn parse(input: &str) -> Result<Self, DateParseError> {
        let s = input.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, ISO_DATE) {
            return Ok(Self(date));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.with_timezone(&Local).date_naive()));
        }

        LOCAL_DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|dt| Self(dt.date()))
            .ok_or_else(|| DateParseError {
                input: input.to_string(),
            })
    }

    /// Access the underlying `chrono::NaiveDate`.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    /// Year, month (1-12) and day of month.
    pub fn ymd(&self) -> (i32, u32, u32) {
        (self.0.year(), self.0.month(), self.0.day())
    }

    /// Short Spanish-locale rendering, `d/m/yyyy` without zero padding.
    pub fn to_display_string(&self) -> String {
        let (y, m, d) = self.ymd();
        format!("{d}/{m}/{y}")
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE))
    }
}

impl std::str::FromStr for CalendarDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
