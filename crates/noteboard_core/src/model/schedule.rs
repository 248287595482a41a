//! Calendar day keys and inclusive schedule ranges.
//!
//! # Responsibility
//! - Represent the optional start/end day range carried by pages and tasks.
//! - Parse and format day keys as `YYYY-MM-DD`.
//!
//! # Invariants
//! - A schedule without `start` is unscheduled; `end` is ignored.
//! - `end` falls back to `start` when absent.
//! - Day stepping is calendar arithmetic, never elapsed-time arithmetic.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Calendar date used as a map key, rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a key from calendar parts, `None` when the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today's date in the local time zone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Next calendar day, `None` past chrono's supported range.
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl Display for DayKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

/// Error for day key text that is not a valid `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayKeyError {
    Invalid(String),
}

impl Display for DayKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(value) => {
                write!(f, "invalid day key `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for DayKeyError {}

impl FromStr for DayKey {
    type Err = DayKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        NaiveDate::parse_from_str(trimmed, DAY_KEY_FORMAT)
            .map(Self)
            .map_err(|_| DayKeyError::Invalid(trimmed.to_string()))
    }
}

/// Optional inclusive day range attached to a page or task.
///
/// Serialized flattened into the owning record as `scheduledStart` and
/// `scheduledEnd`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(
        rename = "scheduledStart",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<DayKey>,
    #[serde(
        rename = "scheduledEnd",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<DayKey>,
}

impl Schedule {
    pub fn unscheduled() -> Self {
        Self::default()
    }

    /// Single-day schedule.
    pub fn on(day: DayKey) -> Self {
        Self {
            start: Some(day),
            end: None,
        }
    }

    /// Inclusive range. A reversed range is kept as given and covers no day.
    pub fn range(start: DayKey, end: DayKey) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.start.is_some()
    }

    /// Effective `(start, end)` pair with the end fallback applied.
    pub fn bounds(&self) -> Option<(DayKey, DayKey)> {
        let start = self.start?;
        Some((start, self.end.unwrap_or(start)))
    }

    /// Every day covered by this schedule, in ascending order.
    ///
    /// Empty when unscheduled or when `end < start`.
    pub fn days(&self) -> impl Iterator<Item = DayKey> {
        self.bounds().into_iter().flat_map(|(start, end)| {
            start
                .0
                .iter_days()
                .take_while(move |date| *date <= end.0)
                .map(DayKey)
        })
    }

    pub fn covers(&self, day: DayKey) -> bool {
        match self.bounds() {
            Some((start, end)) => start <= day && day <= end,
            None => false,
        }
    }
}
