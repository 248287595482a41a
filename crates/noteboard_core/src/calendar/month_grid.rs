//! Month grid layout and month navigation.
//!
//! # Invariants
//! - Grids start on Sunday and hold a multiple of 7 entries (28..=42).
//! - Exactly one entry per day of the target month is `is_current_month`.

use crate::model::schedule::DayKey;
use chrono::{Datelike, Days, Local, Month, NaiveDate};
use serde::Serialize;

const DAYS_PER_WEEK: u32 = 7;

/// Weekday column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub key: DayKey,
    /// `false` for the padding days borrowed from adjacent months.
    pub is_current_month: bool,
}

/// Builds the 7-column grid covering `month` of `year`.
///
/// Leading cells are the trailing days of the previous month (one per
/// weekday before day 1, Sunday = 0); trailing cells are the first days of
/// the next month up to the next multiple of 7. Returns an empty grid only
/// for years outside chrono's supported date range.
pub fn days_in_month_grid(year: i32, month: Month) -> Vec<CalendarDay> {
    let month_number = month.number_from_month();
    let Some(first) = NaiveDate::from_ymd_opt(year, month_number, 1) else {
        return Vec::new();
    };
    let Some(month_len) = days_in_month(year, month) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_sunday();
    let Some(grid_start) = first.checked_sub_days(Days::new(u64::from(leading))) else {
        return Vec::new();
    };
    let cells = (leading + month_len).div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;

    grid_start
        .iter_days()
        .take(cells as usize)
        .map(|date| CalendarDay {
            date,
            key: DayKey::new(date),
            is_current_month: date.year() == year && date.month() == month_number,
        })
        .collect()
}

/// Number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: Month) -> Option<u32> {
    let (next_year, next_month) = match month {
        Month::December => (year.checked_add(1)?, 1),
        other => (year, other.number_from_month() + 1),
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    Some(last.day())
}

/// Displayed month, moved one step at a time by the calendar navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: Month,
}

impl MonthCursor {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// Cursor on the month containing `day`.
    pub fn containing(day: DayKey) -> Self {
        let date = day.date();
        Self {
            year: date.year(),
            month: month_from_number(date.month()),
        }
    }

    /// Cursor on the current local month.
    pub fn current() -> Self {
        Self::containing(DayKey::new(Local::now().date_naive()))
    }

    /// Previous month; January steps back to December of the previous year.
    /// Stays put at the lower edge of the `i32` year range.
    pub fn prev(self) -> Self {
        match self.month {
            Month::January => self
                .year
                .checked_sub(1)
                .map_or(self, |year| Self::new(year, Month::December)),
            month => Self::new(self.year, month.pred()),
        }
    }

    /// Next month; December steps forward to January of the next year.
    /// Stays put at the upper edge of the `i32` year range.
    pub fn next(self) -> Self {
        match self.month {
            Month::December => self
                .year
                .checked_add(1)
                .map_or(self, |year| Self::new(year, Month::January)),
            month => Self::new(self.year, month.succ()),
        }
    }

    pub fn grid(self) -> Vec<CalendarDay> {
        days_in_month_grid(self.year, self.month)
    }

    /// Human label such as `March 2024`.
    pub fn label(self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }
}

fn month_from_number(number: u32) -> Month {
    // chrono months are 1-based; `Month::try_from` takes a u8.
    u8::try_from(number)
        .ok()
        .and_then(|value| Month::try_from(value).ok())
        .unwrap_or(Month::January)
}
