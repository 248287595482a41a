//! Calendar projections over scheduled pages and tasks.
//!
//! # Responsibility
//! - Bucket scheduled items onto the calendar days they occupy.
//! - Lay out the fixed 7-column month grid and month navigation.
//! - Hold the unsaved "new scheduled item" form.
//!
//! # Invariants
//! - Every projection here is derived and recomputed on read.
//! - Day stepping uses calendar-date arithmetic only.

pub mod day_index;
pub mod draft;
pub mod month_grid;
