//! Day index: calendar day -> items occurring on that day.
//!
//! # Invariants
//! - Unscheduled items produce no entry, not even an empty one.
//! - A reversed range (`end < start`) produces no entry.
//! - Per-day order is every page, then every task, each in input order.

use crate::model::item::{ItemKind, ScheduledItem};
use crate::model::schedule::DayKey;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// Mapping from day key to the items scheduled on that day.
///
/// Borrows the source records; rebuild it whenever they change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DayIndex<'a> {
    days: BTreeMap<DayKey, Vec<ScheduledItem<'a>>>,
}

impl<'a> DayIndex<'a> {
    /// Items on `day`, empty when nothing is scheduled there.
    pub fn items_on(&self, day: DayKey) -> &[ScheduledItem<'a>] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_day(&self, day: DayKey) -> bool {
        self.days.contains_key(&day)
    }

    /// Number of distinct days with at least one item.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Day keys in ascending order.
    pub fn days(&self) -> impl Iterator<Item = DayKey> + '_ {
        self.days.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DayKey, &[ScheduledItem<'a>])> + '_ {
        self.days.iter().map(|(day, items)| (*day, items.as_slice()))
    }
}

/// Builds the day index for `items`.
///
/// Each scheduled item is appended once to every day from its start to its
/// effective end, inclusive. Pages are indexed before tasks whatever the
/// input interleaving.
pub fn build_day_index<'a, I>(items: I) -> DayIndex<'a>
where
    I: IntoIterator<Item = ScheduledItem<'a>>,
{
    let mut days: BTreeMap<DayKey, Vec<ScheduledItem<'a>>> = BTreeMap::new();
    let mut indexed = 0_usize;
    let mut span_days = 0_usize;

    let (pages, tasks): (Vec<_>, Vec<_>) = items
        .into_iter()
        .partition(|item| item.kind() == ItemKind::Page);

    for item in pages.into_iter().chain(tasks) {
        let mut covered = false;
        for day in item.schedule().days() {
            days.entry(day).or_default().push(item);
            covered = true;
            span_days += 1;
        }
        if covered {
            indexed += 1;
        }
    }

    debug!(
        "event=day_index_build module=calendar status=ok items={} span_days={} days={}",
        indexed,
        span_days,
        days.len()
    );
    DayIndex { days }
}
