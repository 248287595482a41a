//! Tagged calendar view over pages and tasks.
//!
//! # Invariants
//! - Holds borrows into the state; never owns or mutates records.

use crate::model::board::Task;
use crate::model::page::Page;
use crate::model::schedule::Schedule;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Kind discriminant shared by scheduled items and calendar forms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    #[default]
    Page,
    Task,
}

/// A page or task as seen by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum ScheduledItem<'a> {
    Page(&'a Page),
    Task(&'a Task),
}

impl<'a> ScheduledItem<'a> {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Page(_) => ItemKind::Page,
            Self::Task(_) => ItemKind::Task,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Self::Page(page) => page.id,
            Self::Task(task) => task.id,
        }
    }

    pub fn title(&self) -> &'a str {
        match *self {
            Self::Page(page) => page.title.as_str(),
            Self::Task(task) => task.title.as_str(),
        }
    }

    pub fn schedule(&self) -> Schedule {
        match self {
            Self::Page(page) => page.schedule,
            Self::Task(task) => task.schedule,
        }
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        match self {
            Self::Page(page) => page.updated_at,
            Self::Task(task) => task.updated_at,
        }
    }
}

/// All pages followed by all tasks, each in source order.
///
/// Unscheduled records are included; the day index drops them.
pub fn scheduled_items<'a>(
    pages: &'a [Page],
    tasks: &'a [Task],
) -> impl Iterator<Item = ScheduledItem<'a>> + 'a {
    pages
        .iter()
        .map(ScheduledItem::Page)
        .chain(tasks.iter().map(ScheduledItem::Task))
}
