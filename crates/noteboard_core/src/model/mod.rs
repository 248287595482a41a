//! Shared data model for pages, kanban tasks and calendar scheduling.
//!
//! # Responsibility
//! - Define the plain records held by the application state.
//! - Provide the tagged `ScheduledItem` view over pages and tasks.
//!
//! # Invariants
//! - Every record is identified by a stable v4 UUID.
//! - A task belongs to exactly one column at a time.

pub mod board;
pub mod item;
pub mod page;
pub mod schedule;
pub mod workspace;

/// Title used when a page is created with a blank title.
pub const DEFAULT_PAGE_TITLE: &str = "Untitled";
/// Title used when a task is created with a blank title.
pub const DEFAULT_TASK_TITLE: &str = "Untitled task";

/// Trims `value`, falling back to `default` when nothing remains.
pub(crate) fn title_or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
