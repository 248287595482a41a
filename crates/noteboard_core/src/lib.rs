//! Core domain logic for the noteboard workspace.
//! This crate owns the state model, the calendar day index and the kanban
//! board assignment rules shared by every front-end module.

pub mod board;
pub mod browser;
pub mod calendar;
pub mod logging;
pub mod model;
pub mod store;

pub use board::assigner::{
    create_task, delete_task, group_by_column, group_workspace_board, move_task_to_column,
    sorted_columns, update_task, visible_columns, BoardGrouping, ColumnGroup,
};
pub use board::drag::PendingDrag;
pub use board::editor::{TaskEditor, TaskForm};
pub use browser::preview::{derive_page_preview, PagePreview, EMPTY_PAGE_EXCERPT};
pub use browser::search::{filter_pages, list_page_summaries, PageSummary};
pub use calendar::day_index::{build_day_index, DayIndex};
pub use calendar::draft::{RangeMode, ScheduleDraft};
pub use calendar::month_grid::{
    days_in_month, days_in_month_grid, CalendarDay, MonthCursor, WEEKDAY_LABELS,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{Column, ColumnId, Task, TaskId, TaskPatch};
pub use model::item::{scheduled_items, ItemKind, ScheduledItem};
pub use model::page::{Page, PageId};
pub use model::schedule::{DayKey, DayKeyError, Schedule};
pub use model::workspace::{Workspace, WorkspaceId};
pub use model::{DEFAULT_PAGE_TITLE, DEFAULT_TASK_TITLE};
pub use store::command::Command;
pub use store::state::AppState;
pub use store::Store;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
