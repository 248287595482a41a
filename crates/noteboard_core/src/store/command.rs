//! Named state mutations.
//!
//! Every variant carries plain data only. Commands are fire-and-forget:
//! unknown ids turn the command into a logged no-op.

use crate::model::board::{ColumnId, TaskId, TaskPatch};
use crate::model::page::PageId;
use crate::model::schedule::DayKey;
use crate::model::workspace::WorkspaceId;

/// One mutation of the application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ignored when the workspace does not exist.
    SelectWorkspace(WorkspaceId),
    SelectPage(Option<PageId>),
    /// Prepends a new empty page and selects it.
    CreatePage {
        title: String,
    },
    UpdatePageContent {
        id: PageId,
        content: String,
    },
    RenamePage {
        id: PageId,
        title: String,
    },
    /// Reselects the first remaining page when the deleted one was selected.
    DeletePage(PageId),
    CreateColumn {
        title: String,
    },
    CreateTask {
        column_id: ColumnId,
        title: String,
        description: String,
    },
    UpdateTask {
        id: TaskId,
        patch: TaskPatch,
    },
    MoveTaskToColumn {
        task_id: TaskId,
        column_id: ColumnId,
    },
    DeleteTask(TaskId),
    CreatePageWithSchedule {
        title: String,
        content: String,
        workspace_id: Option<WorkspaceId>,
        start: DayKey,
        end: Option<DayKey>,
    },
    /// Lands in the workspace's first column, else the first column overall.
    CreateTaskWithSchedule {
        title: String,
        description: String,
        workspace_id: Option<WorkspaceId>,
        start: DayKey,
        end: Option<DayKey>,
    },
}

impl Command {
    /// Stable name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectWorkspace(_) => "select_workspace",
            Self::SelectPage(_) => "select_page",
            Self::CreatePage { .. } => "create_page",
            Self::UpdatePageContent { .. } => "update_page_content",
            Self::RenamePage { .. } => "rename_page",
            Self::DeletePage(_) => "delete_page",
            Self::CreateColumn { .. } => "create_column",
            Self::CreateTask { .. } => "create_task",
            Self::UpdateTask { .. } => "update_task",
            Self::MoveTaskToColumn { .. } => "move_task_to_column",
            Self::DeleteTask(_) => "delete_task",
            Self::CreatePageWithSchedule { .. } => "create_page_with_schedule",
            Self::CreateTaskWithSchedule { .. } => "create_task_with_schedule",
        }
    }
}
