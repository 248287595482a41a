//! In-process drag-and-drop session for board reassignment.
//!
//! A drag carries exactly one task id. Dropping on a column yields a
//! `MoveTaskToColumn` command; there is no rollback or conflict detection.

use crate::model::board::{ColumnId, TaskId};
use crate::store::command::Command;

/// Pending drag: the dragged task and the column currently hovered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingDrag {
    task_id: Option<TaskId>,
    hover_column_id: Option<ColumnId>,
}

impl PendingDrag {
    /// Starts dragging `task_id`, replacing any previous drag.
    pub fn start(&mut self, task_id: TaskId) {
        self.task_id = Some(task_id);
        self.hover_column_id = None;
    }

    /// Records the candidate drop target. Ignored when nothing is dragged.
    pub fn hover(&mut self, column_id: ColumnId) {
        if self.task_id.is_some() {
            self.hover_column_id = Some(column_id);
        }
    }

    pub fn dragged_task(&self) -> Option<TaskId> {
        self.task_id
    }

    pub fn hovered_column(&self) -> Option<ColumnId> {
        self.hover_column_id
    }

    pub fn is_dragging(&self, task_id: TaskId) -> bool {
        self.task_id == Some(task_id)
    }

    /// Drops on `column_id` and clears the session.
    ///
    /// Returns the move command, or `None` when no drag was in progress.
    pub fn drop_on(&mut self, column_id: ColumnId) -> Option<Command> {
        let task_id = self.task_id.take();
        self.hover_column_id = None;
        task_id.map(|task_id| Command::MoveTaskToColumn { task_id, column_id })
    }

    /// Abandons the drag without producing a command.
    pub fn end(&mut self) {
        *self = Self::default();
    }
}
