//! Kanban column and task records.
//!
//! # Responsibility
//! - Define ordered columns and the tasks assigned to them.
//! - Define the partial-update shape used by task edits.
//!
//! # Invariants
//! - `Task::column_id` names exactly one column; reassignment overwrites it.
//! - A `column_id` with no matching column leaves the task orphaned, not
//!   deleted.
//! - Columns display ascending by `order`; equal orders keep source order.

use crate::model::schedule::Schedule;
use crate::model::workspace::WorkspaceId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ColumnId = Uuid;
pub type TaskId = Uuid;

/// Ordered bucket grouping tasks on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub workspace_id: WorkspaceId,
    /// Left-to-right display position, ascending.
    pub order: i64,
}

impl Column {
    pub fn new(workspace_id: WorkspaceId, title: impl Into<String>, order: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            workspace_id,
            order,
        }
    }
}

/// Kanban task, optionally scheduled on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub column_id: ColumnId,
    pub workspace_id: WorkspaceId,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub schedule: Schedule,
}

impl Task {
    /// Creates an unscheduled task with a generated ID.
    ///
    /// `column_id` is accepted as-is; it is not checked against any board.
    pub fn new(
        column_id: ColumnId,
        workspace_id: WorkspaceId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            column_id,
            workspace_id,
            updated_at: Utc::now(),
            schedule: Schedule::unscheduled(),
        }
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Refreshes `updated_at` to the current time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Partial task update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<ColumnId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
}

impl TaskPatch {
    /// Patch replacing title and description, as submitted by the edit form.
    pub fn text(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.column_id.is_none()
            && self.schedule.is_none()
    }

    /// Merges present fields into `task`. Does not touch `updated_at`.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(column_id) = self.column_id {
            task.column_id = column_id;
        }
        if let Some(schedule) = self.schedule {
            task.schedule = schedule;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskPatch};
    use crate::model::schedule::{DayKey, Schedule};
    use uuid::Uuid;

    #[test]
    fn patch_merges_only_present_fields() {
        let column = Uuid::new_v4();
        let mut task = Task::new(column, Uuid::new_v4(), "draft", "keep me");

        let patch = TaskPatch {
            title: Some("final".to_string()),
            ..TaskPatch::default()
        };
        patch.apply_to(&mut task);

        assert_eq!(task.title, "final");
        assert_eq!(task.description, "keep me");
        assert_eq!(task.column_id, column);
    }

    #[test]
    fn patch_can_reschedule() {
        let mut task = Task::new(Uuid::new_v4(), Uuid::new_v4(), "t", "");
        let day = DayKey::from_ymd(2024, 1, 15).unwrap();
        TaskPatch {
            schedule: Some(Schedule::on(day)),
            ..TaskPatch::default()
        }
        .apply_to(&mut task);
        assert_eq!(task.schedule.start, Some(day));
    }

    #[test]
    fn empty_patch_reports_empty() {
        assert!(TaskPatch::default().is_empty());
        assert!(!TaskPatch::text("a", "b").is_empty());
    }
}
