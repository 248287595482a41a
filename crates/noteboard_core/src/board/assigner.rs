//! Task assignment and per-column grouping.

use crate::model::board::{Column, ColumnId, Task, TaskId, TaskPatch};
use crate::model::workspace::WorkspaceId;
use log::debug;
use serde::Serialize;

/// Tasks of one column, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnGroup<'a> {
    pub column: &'a Column,
    pub tasks: Vec<&'a Task>,
}

/// Columns in display order, each with the tasks currently assigned to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BoardGrouping<'a> {
    groups: Vec<ColumnGroup<'a>>,
}

impl<'a> BoardGrouping<'a> {
    pub fn groups(&self) -> &[ColumnGroup<'a>] {
        &self.groups
    }

    /// Tasks in `column_id`, empty when the column is not on the board.
    pub fn tasks_in(&self, column_id: ColumnId) -> &[&'a Task] {
        self.groups
            .iter()
            .find(|group| group.column.id == column_id)
            .map(|group| group.tasks.as_slice())
            .unwrap_or(&[])
    }

    /// Column currently showing `task_id`, if any.
    pub fn column_of(&self, task_id: TaskId) -> Option<ColumnId> {
        self.groups
            .iter()
            .find(|group| group.tasks.iter().any(|task| task.id == task_id))
            .map(|group| group.column.id)
    }

    pub fn column_ids(&self) -> Vec<ColumnId> {
        self.groups.iter().map(|group| group.column.id).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Creates a task in `column_id` and appends it to `tasks`.
///
/// The column is not validated; an unknown column yields an orphaned task.
pub fn create_task(
    tasks: &mut Vec<Task>,
    column_id: ColumnId,
    workspace_id: WorkspaceId,
    title: impl Into<String>,
    description: impl Into<String>,
) -> Task {
    let task = Task::new(column_id, workspace_id, title, description);
    debug!(
        "event=task_create module=board status=ok task_id={} column_id={}",
        task.id, column_id
    );
    tasks.push(task.clone());
    task
}

/// Reassigns `task_id` to `column_id`.
///
/// Returns `false` (and changes nothing) when the task does not exist.
pub fn move_task_to_column(tasks: &mut [Task], task_id: TaskId, column_id: ColumnId) -> bool {
    let Some(task) = tasks.iter_mut().find(|task| task.id == task_id) else {
        debug!("event=task_move module=board status=skipped reason=task_not_found task_id={task_id}");
        return false;
    };
    let from = task.column_id;
    task.column_id = column_id;
    debug!(
        "event=task_move module=board status=ok task_id={} from={} to={}",
        task_id, from, column_id
    );
    true
}

/// Merges `patch` into `task_id` and refreshes `updated_at`.
///
/// Returns `false` when the task does not exist.
pub fn update_task(tasks: &mut [Task], task_id: TaskId, patch: &TaskPatch) -> bool {
    let Some(task) = tasks.iter_mut().find(|task| task.id == task_id) else {
        debug!("event=task_update module=board status=skipped reason=task_not_found task_id={task_id}");
        return false;
    };
    patch.apply_to(task);
    task.touch();
    true
}

/// Removes `task_id`. Returns `false` when the task does not exist.
pub fn delete_task(tasks: &mut Vec<Task>, task_id: TaskId) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != task_id);
    let removed = tasks.len() != before;
    let status = if removed { "ok" } else { "skipped" };
    debug!("event=task_delete module=board status={status} task_id={task_id}");
    removed
}

/// Columns sorted ascending by `order`; equal orders keep source order.
pub fn sorted_columns(columns: &[Column]) -> Vec<&Column> {
    let mut sorted: Vec<&Column> = columns.iter().collect();
    sorted.sort_by_key(|column| column.order);
    sorted
}

/// Columns owned by `workspace_id`, in display order.
pub fn visible_columns(columns: &[Column], workspace_id: WorkspaceId) -> Vec<&Column> {
    let mut visible: Vec<&Column> = columns
        .iter()
        .filter(|column| column.workspace_id == workspace_id)
        .collect();
    visible.sort_by_key(|column| column.order);
    visible
}

/// Groups `tasks` under every column in display order.
pub fn group_by_column<'a>(tasks: &'a [Task], columns: &'a [Column]) -> BoardGrouping<'a> {
    group_sorted(tasks, sorted_columns(columns))
}

/// Groups `tasks` under the columns of one workspace.
pub fn group_workspace_board<'a>(
    tasks: &'a [Task],
    columns: &'a [Column],
    workspace_id: WorkspaceId,
) -> BoardGrouping<'a> {
    group_sorted(tasks, visible_columns(columns, workspace_id))
}

fn group_sorted<'a>(tasks: &'a [Task], columns: Vec<&'a Column>) -> BoardGrouping<'a> {
    let groups = columns
        .into_iter()
        .map(|column| ColumnGroup {
            column,
            tasks: tasks
                .iter()
                .filter(|task| task.column_id == column.id)
                .collect(),
        })
        .collect();
    BoardGrouping { groups }
}

#[cfg(test)]
mod tests {
    use super::{delete_task, sorted_columns, update_task};
    use crate::model::board::{Column, Task, TaskPatch};
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    #[test]
    fn equal_orders_keep_source_order() {
        let ws = Uuid::new_v4();
        let columns = vec![
            Column::new(ws, "b", 2),
            Column::new(ws, "a1", 1),
            Column::new(ws, "a2", 1),
        ];
        let titles: Vec<&str> = sorted_columns(&columns)
            .iter()
            .map(|column| column.title.as_str())
            .collect();
        assert_eq!(titles, vec!["a1", "a2", "b"]);
    }

    #[test]
    fn update_refreshes_timestamp() {
        let mut task = Task::new(Uuid::new_v4(), Uuid::new_v4(), "t", "");
        task.updated_at = DateTime::<Utc>::UNIX_EPOCH;
        let id = task.id;
        let mut tasks = vec![task];

        assert!(update_task(&mut tasks, id, &TaskPatch::text("new", "desc")));
        assert_eq!(tasks[0].title, "new");
        assert!(tasks[0].updated_at > DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn unknown_ids_are_noops() {
        let mut tasks = vec![Task::new(Uuid::new_v4(), Uuid::new_v4(), "t", "")];
        let snapshot = tasks.clone();
        assert!(!update_task(&mut tasks, Uuid::new_v4(), &TaskPatch::text("x", "y")));
        assert!(!delete_task(&mut tasks, Uuid::new_v4()));
        assert_eq!(tasks, snapshot);
    }
}
