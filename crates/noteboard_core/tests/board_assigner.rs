use noteboard_core::{
    create_task, delete_task, group_by_column, group_workspace_board, move_task_to_column,
    Column, Task,
};
use uuid::Uuid;

fn titles(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|task| task.title.clone()).collect()
}

#[test]
fn group_by_column_keeps_column_and_source_order() {
    let ws = Uuid::new_v4();
    let columns = vec![Column::new(ws, "B", 2), Column::new(ws, "A", 1)];
    let (col_b, col_a) = (columns[0].id, columns[1].id);
    let mut tasks = Vec::new();
    create_task(&mut tasks, col_a, ws, "task1", "");
    create_task(&mut tasks, col_b, ws, "task2", "");
    create_task(&mut tasks, col_a, ws, "task3", "");

    let board = group_by_column(&tasks, &columns);

    assert_eq!(board.column_ids(), vec![col_a, col_b]);
    assert_eq!(titles(board.tasks_in(col_a)), vec!["task1", "task3"]);
    assert_eq!(titles(board.tasks_in(col_b)), vec!["task2"]);
}

#[test]
fn move_places_task_in_exactly_one_group() {
    let ws = Uuid::new_v4();
    let columns = vec![
        Column::new(ws, "To Do", 1),
        Column::new(ws, "Doing", 2),
        Column::new(ws, "Done", 3),
    ];
    let mut tasks = Vec::new();
    let task = create_task(&mut tasks, columns[0].id, ws, "ship", "");

    assert!(move_task_to_column(&mut tasks, task.id, columns[2].id));

    let board = group_by_column(&tasks, &columns);
    assert_eq!(board.column_of(task.id), Some(columns[2].id));
    let appearances = board
        .groups()
        .iter()
        .filter(|group| group.tasks.iter().any(|t| t.id == task.id))
        .count();
    assert_eq!(appearances, 1);
}

#[test]
fn move_unknown_task_leaves_grouping_unchanged() {
    let ws = Uuid::new_v4();
    let columns = vec![Column::new(ws, "To Do", 1), Column::new(ws, "Done", 2)];
    let mut tasks = Vec::new();
    create_task(&mut tasks, columns[0].id, ws, "a", "");
    let before = tasks.clone();

    assert!(!move_task_to_column(&mut tasks, Uuid::new_v4(), columns[1].id));
    assert_eq!(tasks, before);
    assert_eq!(
        group_by_column(&tasks, &columns),
        group_by_column(&before, &columns)
    );
}

#[test]
fn move_does_not_refresh_updated_at() {
    let ws = Uuid::new_v4();
    let mut tasks = Vec::new();
    let task = create_task(&mut tasks, Uuid::new_v4(), ws, "a", "");
    move_task_to_column(&mut tasks, task.id, Uuid::new_v4());
    assert_eq!(tasks[0].updated_at, task.updated_at);
}

#[test]
fn orphaned_tasks_are_kept_but_not_grouped() {
    let ws = Uuid::new_v4();
    let columns = vec![Column::new(ws, "To Do", 1)];
    let mut tasks = Vec::new();
    let orphan = create_task(&mut tasks, Uuid::new_v4(), ws, "lost", "");
    let kept = create_task(&mut tasks, columns[0].id, ws, "kept", "");

    let board = group_by_column(&tasks, &columns);
    assert_eq!(tasks.len(), 2);
    assert_eq!(board.column_of(orphan.id), None);
    assert_eq!(board.column_of(kept.id), Some(columns[0].id));

    // Moving onto a missing column orphans the task too.
    move_task_to_column(&mut tasks, kept.id, Uuid::new_v4());
    assert!(group_by_column(&tasks, &columns).tasks_in(columns[0].id).is_empty());
}

#[test]
fn delete_removes_task_from_groups() {
    let ws = Uuid::new_v4();
    let columns = vec![Column::new(ws, "To Do", 1)];
    let mut tasks = Vec::new();
    let task = create_task(&mut tasks, columns[0].id, ws, "gone", "");

    assert!(delete_task(&mut tasks, task.id));
    assert!(!delete_task(&mut tasks, task.id));
    assert!(group_by_column(&tasks, &columns).tasks_in(columns[0].id).is_empty());
}

#[test]
fn workspace_board_only_shows_own_columns() {
    let (home, work) = (Uuid::new_v4(), Uuid::new_v4());
    let columns = vec![
        Column::new(work, "Backlog", 1),
        Column::new(home, "Chores", 2),
        Column::new(home, "Errands", 1),
    ];
    let mut tasks = Vec::new();
    create_task(&mut tasks, columns[0].id, work, "report", "");
    create_task(&mut tasks, columns[1].id, home, "laundry", "");

    let board = group_workspace_board(&tasks, &columns, home);
    assert_eq!(board.column_ids(), vec![columns[2].id, columns[1].id]);
    assert_eq!(titles(board.tasks_in(columns[1].id)), vec!["laundry"]);
    assert!(board.tasks_in(columns[0].id).is_empty());
}
