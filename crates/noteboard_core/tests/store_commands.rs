use noteboard_core::{AppState, Command, DayKey, Store, TaskPatch, Workspace};
use uuid::Uuid;

fn day(value: &str) -> DayKey {
    value.parse().unwrap()
}

#[test]
fn create_page_prepends_and_selects() {
    let mut store = Store::seeded();
    let welcome = store.state().pages()[0].id;

    store.dispatch(Command::CreatePage {
        title: "  ".to_string(),
    });

    let pages = store.state().pages();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].title, "Untitled");
    assert_eq!(pages[1].id, welcome);
    assert_eq!(store.selected_page().unwrap().id, pages[0].id);
}

#[test]
fn rename_and_update_content_refresh_timestamp() {
    let mut store = Store::seeded();
    let page = store.state().pages()[0].clone();

    store.dispatch_all([
        Command::RenamePage {
            id: page.id,
            title: String::new(),
        },
        Command::UpdatePageContent {
            id: page.id,
            content: "# hello".to_string(),
        },
    ]);

    let updated = store.state().find_page(page.id).unwrap();
    assert_eq!(updated.title, "Untitled");
    assert_eq!(updated.content, "# hello");
    assert!(updated.updated_at >= page.updated_at);
}

#[test]
fn rename_trims_title_and_falls_back_like_create() {
    let mut store = Store::seeded();
    let id = store.state().pages()[0].id;

    store.dispatch(Command::RenamePage {
        id,
        title: " \t ".to_string(),
    });
    assert_eq!(store.state().find_page(id).unwrap().title, "Untitled");

    store.dispatch(Command::RenamePage {
        id,
        title: "  Reading list ".to_string(),
    });
    assert_eq!(store.state().find_page(id).unwrap().title, "Reading list");
}

#[test]
fn delete_selected_page_reselects_first_remaining() {
    let mut store = Store::seeded();
    let welcome = store.state().pages()[0].id;
    store.dispatch(Command::CreatePage {
        title: "second".to_string(),
    });
    let second = store.state().pages()[0].id;

    store.dispatch(Command::DeletePage(second));
    assert_eq!(store.state().selected_page_id(), Some(welcome));

    store.dispatch(Command::DeletePage(welcome));
    assert!(store.state().pages().is_empty());
    assert_eq!(store.state().selected_page_id(), None);
}

#[test]
fn deleting_unselected_page_keeps_selection() {
    let mut store = Store::seeded();
    let welcome = store.state().pages()[0].id;
    store.dispatch(Command::CreatePage {
        title: "second".to_string(),
    });
    let second = store.state().pages()[0].id;

    store.dispatch(Command::DeletePage(welcome));
    assert_eq!(store.state().selected_page_id(), Some(second));
}

#[test]
fn select_unknown_workspace_is_ignored() {
    let mut store = Store::seeded();
    let before = store.state().clone();
    store.dispatch(Command::SelectWorkspace(Uuid::new_v4()));
    assert_eq!(store.state(), &before);
}

#[test]
fn board_follows_selected_workspace() {
    let personal = Workspace::new("Personal");
    let work = Workspace::new("Work");
    let state = AppState::from_parts(vec![personal.clone(), work.clone()], vec![], vec![], vec![]);
    let mut store = Store::new(state);

    store.dispatch(Command::SelectWorkspace(work.id));
    store.dispatch(Command::CreateColumn {
        title: "Backlog".to_string(),
    });
    assert_eq!(store.board().len(), 1);

    store.dispatch(Command::SelectWorkspace(personal.id));
    assert!(store.board().is_empty());
}

#[test]
fn task_commands_flow_through_board() {
    let mut store = Store::seeded();
    let columns: Vec<_> = store.state().columns().iter().map(|c| c.id).collect();

    store.dispatch(Command::CreateTask {
        column_id: columns[1],
        title: "review".to_string(),
        description: "PR".to_string(),
    });
    let task_id = store.state().tasks().last().unwrap().id;
    assert_eq!(store.board().column_of(task_id), Some(columns[1]));

    store.dispatch(Command::MoveTaskToColumn {
        task_id,
        column_id: columns[2],
    });
    assert_eq!(store.board().column_of(task_id), Some(columns[2]));

    store.dispatch(Command::UpdateTask {
        id: task_id,
        patch: TaskPatch::text("review done", ""),
    });
    assert_eq!(store.state().find_task(task_id).unwrap().title, "review done");

    store.dispatch(Command::DeleteTask(task_id));
    assert!(store.state().find_task(task_id).is_none());
    assert_eq!(store.board().column_of(task_id), None);
}

#[test]
fn unknown_task_commands_leave_state_unchanged() {
    let mut store = Store::seeded();
    let before = store.state().clone();
    let ghost = Uuid::new_v4();

    store.dispatch_all([
        Command::MoveTaskToColumn {
            task_id: ghost,
            column_id: before.columns()[2].id,
        },
        Command::UpdateTask {
            id: ghost,
            patch: TaskPatch::text("x", "y"),
        },
        Command::DeleteTask(ghost),
        Command::RenamePage {
            id: ghost,
            title: "x".to_string(),
        },
    ]);

    assert_eq!(store.state(), &before);
}

#[test]
fn scheduled_page_lands_on_calendar_and_is_selected() {
    let mut store = Store::seeded();
    store.dispatch(Command::CreatePageWithSchedule {
        title: "Retro".to_string(),
        content: "notes".to_string(),
        workspace_id: None,
        start: day("2024-03-30"),
        end: Some(day("2024-04-01")),
    });

    let page = store.selected_page().unwrap().clone();
    assert_eq!(page.title, "Retro");
    let index = store.day_index();
    assert_eq!(index.len(), 3);
    assert_eq!(index.items_on(day("2024-03-31"))[0].id(), page.id);
}

#[test]
fn scheduled_task_defaults_end_and_picks_workspace_column() {
    let mut store = Store::seeded();
    let first_column = store.state().columns()[0].id;
    store.dispatch(Command::CreateTaskWithSchedule {
        title: String::new(),
        description: "dentist".to_string(),
        workspace_id: None,
        start: day("2024-08-15"),
        end: None,
    });

    let task = store.state().tasks().last().unwrap();
    assert_eq!(task.title, "Untitled task");
    assert_eq!(task.column_id, first_column);
    assert_eq!(task.schedule.end, Some(day("2024-08-15")));
    assert_eq!(store.day_index().items_on(day("2024-08-15")).len(), 1);
}

#[test]
fn scheduled_task_without_columns_is_noop() {
    let state = AppState::from_parts(vec![Workspace::new("Empty")], vec![], vec![], vec![]);
    let mut store = Store::new(state.clone());
    store.dispatch(Command::CreateTaskWithSchedule {
        title: "nowhere".to_string(),
        description: String::new(),
        workspace_id: None,
        start: day("2024-08-15"),
        end: None,
    });
    assert_eq!(store.state(), &state);
}

#[test]
fn scheduled_task_for_foreign_workspace_falls_back_to_first_column() {
    let mut store = Store::seeded();
    let first_column = store.state().columns()[0].id;
    let foreign = Uuid::new_v4();
    store.dispatch(Command::CreateTaskWithSchedule {
        title: "visit".to_string(),
        description: String::new(),
        workspace_id: Some(foreign),
        start: day("2024-08-15"),
        end: None,
    });

    let task = store.state().tasks().last().unwrap();
    assert_eq!(task.workspace_id, foreign);
    assert_eq!(task.column_id, first_column);
}

#[test]
fn state_serializes_with_wire_field_names() {
    let state = AppState::seeded();
    let json = serde_json::to_value(&state).unwrap();
    assert!(json["selectedWorkspaceId"].is_string());
    assert_eq!(json["columns"][0]["order"], 1);
    assert!(json["tasks"][0]["columnId"].is_string());
    assert!(json["tasks"][0].get("scheduledStart").is_none());

    let decoded: AppState = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, state);
}
