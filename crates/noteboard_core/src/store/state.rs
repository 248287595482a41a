//! Application state snapshot and command application.
//!
//! # Responsibility
//! - Own the workspace, page, column and task collections.
//! - Apply one `Command` as a single replace step producing the next
//!   snapshot.
//! - Expose derived read views (day index, board grouping).
//!
//! # Invariants
//! - Collections change only through `AppState::apply`.
//! - Commands on unknown ids leave the snapshot unchanged.
//! - `selected_workspace_id`, when set, names an existing workspace.

use crate::board::assigner::{self, BoardGrouping};
use crate::calendar::day_index::{build_day_index, DayIndex};
use crate::model::board::{Column, ColumnId, Task, TaskId, TaskPatch};
use crate::model::item::scheduled_items;
use crate::model::page::{Page, PageId};
use crate::model::schedule::{DayKey, Schedule};
use crate::model::workspace::{Workspace, WorkspaceId};
use crate::model::{title_or_default, DEFAULT_PAGE_TITLE, DEFAULT_TASK_TITLE};
use crate::store::command::Command;
use log::debug;
use serde::{Deserialize, Serialize};

const SEED_WORKSPACE_NAME: &str = "Personal Workspace";
const SEED_PAGE_TITLE: &str = "Welcome to your workspace";
const SEED_PAGE_CONTENT: &str = "This is your first page. Edit it from the notes editor.\n\n\
You can create more pages from the workspace browser.";
const SEED_COLUMNS: [&str; 3] = ["To Do", "Doing", "Done"];
const SEED_TASK_TITLE: &str = "Create your first kanban board";
const SEED_TASK_DESCRIPTION: &str = "Move tasks between columns as work progresses.";

/// Full in-memory state shared by every module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    workspaces: Vec<Workspace>,
    pages: Vec<Page>,
    columns: Vec<Column>,
    tasks: Vec<Task>,
    selected_workspace_id: Option<WorkspaceId>,
    selected_page_id: Option<PageId>,
}

impl AppState {
    /// Builds a state from existing collections.
    ///
    /// The first workspace is selected; no page is selected.
    pub fn from_parts(
        workspaces: Vec<Workspace>,
        pages: Vec<Page>,
        columns: Vec<Column>,
        tasks: Vec<Task>,
    ) -> Self {
        let selected_workspace_id = workspaces.first().map(|workspace| workspace.id);
        Self {
            workspaces,
            pages,
            columns,
            tasks,
            selected_workspace_id,
            selected_page_id: None,
        }
    }

    /// Demo state: one workspace, a welcome page, three columns, one task.
    pub fn seeded() -> Self {
        let workspace = Workspace::new(SEED_WORKSPACE_NAME);
        let page = Page::new(workspace.id, SEED_PAGE_TITLE).with_content(SEED_PAGE_CONTENT);
        let columns: Vec<Column> = SEED_COLUMNS
            .iter()
            .zip(1_i64..)
            .map(|(title, order)| Column::new(workspace.id, *title, order))
            .collect();
        let tasks = columns
            .first()
            .map(|todo| {
                vec![Task::new(
                    todo.id,
                    workspace.id,
                    SEED_TASK_TITLE,
                    SEED_TASK_DESCRIPTION,
                )]
            })
            .unwrap_or_default();

        let selected_page_id = Some(page.id);
        let mut state = Self::from_parts(vec![workspace], vec![page], columns, tasks);
        state.selected_page_id = selected_page_id;
        state
    }

    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn selected_workspace_id(&self) -> Option<WorkspaceId> {
        self.selected_workspace_id
    }

    pub fn selected_page_id(&self) -> Option<PageId> {
        self.selected_page_id
    }

    pub fn selected_page(&self) -> Option<&Page> {
        let id = self.selected_page_id?;
        self.find_page(id)
    }

    pub fn find_page(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == id)
    }

    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Day index over every scheduled page and task.
    pub fn day_index(&self) -> DayIndex<'_> {
        build_day_index(scheduled_items(&self.pages, &self.tasks))
    }

    /// Board grouping for the selected workspace; empty when none is selected.
    pub fn board(&self) -> BoardGrouping<'_> {
        match self.selected_workspace_id {
            Some(workspace_id) => {
                assigner::group_workspace_board(&self.tasks, &self.columns, workspace_id)
            }
            None => BoardGrouping::default(),
        }
    }

    /// Applies `command` and returns the next snapshot.
    pub fn apply(mut self, command: Command) -> Self {
        let name = command.name();
        let applied = match command {
            Command::SelectWorkspace(id) => self.select_workspace(id),
            Command::SelectPage(id) => {
                self.selected_page_id = id;
                true
            }
            Command::CreatePage { title } => self.create_page(title.as_str()),
            Command::UpdatePageContent { id, content } => self.update_page_content(id, content),
            Command::RenamePage { id, title } => self.rename_page(id, &title),
            Command::DeletePage(id) => self.delete_page(id),
            Command::CreateColumn { title } => self.create_column(title),
            Command::CreateTask {
                column_id,
                title,
                description,
            } => self.create_task(column_id, title, description),
            Command::UpdateTask { id, patch } => self.update_task(id, &patch),
            Command::MoveTaskToColumn { task_id, column_id } => {
                assigner::move_task_to_column(&mut self.tasks, task_id, column_id)
            }
            Command::DeleteTask(id) => assigner::delete_task(&mut self.tasks, id),
            Command::CreatePageWithSchedule {
                title,
                content,
                workspace_id,
                start,
                end,
            } => self.create_page_with_schedule(title.as_str(), content, workspace_id, start, end),
            Command::CreateTaskWithSchedule {
                title,
                description,
                workspace_id,
                start,
                end,
            } => self.create_task_with_schedule(
                title.as_str(),
                description,
                workspace_id,
                start,
                end,
            ),
        };

        let status = if applied { "ok" } else { "skipped" };
        debug!("event=command_apply module=store status={status} command={name}");
        self
    }

    /// Selected workspace, else the first one.
    fn active_workspace_id(&self) -> Option<WorkspaceId> {
        self.selected_workspace_id
            .or_else(|| self.workspaces.first().map(|workspace| workspace.id))
    }

    fn select_workspace(&mut self, id: WorkspaceId) -> bool {
        if !self.workspaces.iter().any(|workspace| workspace.id == id) {
            return false;
        }
        self.selected_workspace_id = Some(id);
        true
    }

    fn create_page(&mut self, title: &str) -> bool {
        let Some(workspace_id) = self.active_workspace_id() else {
            return false;
        };
        let page = Page::new(workspace_id, title_or_default(title, DEFAULT_PAGE_TITLE));
        self.insert_selected_page(page);
        true
    }

    fn insert_selected_page(&mut self, page: Page) {
        self.selected_page_id = Some(page.id);
        self.pages.insert(0, page);
    }

    fn update_page_content(&mut self, id: PageId, content: String) -> bool {
        let Some(page) = self.pages.iter_mut().find(|page| page.id == id) else {
            return false;
        };
        page.content = content;
        page.touch();
        true
    }

    fn rename_page(&mut self, id: PageId, title: &str) -> bool {
        let Some(page) = self.pages.iter_mut().find(|page| page.id == id) else {
            return false;
        };
        page.title = title_or_default(title, DEFAULT_PAGE_TITLE);
        page.touch();
        true
    }

    fn delete_page(&mut self, id: PageId) -> bool {
        let before = self.pages.len();
        self.pages.retain(|page| page.id != id);
        if self.pages.len() == before {
            return false;
        }
        if self.selected_page_id == Some(id) {
            self.selected_page_id = self.pages.first().map(|page| page.id);
        }
        true
    }

    fn create_column(&mut self, title: String) -> bool {
        let Some(workspace_id) = self.active_workspace_id() else {
            return false;
        };
        let order = i64::try_from(self.columns.len()).unwrap_or(i64::MAX - 1) + 1;
        self.columns.push(Column::new(workspace_id, title, order));
        true
    }

    fn create_task(&mut self, column_id: ColumnId, title: String, description: String) -> bool {
        let Some(workspace_id) = self.active_workspace_id() else {
            return false;
        };
        assigner::create_task(&mut self.tasks, column_id, workspace_id, title, description);
        true
    }

    fn update_task(&mut self, id: TaskId, patch: &TaskPatch) -> bool {
        assigner::update_task(&mut self.tasks, id, patch)
    }

    fn create_page_with_schedule(
        &mut self,
        title: &str,
        content: String,
        workspace_id: Option<WorkspaceId>,
        start: DayKey,
        end: Option<DayKey>,
    ) -> bool {
        let Some(workspace_id) = workspace_id.or_else(|| self.active_workspace_id()) else {
            return false;
        };
        let page = Page::new(workspace_id, title_or_default(title, DEFAULT_PAGE_TITLE))
            .with_content(content)
            .with_schedule(Schedule::range(start, end.unwrap_or(start)));
        self.insert_selected_page(page);
        true
    }

    fn create_task_with_schedule(
        &mut self,
        title: &str,
        description: String,
        workspace_id: Option<WorkspaceId>,
        start: DayKey,
        end: Option<DayKey>,
    ) -> bool {
        let Some(workspace_id) = workspace_id.or_else(|| self.active_workspace_id()) else {
            return false;
        };
        let column = self
            .columns
            .iter()
            .find(|column| column.workspace_id == workspace_id)
            .or_else(|| self.columns.first());
        let Some(column_id) = column.map(|column| column.id) else {
            return false;
        };

        let task = Task::new(
            column_id,
            workspace_id,
            title_or_default(title, DEFAULT_TASK_TITLE),
            description,
        )
        .with_schedule(Schedule::range(start, end.unwrap_or(start)));
        self.tasks.push(task);
        true
    }
}
