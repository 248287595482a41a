//! Unsaved new-task and edit-task form state.
//!
//! # Invariants
//! - At most one form is open; opening one closes the other.
//! - Cancelling discards draft text and never touches the state.
//! - A form with blank title and description does not submit.

use crate::model::board::{ColumnId, Task, TaskId, TaskPatch};
use crate::model::{title_or_default, DEFAULT_TASK_TITLE};
use crate::store::command::Command;

/// Currently open task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskForm {
    #[default]
    Closed,
    New {
        column_id: ColumnId,
        title: String,
        description: String,
    },
    Edit {
        task_id: TaskId,
        title: String,
        description: String,
    },
}

/// Board form session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEditor {
    form: TaskForm,
}

impl TaskEditor {
    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    /// Column with an open new-task form.
    pub fn open_column_id(&self) -> Option<ColumnId> {
        match &self.form {
            TaskForm::New { column_id, .. } => Some(*column_id),
            _ => None,
        }
    }

    /// Task under edit.
    pub fn editing_task_id(&self) -> Option<TaskId> {
        match &self.form {
            TaskForm::Edit { task_id, .. } => Some(*task_id),
            _ => None,
        }
    }

    /// Opens an empty new-task form on `column_id`.
    pub fn open_new(&mut self, column_id: ColumnId) {
        self.form = TaskForm::New {
            column_id,
            title: String::new(),
            description: String::new(),
        };
    }

    /// Opens the edit form prefilled from `task_id`.
    ///
    /// Returns `false` and leaves the form untouched when the task is missing.
    pub fn start_editing(&mut self, tasks: &[Task], task_id: TaskId) -> bool {
        let Some(task) = tasks.iter().find(|task| task.id == task_id) else {
            return false;
        };
        self.form = TaskForm::Edit {
            task_id,
            title: task.title.clone(),
            description: task.description.clone(),
        };
        true
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        match &mut self.form {
            TaskForm::New { title, .. } | TaskForm::Edit { title, .. } => *title = value.into(),
            TaskForm::Closed => {}
        }
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        match &mut self.form {
            TaskForm::New { description, .. } | TaskForm::Edit { description, .. } => {
                *description = value.into()
            }
            TaskForm::Closed => {}
        }
    }

    /// Submits the open form.
    ///
    /// Blank forms stay open and return `None`. Otherwise the form closes and
    /// the matching create or update command is returned.
    pub fn submit(&mut self) -> Option<Command> {
        let command = match &self.form {
            TaskForm::Closed => return None,
            TaskForm::New {
                column_id,
                title,
                description,
            } => {
                if is_blank(title, description) {
                    return None;
                }
                Command::CreateTask {
                    column_id: *column_id,
                    title: title_or_default(title, DEFAULT_TASK_TITLE),
                    description: description.trim().to_string(),
                }
            }
            TaskForm::Edit {
                task_id,
                title,
                description,
            } => {
                if is_blank(title, description) {
                    return None;
                }
                Command::UpdateTask {
                    id: *task_id,
                    patch: TaskPatch::text(
                        title_or_default(title, DEFAULT_TASK_TITLE),
                        description.trim(),
                    ),
                }
            }
        };
        self.form = TaskForm::Closed;
        Some(command)
    }

    pub fn cancel(&mut self) {
        self.form = TaskForm::Closed;
    }

    /// Closes the edit form when it targets the deleted task.
    pub fn on_task_deleted(&mut self, task_id: TaskId) {
        if self.editing_task_id() == Some(task_id) {
            self.cancel();
        }
    }

    /// Delete command for `task_id`, cancelling its edit session first.
    pub fn delete_task(&mut self, task_id: TaskId) -> Command {
        self.on_task_deleted(task_id);
        Command::DeleteTask(task_id)
    }
}

fn is_blank(title: &str, description: &str) -> bool {
    title.trim().is_empty() && description.trim().is_empty()
}
