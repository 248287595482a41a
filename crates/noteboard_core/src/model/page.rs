//! Page (note) record.
//!
//! # Invariants
//! - `updated_at` is refreshed on every content or title change.
//! - `schedule` is optional; unscheduled pages never reach the calendar.

use crate::model::schedule::Schedule;
use crate::model::workspace::WorkspaceId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PageId = Uuid;

/// Free-form markdown page owned by one workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    pub workspace_id: WorkspaceId,
    pub title: String,
    /// Markdown body.
    pub content: String,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub schedule: Schedule,
}

impl Page {
    /// Creates an empty, unscheduled page with a generated ID.
    pub fn new(workspace_id: WorkspaceId, title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), workspace_id, title)
    }

    /// Creates an empty, unscheduled page with a caller-provided ID.
    pub fn with_id(id: PageId, workspace_id: WorkspaceId, title: impl Into<String>) -> Self {
        Self {
            id,
            workspace_id,
            title: title.into(),
            content: String::new(),
            updated_at: Utc::now(),
            schedule: Schedule::unscheduled(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
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
