//! Unsaved "new scheduled item" form of the calendar.

use crate::model::item::ItemKind;
use crate::model::schedule::DayKey;
use crate::model::workspace::WorkspaceId;
use crate::model::{title_or_default, DEFAULT_PAGE_TITLE, DEFAULT_TASK_TITLE};
use crate::store::command::Command;

/// Whether the form schedules one day or an explicit range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangeMode {
    #[default]
    Single,
    Range,
}

/// Calendar form state. In single mode start and end follow the selected day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDraft {
    pub kind: ItemKind,
    pub title: String,
    pub description: String,
    range_mode: RangeMode,
    start: DayKey,
    end: DayKey,
    selected_day: DayKey,
}

impl ScheduleDraft {
    pub fn new(selected_day: DayKey) -> Self {
        Self {
            kind: ItemKind::Page,
            title: String::new(),
            description: String::new(),
            range_mode: RangeMode::Single,
            start: selected_day,
            end: selected_day,
            selected_day,
        }
    }

    pub fn range_mode(&self) -> RangeMode {
        self.range_mode
    }

    pub fn start(&self) -> DayKey {
        self.start
    }

    /// Effective end: the start in single mode.
    pub fn end(&self) -> DayKey {
        match self.range_mode {
            RangeMode::Single => self.start,
            RangeMode::Range => self.end,
        }
    }

    pub fn selected_day(&self) -> DayKey {
        self.selected_day
    }

    /// Moves the calendar selection. Single mode re-syncs start and end; an
    /// explicit range is left as typed.
    pub fn select_day(&mut self, day: DayKey) {
        self.selected_day = day;
        if self.range_mode == RangeMode::Single {
            self.start = day;
            self.end = day;
        }
    }

    pub fn set_range_mode(&mut self, mode: RangeMode) {
        self.range_mode = mode;
        if mode == RangeMode::Single {
            self.start = self.selected_day;
            self.end = self.selected_day;
        }
    }

    pub fn set_start(&mut self, day: DayKey) {
        self.start = day;
    }

    /// Sets the range end. Not validated against `start`; a reversed range
    /// is stored and simply covers no calendar day.
    pub fn set_end(&mut self, day: DayKey) {
        self.end = day;
    }

    /// Builds the create command and resets the form.
    ///
    /// Returns `None` (keeping the draft) when title and description are
    /// both blank.
    pub fn submit(&mut self, workspace_id: Option<WorkspaceId>) -> Option<Command> {
        if self.title.trim().is_empty() && self.description.trim().is_empty() {
            return None;
        }

        let start = self.start;
        let end = Some(self.end());
        let description = self.description.trim().to_string();
        let command = match self.kind {
            ItemKind::Page => Command::CreatePageWithSchedule {
                title: title_or_default(&self.title, DEFAULT_PAGE_TITLE),
                content: description,
                workspace_id,
                start,
                end,
            },
            ItemKind::Task => Command::CreateTaskWithSchedule {
                title: title_or_default(&self.title, DEFAULT_TASK_TITLE),
                description,
                workspace_id,
                start,
                end,
            },
        };
        self.reset();
        Some(command)
    }

    /// Discards typed text and the range; keeps kind and selected day.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.title.clear();
        self.description.clear();
        self.range_mode = RangeMode::Single;
        self.start = self.selected_day;
        self.end = self.selected_day;
    }
}

#[cfg(test)]
mod tests {
    use super::{RangeMode, ScheduleDraft};
    use crate::model::item::ItemKind;
    use crate::model::schedule::DayKey;
    use crate::store::command::Command;

    fn day(value: &str) -> DayKey {
        value.parse().unwrap()
    }

    #[test]
    fn blank_draft_does_not_submit() {
        let mut draft = ScheduleDraft::new(day("2024-03-10"));
        draft.title = "   ".to_string();
        assert_eq!(draft.submit(None), None);
        assert_eq!(draft.title, "   ");
    }

    #[test]
    fn single_mode_follows_selected_day() {
        let mut draft = ScheduleDraft::new(day("2024-03-10"));
        draft.select_day(day("2024-03-12"));
        assert_eq!(draft.start(), day("2024-03-12"));
        assert_eq!(draft.end(), day("2024-03-12"));
    }

    #[test]
    fn range_submit_builds_task_command_and_resets() {
        let mut draft = ScheduleDraft::new(day("2024-03-10"));
        draft.kind = ItemKind::Task;
        draft.set_range_mode(RangeMode::Range);
        draft.set_end(day("2024-03-14"));
        draft.select_day(day("2024-03-20"));
        draft.description = "  write report ".to_string();

        let command = draft.submit(None).unwrap();
        assert_eq!(
            command,
            Command::CreateTaskWithSchedule {
                title: "Untitled task".to_string(),
                description: "write report".to_string(),
                workspace_id: None,
                start: day("2024-03-10"),
                end: Some(day("2024-03-14")),
            }
        );
        assert_eq!(draft.range_mode(), RangeMode::Single);
        assert_eq!(draft.start(), day("2024-03-20"));
        assert!(draft.description.is_empty());
    }
}
