//! Kanban board: task-to-column assignment and interactive sessions.
//!
//! # Responsibility
//! - Create, move, update and delete tasks over a task collection.
//! - Group tasks under their columns in display order.
//! - Model the pending drag and the new/edit task forms.
//!
//! # Invariants
//! - Moving a task overwrites its single `column_id`; last writer wins.
//! - Orphaned tasks stay in the collection but appear in no group.

pub mod assigner;
pub mod drag;
pub mod editor;
