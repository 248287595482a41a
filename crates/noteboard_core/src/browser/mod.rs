//! Workspace browser helpers.
//!
//! # Responsibility
//! - Filter pages by title search.
//! - Derive list summaries with content previews.

pub mod preview;
pub mod search;
