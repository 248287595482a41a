//! Application state owned by the composition root.
//!
//! # Responsibility
//! - Hold the single current `AppState` snapshot.
//! - Route every mutation through `Command` dispatch.
//!
//! # Invariants
//! - Readers always observe a fully applied snapshot; a command is applied
//!   in one synchronous step.
//! - Mutation needs `&mut Store`; there is no interior mutability.

pub mod command;
pub mod state;

use crate::board::assigner::BoardGrouping;
use crate::calendar::day_index::DayIndex;
use crate::model::page::Page;
use command::Command;
use state::AppState;

/// Owner of the current application state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Store holding the demo state.
    pub fn seeded() -> Self {
        Self::new(AppState::seeded())
    }

    /// Current snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    /// Applies one command, replacing the current snapshot.
    pub fn dispatch(&mut self, command: Command) {
        let current = std::mem::take(&mut self.state);
        self.state = current.apply(command);
    }

    /// Applies commands in order.
    pub fn dispatch_all<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.dispatch(command);
        }
    }

    pub fn day_index(&self) -> DayIndex<'_> {
        self.state.day_index()
    }

    pub fn board(&self) -> BoardGrouping<'_> {
        self.state.board()
    }

    pub fn selected_page(&self) -> Option<&Page> {
        self.state.selected_page()
    }
}
