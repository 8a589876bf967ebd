//! # API Facade
//!
//! [`TodoApi`] is the seam between the to-do core and whatever UI drives it.
//! It owns the [`TodoStore`] and the current [`FilterMode`], dispatches each
//! user intent to its command, and hands back a [`CmdResult`] whose
//! [`RenderState`] was recomputed after the command ran.
//!
//! ## What the API Does NOT Do
//!
//! - No business logic: that lives in `todos.rs` and `commands/*.rs`.
//! - No I/O beyond the store's write-through: no stdout, no terminal.
//! - No UI binding: results are plain data. The UI attaches its own
//!   handlers and refers back to records by [`TodoId`].
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `TodoApi<FileStorage>`
//! - Testing: `TodoApi<InMemoryStorage>`
//!
//! Each `TodoApi` is an independent instance; there is no process-wide
//! state.

use crate::commands;
use crate::error::Result;
use crate::model::{FilterMode, TodoId};
use crate::storage::KeyValueStore;
use crate::todos::TodoStore;
use crate::view;
use std::path::Path;

pub struct TodoApi<S: KeyValueStore> {
    store: TodoStore<S>,
    filter: FilterMode,
}

impl<S: KeyValueStore> TodoApi<S> {
    pub fn new(store: TodoStore<S>) -> Self {
        Self {
            store,
            filter: FilterMode::default(),
        }
    }

    pub fn with_filter(mut self, filter: FilterMode) -> Self {
        self.filter = filter;
        self
    }

    /// "User submitted new-item text".
    pub fn add_todo(&mut self, text: &str) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.store, text)?;
        Ok(self.finish(result))
    }

    /// "User toggled item N".
    pub fn toggle_todo(&mut self, id: TodoId) -> Result<CmdResult> {
        let result = commands::toggle::run(&mut self.store, id)?;
        Ok(self.finish(result))
    }

    /// "User deleted item N".
    pub fn delete_todo(&mut self, id: TodoId) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.store, id)?;
        Ok(self.finish(result))
    }

    /// "User requested clear-completed".
    pub fn clear_completed(&mut self) -> Result<CmdResult> {
        let result = commands::clear::run(&mut self.store)?;
        Ok(self.finish(result))
    }

    /// "User selected filter mode M". Re-renders without touching the store.
    pub fn set_filter(&mut self, filter: FilterMode) -> CmdResult {
        self.filter = filter;
        self.finish(CmdResult::default())
    }

    /// Current view and count, for an initial paint or a forced refresh.
    pub fn render(&self) -> RenderState {
        RenderState {
            filter: self.filter,
            view: view::project_owned(self.store.list(), self.filter),
            remaining: view::remaining_count(self.store.list()),
        }
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn store(&self) -> &TodoStore<S> {
        &self.store
    }

    fn finish(&self, result: CmdResult) -> CmdResult {
        result.with_render(self.render())
    }
}

/// Read or change the configuration stored in `dir`.
pub fn configure(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(dir, action)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{count_label, CmdMessage, CmdResult, MessageLevel, RenderState};
