//! # Todo Store
//!
//! [`TodoStore`] owns the authoritative, insertion-ordered collection and is
//! its only mutator. Every mutating operation writes the whole collection
//! through the [`TodoPersistence`] adapter before returning.
//!
//! ## Invariants
//!
//! - Ids are unique for the lifetime of the store and never reused, see
//!   [`IdGenerator`].
//! - Text is trimmed and never empty.
//! - `created_at` is set once in [`add`](TodoStore::add).
//! - Records are never reordered; deletions remove in place.
//!
//! ## Write failures
//!
//! If the backend rejects a write, the in-memory change is kept (it stays
//! authoritative for the session) and the operation returns
//! [`TodozError::Storage`]. An operation never returns `Ok` with storage
//! left stale.

use crate::error::{Result, TodozError};
use crate::ids::IdGenerator;
use crate::model::{sample_todos, Todo, TodoId};
use crate::persist::TodoPersistence;
use crate::storage::KeyValueStore;

pub struct TodoStore<S: KeyValueStore> {
    todos: Vec<Todo>,
    ids: IdGenerator,
    persistence: TodoPersistence<S>,
}

impl<S: KeyValueStore> TodoStore<S> {
    /// Load the stored collection. Corrupted data is logged and replaced by
    /// an empty collection; only an unreadable store is an error.
    pub fn open(persistence: TodoPersistence<S>) -> Result<Self> {
        let todos = match persistence.load() {
            Ok(stored) => stored.unwrap_or_default(),
            Err(TodozError::Parse(e)) => {
                tracing::warn!(
                    key = %persistence.key(),
                    error = %e,
                    "stored todos are corrupted, starting with an empty list"
                );
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        Ok(Self::from_parts(todos, persistence))
    }

    /// Like [`open`](Self::open), but a first run (nothing ever stored)
    /// starts with the sample records, which are persisted right away.
    pub fn open_seeded(persistence: TodoPersistence<S>) -> Result<Self> {
        match persistence.load() {
            Ok(None) => {
                let samples = sample_todos();
                tracing::info!(count = samples.len(), "seeding sample todos");
                let store = Self::from_parts(samples, persistence);
                if let Err(e) = store.persist() {
                    tracing::warn!(error = %e, "could not save sample todos");
                }
                Ok(store)
            }
            Ok(Some(todos)) => Ok(Self::from_parts(todos, persistence)),
            Err(TodozError::Parse(_)) => Self::open(persistence),
            Err(e) => Err(e),
        }
    }

    fn from_parts(todos: Vec<Todo>, persistence: TodoPersistence<S>) -> Self {
        let ids = IdGenerator::seeded_from(&todos);
        Self {
            todos,
            ids,
            persistence,
        }
    }

    fn persist(&self) -> Result<()> {
        self.persistence.save(&self.todos)
    }

    /// Append a new active record. Blank text is rejected before anything
    /// is created or written.
    pub fn add(&mut self, text: &str) -> Result<TodoId> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodozError::EmptyInput);
        }
        let id = self.ids.next_id()?;
        self.todos.push(Todo::new(id, text));
        self.persist()?;
        Ok(id)
    }

    pub fn toggle(&mut self, id: TodoId) -> Result<()> {
        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TodozError::NotFound(id))?;
        todo.toggle();
        self.persist()
    }

    pub fn delete(&mut self, id: TodoId) -> Result<()> {
        let pos = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(TodozError::NotFound(id))?;
        self.todos.remove(pos);
        self.persist()
    }

    /// Remove every completed record and return how many went. Persists
    /// even when nothing was removed.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        let removed = before - self.todos.len();
        self.persist()?;
        Ok(removed)
    }

    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn persistence(&self) -> &TodoPersistence<S> {
        &self.persistence
    }
}
