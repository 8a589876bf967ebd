//! Persistence adapter: the Todo Collection as one JSON array under a fixed
//! key of a [`KeyValueStore`].
//!
//! The stored layout is the one the browser page wrote, so existing data
//! keeps loading:
//!
//! ```text
//! [{"id":1,"text":"Buy milk","completed":false,"createdAt":"2024-05-01T10:00:00.000Z"}]
//! ```
//!
//! There is no schema version; changing the layout is a compatibility break.

use crate::error::{Result, TodozError};
use crate::model::Todo;
use crate::storage::{validate_key, KeyValueStore};

pub const DEFAULT_KEY: &str = "todos";

pub struct TodoPersistence<S: KeyValueStore> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> TodoPersistence<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: DEFAULT_KEY.to_string(),
        }
    }

    pub fn with_key(storage: S, key: &str) -> Result<Self> {
        validate_key(key)?;
        Ok(Self {
            storage,
            key: key.to_string(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Serialize and write the whole collection.
    pub fn save(&self, todos: &[Todo]) -> Result<()> {
        let content = serde_json::to_string(todos)?;
        self.storage.set(&self.key, &content)?;
        tracing::debug!(key = %self.key, count = todos.len(), "saved todos");
        Ok(())
    }

    /// `Ok(None)` when nothing was ever stored, `Err(Parse)` when the stored
    /// value is not a valid collection.
    pub fn load(&self) -> Result<Option<Vec<Todo>>> {
        let Some(content) = self.storage.get(&self.key)? else {
            tracing::debug!(key = %self.key, "no stored todos");
            return Ok(None);
        };
        let todos: Vec<Todo> = serde_json::from_str(&content).map_err(TodozError::Parse)?;
        tracing::debug!(key = %self.key, count = todos.len(), "loaded todos");
        Ok(Some(todos))
    }

    /// Like [`load`](Self::load) but an absent key is an empty collection.
    pub fn load_or_empty(&self) -> Result<Vec<Todo>> {
        Ok(self.load()?.unwrap_or_default())
    }
}
