//! Id generation for todo records.
//!
//! Ids are derived from the wall clock in milliseconds, matching what older
//! data written by the browser page contains, but the generator never hands
//! out an id at or below one it has already seen. Two adds inside the same
//! millisecond therefore get consecutive ids, and an id freed by a delete is
//! never reissued while the generator lives. Once the largest id has been
//! handed out the generator is exhausted and every further call fails.

use crate::error::{Result, TodozError};
use crate::model::{Todo, TodoId};
use chrono::Utc;

#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primes the generator so it stays above every id in `todos`,
    /// sample records included.
    pub fn seeded_from(todos: &[Todo]) -> Self {
        let last = todos.iter().map(|t| t.id.value()).max().unwrap_or(0);
        Self { last }
    }

    pub fn next_id(&mut self) -> Result<TodoId> {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now)
    }

    /// Next id given the current time in milliseconds.
    pub fn next_at(&mut self, now_ms: u64) -> Result<TodoId> {
        let after_last = self
            .last
            .checked_add(1)
            .ok_or(TodozError::IdsExhausted(TodoId(self.last)))?;
        let id = now_ms.max(after_last);
        self.last = id;
        Ok(TodoId(id))
    }

    pub fn last(&self) -> u64 {
        self.last
    }
}
