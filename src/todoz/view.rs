//! Filtered views over the collection. Pure reads: nothing here mutates or
//! reorders its input.

use crate::model::{FilterMode, Todo};

/// Records matching `mode`, in collection order.
pub fn project(todos: &[Todo], mode: FilterMode) -> Vec<&Todo> {
    todos.iter().filter(|t| mode.matches(t)).collect()
}

/// Owned variant of [`project`], for handing a snapshot to a UI.
pub fn project_owned(todos: &[Todo], mode: FilterMode) -> Vec<Todo> {
    project(todos, mode).into_iter().cloned().collect()
}

pub fn remaining_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| !t.completed).count()
}
