use crate::commands::{report, CmdMessage, CmdResult};
use crate::error::{Result, TodozError};
use crate::storage::KeyValueStore;
use crate::todos::TodoStore;

pub fn run<S: KeyValueStore>(store: &mut TodoStore<S>, text: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.add(text) {
        Ok(id) => {
            result.affected.push(id);
            result.add_message(CmdMessage::success(format!(
                "Added task {}: {}",
                id,
                text.trim()
            )));
        }
        Err(e) => {
            // The record exists in memory even though the write failed.
            if matches!(e, TodozError::Storage(_)) {
                if let Some(todo) = store.list().last() {
                    result.affected.push(todo.id);
                }
            }
            report(&mut result, e)?;
        }
    }
    Ok(result)
}
