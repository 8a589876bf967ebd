use crate::commands::{report, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TodoId;
use crate::storage::KeyValueStore;
use crate::todos::TodoStore;

pub fn run<S: KeyValueStore>(store: &mut TodoStore<S>, id: TodoId) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Err(e) = store.toggle(id) {
        let kept = store.get(id).is_some();
        report(&mut result, e)?;
        if kept {
            result.affected.push(id);
        }
        return Ok(result);
    }

    result.affected.push(id);
    if let Some(todo) = store.get(id) {
        let state = if todo.completed { "done" } else { "active" };
        result.add_message(CmdMessage::success(format!(
            "Task {} marked {}: {}",
            id, state, todo.text
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::persist::TodoPersistence;
    use crate::storage::memory::InMemoryStorage;

    #[test]
    fn toggles_and_names_the_new_state() {
        let mut store = TodoStore::open(TodoPersistence::new(InMemoryStorage::new())).unwrap();
        let id = store.add("a").unwrap();

        let result = run(&mut store, id).unwrap();
        assert_eq!(result.affected, vec![id]);
        assert!(result.messages[0].content.contains("marked done"));

        let result = run(&mut store, id).unwrap();
        assert!(result.messages[0].content.contains("marked active"));
    }

    #[test]
    fn unknown_id_is_a_warning() {
        let mut store = TodoStore::open(TodoPersistence::new(InMemoryStorage::new())).unwrap();
        let result = run(&mut store, TodoId(12)).unwrap();

        assert!(result.affected.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn failed_write_reports_error_and_keeps_the_flip() {
        let mut store = TodoStore::open(TodoPersistence::new(InMemoryStorage::new())).unwrap();
        let id = store.add("a").unwrap();
        store.persistence().storage().set_simulate_write_error(true);

        let result = run(&mut store, id).unwrap();
        assert!(result.has_errors());
        assert_eq!(result.affected, vec![id]);
        assert!(store.get(id).unwrap().completed);
        assert!(!store.persistence().load_or_empty().unwrap()[0].completed);
    }
}
