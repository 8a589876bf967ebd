use crate::commands::{report, CmdMessage, CmdResult};
use crate::error::Result;
use crate::storage::KeyValueStore;
use crate::todos::TodoStore;

pub fn run<S: KeyValueStore>(store: &mut TodoStore<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let completed: Vec<_> = store
        .list()
        .iter()
        .filter(|t| t.completed)
        .map(|t| t.id)
        .collect();

    match store.clear_completed() {
        Ok(0) => result.add_message(CmdMessage::info("No completed tasks to clear")),
        Ok(n) => {
            result.add_message(CmdMessage::success(format!(
                "Cleared {} completed task{}",
                n,
                if n == 1 { "" } else { "s" }
            )));
        }
        Err(e) => report(&mut result, e)?,
    }

    // A rejected write still removed the records from memory.
    result.cleared = completed.len();
    result.affected = completed;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::persist::TodoPersistence;
    use crate::storage::memory::InMemoryStorage;

    #[test]
    fn clears_completed_and_counts_them() {
        let mut store = TodoStore::open(TodoPersistence::new(InMemoryStorage::new())).unwrap();
        let a = store.add("a").unwrap();
        store.add("b").unwrap();
        store.toggle(a).unwrap();

        let result = run(&mut store).unwrap();
        assert_eq!(result.cleared, 1);
        assert_eq!(result.affected, vec![a]);
        assert_eq!(result.messages[0].content, "Cleared 1 completed task");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn nothing_to_clear_is_info() {
        let mut store = TodoStore::open(TodoPersistence::new(InMemoryStorage::new())).unwrap();
        store.add("a").unwrap();

        let result = run(&mut store).unwrap();
        assert_eq!(result.cleared, 0);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn failed_write_reports_error_and_still_counts() {
        let mut store = TodoStore::open(TodoPersistence::new(InMemoryStorage::new())).unwrap();
        let a = store.add("a").unwrap();
        store.add("b").unwrap();
        store.toggle(a).unwrap();
        store.persistence().storage().set_simulate_write_error(true);

        let result = run(&mut store).unwrap();
        assert!(result.has_errors());
        assert_eq!(result.cleared, 1);
        assert_eq!(result.affected, vec![a]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.persistence().load_or_empty().unwrap().len(), 2);
    }
}
