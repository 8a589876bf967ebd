//! Property tests for the store, projector and persistence adapter.

use proptest::prelude::*;
use std::collections::HashSet;
use todoz::model::{FilterMode, Todo, TodoId};
use todoz::persist::TodoPersistence;
use todoz::storage::memory::InMemoryStorage;
use todoz::todos::TodoStore;
use todoz::view::project;

fn collection_strategy() -> impl Strategy<Value = Vec<Todo>> {
    prop::collection::vec(("[a-zA-Z0-9 ]{1,20}", any::<bool>()), 0..30).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (text, completed))| {
                let mut todo = Todo::new(TodoId(i as u64 + 1), format!("t{}{}", i, text));
                todo.completed = completed;
                todo
            })
            .collect()
    })
}

fn empty_store() -> TodoStore<InMemoryStorage> {
    TodoStore::open(TodoPersistence::new(InMemoryStorage::new())).unwrap()
}

proptest! {
    #[test]
    fn prop_added_ids_are_pairwise_distinct(texts in prop::collection::vec("[a-z]{1,8}", 1..60)) {
        let mut store = empty_store();
        let ids: Vec<TodoId> = texts.iter().map(|t| store.add(t).unwrap()).collect();
        let unique: HashSet<TodoId> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn prop_blank_text_never_creates(spaces in "[ \t\n]{0,10}") {
        let mut store = empty_store();
        prop_assert!(store.add(&spaces).is_err());
        prop_assert!(store.is_empty());
    }

    #[test]
    fn prop_toggle_is_an_involution(n in 1usize..10, pick in any::<prop::sample::Index>()) {
        let mut store = empty_store();
        for i in 0..n {
            store.add(&format!("task {}", i)).unwrap();
        }
        let id = store.list()[pick.index(n)].id;
        let before = store.list().to_vec();

        store.toggle(id).unwrap();
        store.toggle(id).unwrap();
        prop_assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn prop_clear_completed_removes_exactly_completed(flags in prop::collection::vec(any::<bool>(), 0..30)) {
        let mut store = empty_store();
        for (i, done) in flags.iter().enumerate() {
            let id = store.add(&format!("task {}", i)).unwrap();
            if *done {
                store.toggle(id).unwrap();
            }
        }
        let completed: HashSet<TodoId> = store
            .list()
            .iter()
            .filter(|t| t.completed)
            .map(|t| t.id)
            .collect();
        let kept: Vec<TodoId> = store
            .list()
            .iter()
            .filter(|t| !t.completed)
            .map(|t| t.id)
            .collect();

        let removed = store.clear_completed().unwrap();
        prop_assert_eq!(removed, completed.len());
        let after: Vec<TodoId> = store.list().iter().map(|t| t.id).collect();
        prop_assert_eq!(after, kept);
    }

    #[test]
    fn prop_active_and_completed_partition_all(todos in collection_strategy()) {
        let all: HashSet<TodoId> = project(&todos, FilterMode::All).iter().map(|t| t.id).collect();
        let active: HashSet<TodoId> = project(&todos, FilterMode::Active).iter().map(|t| t.id).collect();
        let completed: HashSet<TodoId> = project(&todos, FilterMode::Completed).iter().map(|t| t.id).collect();

        prop_assert!(active.is_disjoint(&completed));
        let union: HashSet<TodoId> = active.union(&completed).copied().collect();
        prop_assert_eq!(union, all);
    }

    #[test]
    fn prop_save_then_load_is_identity(todos in collection_strategy()) {
        let persistence = TodoPersistence::new(InMemoryStorage::new());
        persistence.save(&todos).unwrap();
        prop_assert_eq!(persistence.load().unwrap(), Some(todos));
    }
}
