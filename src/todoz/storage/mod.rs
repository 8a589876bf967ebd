//! # Storage Layer
//!
//! The to-do list persists into a small local key-value store, the same
//! shape a browser's local storage has: string keys mapping to string
//! values. [`KeyValueStore`] abstracts that store so the rest of the crate
//! never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStorage`]: production storage. Each key is one file,
//!   `<root>/<key>.json`, replaced atomically on write.
//! - [`memory::InMemoryStorage`]: storage for tests. Can be told to reject
//!   writes so the write-failure path can be exercised.
//!
//! ## Error contract
//!
//! - A key that was never written reads as `Ok(None)`, not an error.
//! - A rejected write (disk full, read-only directory, simulated quota) is
//!   [`TodozError::Storage`](crate::error::TodozError::Storage). Callers keep
//!   their in-memory state and report it.
//! - A store that cannot be read at all is
//!   [`TodozError::Io`](crate::error::TodozError::Io) and propagates.

use crate::error::{Result, TodozError};

pub mod fs;
pub mod memory;

/// Abstract interface for local key-value storage.
///
/// All methods take `&self`: the crate is single-threaded and backends that
/// need mutation use interior mutability.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Keys end up as file names, so they are restricted to a safe alphabet.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(TodozError::Config(format!(
            "Invalid storage key '{}': use letters, digits, '-' or '_'",
            key
        )))
    }
}
