//! Key-value store boundary.
//!
//! The campaign state is a single text value under a well-known key. The
//! production store is a SQLite table; tests use [`memory::MemoryStore`].

pub mod initialize;
pub mod log;
pub mod memory;
pub mod migrate;
pub mod pool;
pub mod stats;
pub mod store;

use crate::errors::AppResult;

/// Minimal string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }
}
