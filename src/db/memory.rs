//! In-memory store, used by tests and as a scratch store.

use super::KeyValueStore;
use crate::errors::{AppError, AppResult};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose reads and writes always fail, like a browser store with
    /// storage disabled or over quota.
    pub fn failing() -> Self {
        Self {
            values: HashMap::new(),
            failing: true,
        }
    }

    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        if self.failing {
            return Err(AppError::StoreUnavailable(format!("cannot read '{key}'")));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.failing {
            return Err(AppError::StoreUnavailable(format!("cannot write '{key}'")));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
