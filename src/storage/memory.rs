//! In-memory key-value storage
//!
//! Used by tests, and as the fallback when the browser refuses localStorage.

use std::collections::BTreeMap;

use super::traits::KeyValueStorage;
use crate::domain::DomainResult;

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> DomainResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> DomainResult<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }
}
