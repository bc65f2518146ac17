//! Storage Layer - Core Traits
//!
//! Defines the abstract interfaces for durable data access.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::domain::{DomainResult, Entity};

/// A flat string key-value store
///
/// Namespacing is a key-prefix convention on top of `keys`.
pub trait KeyValueStorage {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> DomainResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> DomainResult<()>;

    /// All keys currently stored
    fn keys(&self) -> DomainResult<Vec<String>>;

    /// Keys starting with `prefix`
    fn keys_with_prefix(&self, prefix: &str) -> DomainResult<Vec<String>> {
        Ok(self
            .keys()?
            .into_iter()
            .filter(|key| key.starts_with(prefix))
            .collect())
    }
}

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type. Operations are synchronous: the
/// browser storage they sit on is synchronous too.
pub trait Repository<T: Entity> {
    /// Persist a new entity
    fn create(&mut self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    fn find_by_id(&self, id: &T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    fn list(&self) -> DomainResult<Vec<T>>;

    /// Overwrite the persisted copy of an entity
    fn update(&mut self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    fn delete(&mut self, id: &T::Id) -> DomainResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> DomainResult<()> {
        (**self).remove(key)
    }

    fn keys(&self) -> DomainResult<Vec<String>> {
        (**self).keys()
    }
}
