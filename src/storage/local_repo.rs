//! Todo Repository Implementation
//!
//! Key-value backed implementation of Repository<Todo>. Each todo is one
//! JSON record stored under `{namespace}-{id}`.

use super::traits::{KeyValueStorage, Repository};
use crate::domain::{DomainResult, Todo, TodoId};

/// Collection name the todos are stored under
pub const DEFAULT_NAMESPACE: &str = "todos_backbone";

pub struct LocalRepository<S> {
    storage: S,
    namespace: String,
}

impl<S: KeyValueStorage> LocalRepository<S> {
    pub fn new(storage: S, namespace: impl Into<String>) -> Self {
        Self {
            storage,
            namespace: namespace.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn prefix(&self) -> String {
        format!("{}-", self.namespace)
    }

    fn record_key(&self, id: &TodoId) -> String {
        format!("{}{}", self.prefix(), id)
    }

    fn write(&mut self, todo: &Todo) -> DomainResult<()> {
        let key = self.record_key(&todo.id);
        let json = serde_json::to_string(todo)?;
        self.storage.set(&key, &json)
    }
}

impl<S: KeyValueStorage> Repository<Todo> for LocalRepository<S> {
    fn create(&mut self, entity: &Todo) -> DomainResult<Todo> {
        self.write(entity)?;
        Ok(entity.clone())
    }

    fn find_by_id(&self, id: &TodoId) -> DomainResult<Option<Todo>> {
        match self.storage.get(&self.record_key(id))? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn list(&self) -> DomainResult<Vec<Todo>> {
        let prefix = self.prefix();
        let mut todos = Vec::new();
        for key in self.storage.keys_with_prefix(&prefix)? {
            // "work-old-<id>" also starts with "work-"; only a bare id may follow
            if key[prefix.len()..].parse::<TodoId>().is_err() {
                continue;
            }
            if let Some(json) = self.storage.get(&key)? {
                todos.push(serde_json::from_str::<Todo>(&json)?);
            }
        }
        todos.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        Ok(todos)
    }

    fn update(&mut self, entity: &Todo) -> DomainResult<Todo> {
        self.write(entity)?;
        Ok(entity.clone())
    }

    fn delete(&mut self, id: &TodoId) -> DomainResult<()> {
        let key = self.record_key(id);
        self.storage.remove(&key)
    }
}
