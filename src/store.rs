//! Todo Store
//!
//! Ordered in-memory collection of todos, mirrored to a repository.
//! Every mutation is persisted first, then applied in memory, then
//! published on the event bus. A failed write leaves memory untouched.

use std::collections::{BTreeMap, HashMap};

use crate::domain::{DomainError, DomainResult, Todo, TodoId, TodoPatch, DEFAULT_CONTENT};
use crate::events::{EventBus, StoreEvent, SubscriptionId};
use crate::storage::Repository;

pub struct TodoStore<R> {
    repo: R,
    /// Todos keyed by (order, id); iteration order is display order
    todos: BTreeMap<(u64, TodoId), Todo>,
    /// id -> order, to find an entry in `todos`
    index: HashMap<TodoId, u64>,
    events: EventBus,
    default_content: String,
}

impl<R: Repository<Todo>> TodoStore<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            todos: BTreeMap::new(),
            index: HashMap::new(),
            events: EventBus::new(),
            default_content: DEFAULT_CONTENT.to_string(),
        }
    }

    /// Content given to todos created without text
    pub fn with_default_content(mut self, content: impl Into<String>) -> Self {
        self.default_content = content.into();
        self
    }

    pub fn subscribe(&mut self, handler: impl Fn(&StoreEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(handler)
    }

    /// Load every persisted todo, replacing the in-memory state
    pub fn fetch(&mut self) -> DomainResult<()> {
        let loaded = self.repo.list()?;
        self.todos.clear();
        self.index.clear();
        for todo in loaded {
            self.insert(todo);
        }
        log::info!("fetched {} todos", self.todos.len());
        self.events.publish(&StoreEvent::Reset(self.to_vec()));
        Ok(())
    }

    /// Create a todo at the end of the list
    pub fn create(&mut self, patch: TodoPatch) -> DomainResult<Todo> {
        let patch = TodoPatch {
            content: patch.content.or_else(|| Some(self.default_content.clone())),
            ..patch
        };
        let todo = Todo::new(TodoId::new(), self.next_order(), patch);
        let todo = self.repo.create(&todo)?;
        log::debug!("created todo {} at order {}", todo.id, todo.order);
        self.insert(todo.clone());
        self.events.publish(&StoreEvent::Added(todo.clone()));
        Ok(todo)
    }

    /// Merge `patch` into the todo and persist it
    pub fn save(&mut self, id: &TodoId, patch: &TodoPatch) -> DomainResult<Todo> {
        let mut todo = self.require(id)?.clone();
        patch.apply(&mut todo);
        self.replace(todo)
    }

    /// Flip the todo's `done` flag and persist it
    pub fn toggle(&mut self, id: &TodoId) -> DomainResult<Todo> {
        let mut todo = self.require(id)?.clone();
        todo.toggle();
        self.replace(todo)
    }

    /// Remove the todo from storage and from the list
    pub fn destroy(&mut self, id: &TodoId) -> DomainResult<()> {
        let order = *self
            .index
            .get(id)
            .ok_or_else(|| DomainError::NotFound(format!("todo {}", id)))?;
        self.repo.delete(id)?;
        self.todos.remove(&(order, *id));
        self.index.remove(id);
        log::debug!("destroyed todo {}", id);
        self.events.publish(&StoreEvent::Destroyed(*id));
        Ok(())
    }

    /// Set every todo's `done` flag; returns how many todos changed
    pub fn toggle_all(&mut self, done: bool) -> DomainResult<usize> {
        let ids: Vec<TodoId> = self
            .todos
            .values()
            .filter(|todo| todo.done != done)
            .map(|todo| todo.id)
            .collect();
        let patch = TodoPatch::done(done);
        for id in &ids {
            self.save(id, &patch)?;
        }
        Ok(ids.len())
    }

    /// Destroy every done todo; returns how many were removed
    pub fn clear_completed(&mut self) -> DomainResult<usize> {
        let ids: Vec<TodoId> = self.done().into_iter().map(|todo| todo.id).collect();
        for id in &ids {
            self.destroy(id)?;
        }
        Ok(ids.len())
    }

    /// Todos with `done == true`, in store order
    pub fn done(&self) -> Vec<&Todo> {
        self.todos.values().filter(|todo| todo.done).collect()
    }

    /// Todos with `done == false`, in store order
    pub fn remaining(&self) -> Vec<&Todo> {
        self.todos.values().filter(|todo| !todo.done).collect()
    }

    /// 1 for an empty store, otherwise the last todo's order + 1.
    /// Pinned at `u64::MAX`; ties are ordered by id.
    pub fn next_order(&self) -> u64 {
        match self.todos.keys().next_back() {
            Some((order, _)) => order.saturating_add(1),
            None => 1,
        }
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        let order = self.index.get(id)?;
        self.todos.get(&(*order, *id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.todos.values()
    }

    pub fn to_vec(&self) -> Vec<Todo> {
        self.todos.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn require(&self, id: &TodoId) -> DomainResult<&Todo> {
        self.get(id)
            .ok_or_else(|| DomainError::NotFound(format!("todo {}", id)))
    }

    fn insert(&mut self, todo: Todo) {
        self.index.insert(todo.id, todo.order);
        self.todos.insert((todo.order, todo.id), todo);
    }

    /// Persist an edited copy of an existing todo and swap it in
    fn replace(&mut self, todo: Todo) -> DomainResult<Todo> {
        let todo = self.repo.update(&todo)?;
        if let Some(old_order) = self.index.get(&todo.id).copied() {
            self.todos.remove(&(old_order, todo.id));
        }
        self.insert(todo.clone());
        log::debug!("saved todo {} (done={})", todo.id, todo.done);
        self.events.publish(&StoreEvent::Changed(todo.clone()));
        Ok(todo)
    }
}
