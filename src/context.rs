//! Application Context
//!
//! The todo store, shared with every component via Leptos Context API.

use leptos::prelude::*;

use crate::domain::{DomainResult, Todo};
use crate::storage::{KeyValueStorage, LocalRepository};
use crate::store::TodoStore;
use crate::view_model::apply_event;

/// Store type used in the browser
pub type BrowserStore = TodoStore<LocalRepository<Box<dyn KeyValueStorage>>>;

#[derive(Clone, Copy)]
pub struct TodoContext {
    store: StoredValue<BrowserStore, LocalStorage>,
}

impl TodoContext {
    /// Route store events into `set_todos`, then load the persisted todos
    pub fn attach(mut store: BrowserStore, set_todos: WriteSignal<Vec<Todo>>) -> Self {
        store.subscribe(move |event| set_todos.update(|todos| apply_event(todos, event)));
        if let Err(err) = store.fetch() {
            log::error!("failed to load todos: {}", err);
        }
        Self {
            store: StoredValue::new_local(store),
        }
    }

    /// Run a gesture against the store. Failures are logged, not retried,
    /// and come back as `None`.
    pub fn mutate<U>(
        &self,
        gesture: &str,
        f: impl FnOnce(&mut BrowserStore) -> DomainResult<U>,
    ) -> Option<U> {
        let mut outcome = None;
        self.store.update_value(|store| match f(store) {
            Ok(value) => outcome = Some(value),
            Err(err) => log::error!("{} failed: {}", gesture, err),
        });
        outcome
    }
}
