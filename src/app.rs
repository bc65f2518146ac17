//! Todos App
//!
//! Startup wiring and the top-level component: new-todo input,
//! toggle-all checkbox, the list and the footer.

use leptos::prelude::*;

use crate::actions;
use crate::components::{StatsFooter, TodoRow};
use crate::config::AppConfig;
use crate::context::{BrowserStore, TodoContext};
use crate::domain::Todo;
use crate::logger;
use crate::storage::{KeyValueStorage, LocalRepository, MemoryStorage, WebStorage};
use crate::store::TodoStore;
use crate::view_model::Stats;

/// Open storage, read config, install logging and mount the app
pub fn start() {
    let (storage, storage_err) = match WebStorage::open() {
        Ok(storage) => (Box::new(storage) as Box<dyn KeyValueStorage>, None),
        Err(err) => (Box::new(MemoryStorage::new()) as Box<dyn KeyValueStorage>, Some(err)),
    };
    let loaded = AppConfig::load(&storage);
    let config = loaded.as_ref().ok().cloned().unwrap_or_default();

    if logger::init(config.level_filter()).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }
    if let Some(err) = storage_err {
        log::warn!("localStorage unavailable, todos will not persist: {}", err);
    }
    if let Err(err) = loaded {
        log::warn!("ignoring unreadable config: {}", err);
    }
    log::info!("using namespace {}", config.namespace);

    let store: BrowserStore = TodoStore::new(LocalRepository::new(storage, config.namespace))
        .with_default_content(config.default_content);
    mount_to_body(move || view! { <App store=store /> });
}

#[component]
pub fn App(store: BrowserStore) -> impl IntoView {
    // State
    let (todos, set_todos) = signal(Vec::<Todo>::new());
    let (new_todo, set_new_todo) = signal(String::new());

    let ctx = TodoContext::attach(store, set_todos);
    provide_context(ctx);

    let stats = Memo::new(move |_| todos.with(|todos| Stats::from_todos(todos)));

    let create_on_enter = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let text = new_todo.get_untracked();
        ctx.mutate("create todo", |store| actions::create_on_enter(store, &text));
        set_new_todo.set(String::new());
    };

    view! {
        <section class="todoapp">
            <header class="header">
                <h1>"Todos"</h1>
                <input
                    class="new-todo"
                    placeholder="What needs to be done?"
                    autofocus=true
                    prop:value=new_todo
                    on:input=move |ev| set_new_todo.set(event_target_value(&ev))
                    on:keydown=create_on_enter
                />
            </header>

            <Show when=move || stats.get().is_visible()>
                <section class="main">
                    <input
                        id="toggle-all"
                        class="toggle-all"
                        type="checkbox"
                        prop:checked=move || stats.get().all_done()
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            ctx.mutate("toggle all", |store| actions::toggle_all(store, checked));
                        }
                    />
                    <label for="toggle-all">"Mark all as complete"</label>
                    <ul class="todo-list">
                        <For
                            each=move || todos.get()
                            // Key on every mutable field so an edit re-renders the row
                            key=|todo| (todo.id, todo.content.clone(), todo.done)
                            children=move |todo| view! { <TodoRow todo=todo /> }
                        />
                    </ul>
                </section>
                <StatsFooter stats=stats />
            </Show>
        </section>
    }
}
