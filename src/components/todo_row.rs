//! Todo Row Component
//!
//! One list entry: checkbox, text, inline editor and destroy button.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use crate::actions;
use crate::context::TodoContext;
use crate::domain::Todo;
use crate::view_model::settled_done;

#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = expect_context::<TodoContext>();

    let id = todo.id;
    let done = todo.done;
    let content = todo.content;
    let checked = RwSignal::new(done);
    let editing = RwSignal::new(false);
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    // Focus the editor once it is shown
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = input_ref.get() {
                Timeout::new(0, move || {
                    let _ = input.focus();
                })
                .forget();
            }
        }
    });

    // Enter and the blur that follows it both land here; only the first commits.
    // The row may already be unmounted when a late blur arrives.
    let close = move |value: String| {
        if editing.try_get_untracked() != Some(true) {
            return;
        }
        editing.set(false);
        ctx.mutate("edit todo", |store| actions::commit_edit(store, &id, &value));
    };

    view! {
        <li class:done=done class:editing=move || editing.get()>
            <div class="view">
                <input
                    class="toggle"
                    type="checkbox"
                    prop:checked=checked
                    on:change=move |_| {
                        let toggled = ctx.mutate("toggle todo", |store| actions::toggle_done(store, &id));
                        checked.set(settled_done(toggled.as_ref(), done));
                    }
                />
                <label on:dblclick=move |_| editing.set(true)>{content.clone()}</label>
                <button
                    class="destroy"
                    on:click=move |_| {
                        ctx.mutate("delete todo", |store| actions::delete(store, &id));
                    }
                ></button>
            </div>
            <input
                class="edit"
                node_ref=input_ref
                value=content
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        close(event_target_value(&ev));
                    }
                }
                on:blur=move |ev| close(event_target_value(&ev))
            />
        </li>
    }
}
