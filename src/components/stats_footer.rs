//! Stats Footer Component
//!
//! Remaining count and the clear-completed button.

use leptos::prelude::*;

use crate::actions;
use crate::context::TodoContext;
use crate::view_model::Stats;

#[component]
pub fn StatsFooter(stats: Memo<Stats>) -> impl IntoView {
    let ctx = expect_context::<TodoContext>();

    view! {
        <footer class="footer">
            <span class="todo-count">{move || stats.get().remaining_label()}</span>
            <Show when=move || { stats.get().done > 0 }>
                <button
                    class="clear-completed"
                    on:click=move |_| {
                        ctx.mutate("clear completed", |store| actions::clear_completed(store));
                    }
                >
                    {move || stats.get().clear_label()}
                </button>
            </Show>
        </footer>
    }
}
