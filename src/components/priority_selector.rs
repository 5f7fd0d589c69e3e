//! Priority Selector Component
//!
//! Tier buttons for new todos.

use leptos::prelude::*;

use crate::models::Priority;

#[component]
pub fn PrioritySelector(
    current: ReadSignal<Priority>,
    on_change: impl Fn(Priority) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="priority-selector">
            {Priority::DISPLAY_ORDER.iter().map(|priority| {
                let priority = *priority;
                let is_selected = move || current.get() == priority;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "priority-btn active" } else { "priority-btn" }
                        on:click=move |_| on_change(priority)
                    >
                        {priority.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
