//! New Todo Form Component
//!
//! Title input plus priority choice. Enter submits.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::components::PrioritySelector;
use crate::logging::{console_error, console_log};
use crate::models::Priority;
use crate::reorder::{prepare_title, ReorderableListController};
use crate::store::{store_push_item, use_todo_store};

#[component]
pub fn NewTodoForm(controller: ReorderableListController<HttpApi>) -> impl IntoView {
    let store = use_todo_store();

    let (new_title, set_new_title) = signal(String::new());
    let (priority, set_priority) = signal(Priority::Medium);

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get_untracked();
        if prepare_title(&title).is_none() {
            return;
        }
        let selected = priority.get_untracked();

        spawn_local(async move {
            match controller.add(&title, selected).await {
                Ok(Some(item)) => {
                    console_log(&format!("[TODO] Created item {}", item.id));
                    store_push_item(&store, item);
                    set_new_title.set(String::new());
                }
                Ok(None) => {}
                Err(e) => console_error(&format!("[TODO] Create failed: {}", e)),
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <div class="new-todo-row">
                <input
                    type="text"
                    placeholder="Add a new todo..."
                    prop:value=move || new_title.get()
                    on:input=move |ev| set_new_title.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>
            <PrioritySelector current=priority on_change=move |p| set_priority.set(p) />
        </form>
    }
}
