//! Archive Page
//!
//! Soft-deleted items, each with a permanent delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{DeleteConfirmButton, UserHeader};
use crate::context::PageContext;
use crate::logging::{console_error, console_log};
use crate::models::Item;
use crate::reorder::ReorderableListController;
use crate::store::{store_archived, store_remove_archived, store_set_archived, TodoState};

#[component]
pub fn CompletedPage(page: PageContext) -> impl IntoView {
    let PageContext { api, user } = page;

    let store = Store::new(TodoState::default());
    provide_context(store);

    let controller = ReorderableListController::new(api, false);
    let viewer = StoredValue::new(user.clone());

    spawn_local(async move {
        match controller.load_archive().await {
            Ok(items) => {
                console_log(&format!("[TODO] Loaded {} archived items", items.len()));
                store_set_archived(&store, items);
            }
            Err(e) => console_error(&format!("[TODO] Archive load failed: {}", e)),
        }
    });

    let row = move |item: Item| {
        let id = item.id;
        let badge = viewer.with_value(|v| item.owner_badge(v));
        let row_class = if item.completed { "todo-item completed" } else { "todo-item" };
        let on_confirm = Callback::new(move |_: ()| {
            spawn_local(async move {
                match controller.hard_delete(id).await {
                    Ok(()) => store_remove_archived(&store, id),
                    Err(e) => console_error(&format!("[TODO] Permanent delete of {} failed: {}", id, e)),
                }
            });
        });
        view! {
            <li class=row_class>
                <span class="todo-title">{item.title}</span>
                {badge.map(|name| view! { <span class="todo-user">{name}</span> })}
                <DeleteConfirmButton button_class="delete-btn" on_confirm=on_confirm />
            </li>
        }
    };

    view! {
        <div class="app-layout">
            <UserHeader api=api user=user />
            <main class="main-content">
                <h1>"Archive"</h1>
                <ul class="completed-list">
                    <For each=move || store_archived(&store) key=|item| item.id children=row />
                </ul>
                <Show when=move || store_archived(&store).is_empty()>
                    <p class="empty-list">"Nothing archived"</p>
                </Show>
            </main>
        </div>
    }
}
