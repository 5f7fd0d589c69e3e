//! Todo Row Component
//!
//! One draggable item: checkbox, title, owner badge, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart, DragSession};

use crate::api::HttpApi;
use crate::logging::console_error;
use crate::models::{CurrentUser, Item, Priority};
use crate::reorder::ReorderableListController;
use crate::store::{store_remove_item, store_set_completed, use_todo_store};

#[component]
pub fn TodoRow(
    item: Item,
    viewer: StoredValue<CurrentUser>,
    controller: ReorderableListController<HttpApi>,
    session: DragSession<Priority>,
) -> impl IntoView {
    let store = use_todo_store();

    let id = item.id;
    let (checked, set_checked) = signal(item.completed);
    let badge = viewer.with_value(|v| item.owner_badge(v));
    let foreign = badge.is_some();

    let on_toggle = move |ev: web_sys::Event| {
        // The browser already flipped the box
        let now = event_target_checked(&ev);
        set_checked.set(now);
        spawn_local(async move {
            let shown = controller.toggle(id, !now).await;
            set_checked.set(shown);
            store_set_completed(&store, id, shown);
        });
    };

    let on_delete = move |_| {
        spawn_local(async move {
            match controller.soft_delete(id).await {
                Ok(()) => store_remove_item(&store, id),
                Err(e) => console_error(&format!("[TODO] Delete {} failed: {}", id, e)),
            }
        });
    };

    let row_class = move || {
        let mut c = String::from("todo-item");
        if checked.get() { c.push_str(" completed"); }
        if foreign { c.push_str(" foreign"); }
        if session.is_dragging_item(id) { c.push_str(" dragging"); }
        c
    };

    view! {
        <li
            class=row_class
            draggable="true"
            data-dnd-id=id.to_string()
            on:dragstart=make_on_dragstart(session, id)
            on:dragend=make_on_dragend(session)
        >
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=move || checked.get()
                on:change=on_toggle
            />
            <span class="todo-title">{item.title}</span>
            {badge.map(|name| view! { <span class="todo-user">{name}</span> })}
            <button class="delete-btn" on:click=on_delete>"×"</button>
        </li>
    }
}
