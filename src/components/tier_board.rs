//! Tier Board Component
//!
//! Todo items in three priority drop zones, high to low.
//! Uses leptos-dragdrop; while dragging, the hovered zone relocates the item
//! live and a commit persists the resulting index.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::*;

use crate::api::HttpApi;
use crate::components::TodoRow;
use crate::context::ListContext;
use crate::logging::{console_error, console_log};
use crate::models::{CurrentUser, Priority};
use crate::reorder::ReorderableListController;
use crate::store::{
    store_apply_move, store_board_is_empty, store_tier, store_tier_visible, store_update_board, use_todo_store,
};

#[component]
pub fn TierBoardView(controller: ReorderableListController<HttpApi>, viewer: CurrentUser) -> impl IntoView {
    let store = use_todo_store();
    let ctx = expect_context::<ListContext>();
    let viewer = StoredValue::new(viewer);

    let session = create_drag_session::<Priority>();
    bind_stale_session_reset(session);

    let on_move = Callback::new(move |mv: DragMove<Priority>| {
        store_apply_move(&store, mv);
    });

    let on_drop = Callback::new(move |commit: DropCommit<Priority>| {
        let Some(args) = store_update_board(&store, |board| controller.prepare_drop(board, commit)) else {
            return;
        };
        console_log(&format!("[DND] Drop: item={}, tier={:?}, order={}", commit.item_id, commit.zone, args.order));
        spawn_local(async move {
            match controller.persist_order(&args).await {
                // Reload for the canonical order
                Ok(()) => ctx.reload(),
                Err(e) => console_error(&format!("[DND] Reorder of {} failed: {}", args.todo_id, e)),
            }
        });
    });

    view! {
        <div class="tier-board">
            {Priority::DISPLAY_ORDER.iter().map(|priority| view! {
                <TierSection
                    priority=*priority
                    controller=controller
                    viewer=viewer
                    session=session
                    on_move=on_move
                    on_drop=on_drop
                />
            }).collect_view()}
            <Show when=move || store_board_is_empty(&store) && !session.is_dragging()>
                <p class="empty-list">"Nothing to do"</p>
            </Show>
        </div>
    }
}

/// Drop zone for one tier; omitted when empty unless a drag is in progress
#[component]
fn TierSection(
    priority: Priority,
    controller: ReorderableListController<HttpApi>,
    viewer: StoredValue<CurrentUser>,
    session: DragSession<Priority>,
    on_move: Callback<DragMove<Priority>>,
    on_drop: Callback<DropCommit<Priority>>,
) -> impl IntoView {
    let store = use_todo_store();

    let visible = move || store_tier_visible(&store, priority, session.is_dragging());
    let zone_class = move || {
        let mut c = String::from(priority.css_class());
        if session.is_over(priority) { c.push_str(" drag-over"); }
        c
    };

    view! {
        <Show when=visible>
            <section
                class=zone_class
                data-priority=priority.index().to_string()
                on:dragover=make_on_zone_dragover(session, priority, on_move)
                on:dragleave=make_on_zone_dragleave(session, priority)
                on:drop=make_on_zone_drop(session, priority, on_drop)
            >
                <h2 class="tier-title">{priority.label()}</h2>
                <ul class="tier-items">
                    <For
                        each=move || store_tier(&store, priority)
                        key=|item| item.id
                        children=move |item| view! {
                            <TodoRow item=item viewer=viewer controller=controller session=session />
                        }
                    />
                </ul>
            </section>
        </Show>
    }
}
