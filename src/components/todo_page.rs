//! Todo Page
//!
//! Active items grouped by priority, with the add form on top.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{NewTodoForm, TierBoardView, UserHeader};
use crate::context::{ListContext, PageContext};
use crate::logging::console_error;
use crate::reorder::ReorderableListController;
use crate::store::{store_set_board, TodoState};

#[component]
pub fn TodoPage(page: PageContext) -> impl IntoView {
    let PageContext { api, user } = page;

    let store = Store::new(TodoState::default());
    provide_context(store);

    let ctx = ListContext::new(signal(0u32));
    provide_context(ctx);

    let controller = ReorderableListController::new(api, api.config().send_priority_on_reorder);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match controller.load().await {
                Ok(board) => store_set_board(&store, board),
                Err(e) => console_error(&format!("[TODO] Load failed: {}", e)),
            }
        });
    });

    view! {
        <div class="app-layout">
            <UserHeader api=api user=user.clone() />
            <main class="main-content">
                <h1>"Todos"</h1>
                <NewTodoForm controller=controller />
                <TierBoardView controller=controller viewer=user />
            </main>
        </div>
    }
}
