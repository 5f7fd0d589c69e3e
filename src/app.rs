//! Todo & Blog Frontend App
//!
//! Resolves the page from the URL, gates signed-in pages behind the session
//! check and mounts the page once the user is known.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::auth::AuthMode;
use crate::browser::redirect;
use crate::components::{
    AuthPage, BlogDetailPage, BlogEditorPage, BlogListPage, CompletedPage, EditorMode, TodoPage,
};
use crate::config::ClientConfig;
use crate::context::PageContext;
use crate::logging::console_log;
use crate::models::CurrentUser;
use crate::route::{Route, HOME_PATH, LOGIN_PATH};
use crate::session::{bootstrap, SessionOutcome};

#[component]
pub fn App() -> impl IntoView {
    let api = HttpApi::new(ClientConfig::from_document());
    let route = Route::current();
    console_log(&format!("[APP] Route {:?}", route));

    if route.requires_session() {
        view! { <SessionGate api=api route=route /> }.into_any()
    } else {
        let mode = if route == Route::Register { AuthMode::Register } else { AuthMode::Login };
        view! { <AuthPage api=api mode=mode /> }.into_any()
    }
}

/// Nothing below this mounts (or fetches) until the current user is known
#[component]
fn SessionGate(api: HttpApi, route: Route) -> impl IntoView {
    let (user, set_user) = signal::<Option<CurrentUser>>(None);

    spawn_local(async move {
        match bootstrap(&api).await {
            SessionOutcome::Ready(current) => {
                console_log(&format!("[SESSION] Signed in as {}", current.username));
                set_user.set(Some(current));
            }
            SessionOutcome::RedirectToLogin => redirect(LOGIN_PATH),
        }
    });

    move || match user.get() {
        Some(user) => page_for(route, PageContext { api, user }),
        None => view! { <p class="loading">"Loading..."</p> }.into_any(),
    }
}

fn page_for(route: Route, page: PageContext) -> AnyView {
    match route {
        Route::Todos => view! { <TodoPage page=page /> }.into_any(),
        Route::Completed => view! { <CompletedPage page=page /> }.into_any(),
        Route::Blogs => view! { <BlogListPage page=page /> }.into_any(),
        Route::BlogNew => view! { <BlogEditorPage page=page mode=EditorMode::New /> }.into_any(),
        Route::BlogEdit(id) => view! { <BlogEditorPage page=page mode=EditorMode::Edit(id) /> }.into_any(),
        Route::BlogDetail(id) => view! { <BlogDetailPage page=page blog_id=id /> }.into_any(),
        Route::Login | Route::Register | Route::NotFound => view! {
            <div class="not-found">
                <h1>"Page not found"</h1>
                <a href=HOME_PATH>"Back to todos"</a>
            </div>
        }
        .into_any(),
    }
}
