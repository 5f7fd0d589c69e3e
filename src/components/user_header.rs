//! User Header Component
//!
//! Navigation, current user and logout, shown on every signed-in page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::browser::redirect;
use crate::logging::console_error;
use crate::models::CurrentUser;
use crate::route::{Route, LOGIN_PATH};

#[component]
pub fn UserHeader(api: HttpApi, user: CurrentUser) -> impl IntoView {
    let on_logout = move |_| {
        spawn_local(async move {
            match api.logout().await {
                Ok(()) => redirect(LOGIN_PATH),
                Err(e) => console_error(&format!("[AUTH] Logout failed: {}", e)),
            }
        });
    };

    view! {
        <header class="user-header">
            <nav class="nav-links">
                <a href=Route::Todos.path()>"Todos"</a>
                <a href=Route::Completed.path()>"Archive"</a>
                <a href=Route::Blogs.path()>"Blog"</a>
            </nav>
            <div class="user-info">
                <span class="username">{user.username}</span>
                {user.is_admin.then(|| view! { <span class="admin-badge">"Admin"</span> })}
                <button class="logout-btn" on:click=on_logout>"Log out"</button>
            </div>
        </header>
    }
}
