//! Blog List Page
//!
//! All posts visible to the viewer, optionally only their own.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::blog::{can_manage_post, preview};
use crate::browser::format_timestamp;
use crate::components::{DeleteConfirmButton, UserHeader};
use crate::context::PageContext;
use crate::logging::{console_error, console_log};
use crate::models::{owner_label, Blog, CurrentUser};
use crate::route::Route;

#[component]
pub fn BlogListPage(page: PageContext) -> impl IntoView {
    let PageContext { api, user } = page;
    let user_id = user.id;
    let viewer = StoredValue::new(user.clone());

    let (blogs, set_blogs) = signal(Vec::<Blog>::new());
    let (mine_only, set_mine_only) = signal(false);

    Effect::new(move |_| {
        let mine = mine_only.get();
        spawn_local(async move {
            let loaded = if mine { api.list_user_blogs(user_id).await } else { api.list_blogs().await };
            match loaded {
                Ok(list) => {
                    console_log(&format!("[BLOG] Loaded {} posts (mine_only={})", list.len(), mine));
                    set_blogs.set(list);
                }
                Err(e) => console_error(&format!("[BLOG] Load failed: {}", e)),
            }
        });
    });

    let on_deleted = Callback::new(move |id: u32| {
        set_blogs.update(|list| list.retain(|b| b.id != id));
    });

    view! {
        <div class="app-layout">
            <UserHeader api=api user=user />
            <main class="main-content">
                <div class="blog-toolbar">
                    <h1>"Blog"</h1>
                    <label class="mine-filter">
                        <input
                            type="checkbox"
                            prop:checked=move || mine_only.get()
                            on:change=move |ev| set_mine_only.set(event_target_checked(&ev))
                        />
                        "Mine only"
                    </label>
                    <a class="new-post-btn" href=Route::BlogNew.path()>"New post"</a>
                </div>
                <ul class="blog-list">
                    <For
                        each=move || blogs.get()
                        key=|blog| (blog.id, blog.updated_at.clone())
                        children=move |blog| view! {
                            <BlogCard blog=blog api=api viewer=viewer on_deleted=on_deleted />
                        }
                    />
                </ul>
                <Show when=move || blogs.with(|list| list.is_empty())>
                    <p class="empty-list">"No posts yet"</p>
                </Show>
            </main>
        </div>
    }
}

#[component]
fn BlogCard(
    blog: Blog,
    api: HttpApi,
    viewer: StoredValue<CurrentUser>,
    on_deleted: Callback<u32>,
) -> impl IntoView {
    let id = blog.id;
    let manageable = viewer.with_value(|v| can_manage_post(v, &blog));
    let author = owner_label(&blog.username, blog.user_id);

    let on_delete = Callback::new(move |_: ()| {
        spawn_local(async move {
            match api.delete_blog(id).await {
                Ok(()) => on_deleted.run(id),
                Err(e) => console_error(&format!("[BLOG] Delete {} failed: {}", id, e)),
            }
        });
    });

    view! {
        <li class="blog-item" data-id=id.to_string()>
            <h2 class="blog-title">
                {blog.title.clone()}
                {blog.is_private.then(|| view! { <span class="private-badge">"Private"</span> })}
            </h2>
            <div class="blog-meta">
                <span class="blog-author">{author}</span>
                <span class="blog-date">{format_timestamp(&blog.created_at)}</span>
            </div>
            <p class="blog-content-preview">{preview(&blog.content)}</p>
            <div class="blog-actions">
                <a class="view-btn" href=Route::BlogDetail(id).path()>"View"</a>
                {manageable.then(|| view! {
                    <a class="edit-btn" href=Route::BlogEdit(id).path()>"Edit"</a>
                    <DeleteConfirmButton button_class="delete-btn" label="Delete" on_confirm=on_delete />
                })}
            </div>
        </li>
    }
}
