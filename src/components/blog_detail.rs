//! Blog Detail Page
//!
//! One post with its comments. Comment authors and the post author can
//! remove comments.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::blog::{can_delete_comment, can_manage_post, prepare_comment};
use crate::browser::{alert, format_timestamp, redirect};
use crate::components::{DeleteConfirmButton, UserHeader};
use crate::context::PageContext;
use crate::logging::{console_error, console_log};
use crate::models::{owner_label, Blog, Comment};
use crate::route::{Route, BLOGS_PATH};

#[component]
pub fn BlogDetailPage(page: PageContext, blog_id: u32) -> impl IntoView {
    let PageContext { api, user } = page;
    let viewer = StoredValue::new(user.clone());

    let (blog, set_blog) = signal::<Option<Blog>>(None);
    let (comment_text, set_comment_text) = signal(String::new());

    spawn_local(async move {
        match api.get_blog(blog_id).await {
            Ok(loaded) => {
                console_log(&format!("[BLOG] Loaded post {} with {} comments", blog_id, loaded.comments.len()));
                set_blog.set(Some(loaded));
            }
            Err(e) => {
                console_error(&format!("[BLOG] Load {} failed: {}", blog_id, e));
                redirect(BLOGS_PATH);
            }
        }
    });

    let on_comment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let raw = comment_text.get_untracked();
        let Some(content) = prepare_comment(&raw).map(str::to_string) else {
            return;
        };
        spawn_local(async move {
            match api.add_comment(blog_id, &content).await {
                Ok(comment) => {
                    set_blog.update(|b| {
                        if let Some(b) = b {
                            b.comments.push(comment);
                        }
                    });
                    set_comment_text.set(String::new());
                }
                Err(e) => console_error(&format!("[BLOG] Comment on {} failed: {}", blog_id, e)),
            }
        });
    };

    let delete_comment = move |comment_id: u32| {
        spawn_local(async move {
            match api.delete_comment(blog_id, comment_id).await {
                Ok(()) => set_blog.update(|b| {
                    if let Some(b) = b {
                        b.comments.retain(|c| c.id != comment_id);
                    }
                }),
                Err(e) => {
                    console_error(&format!("[BLOG] Delete comment {} failed: {}", comment_id, e));
                    alert(e.server_message().unwrap_or("Failed to delete comment"));
                }
            }
        });
    };

    let comment_row = move |comment: Comment| {
        let id = comment.id;
        let deletable = blog.with_untracked(|b| {
            b.as_ref()
                .map(|b| viewer.with_value(|v| can_delete_comment(v, b, &comment)))
                .unwrap_or(false)
        });
        view! {
            <li class="comment-item">
                <div class="comment-meta">
                    <span class="comment-author">{owner_label(&comment.username, comment.user_id)}</span>
                    <span class="comment-date">{format_timestamp(&comment.created_at)}</span>
                    {deletable.then(|| view! {
                        <DeleteConfirmButton
                            button_class="delete-comment-btn"
                            on_confirm=Callback::new(move |_: ()| delete_comment(id))
                        />
                    })}
                </div>
                <p class="comment-content">{comment.content}</p>
            </li>
        }
    };

    view! {
        <div class="app-layout">
            <UserHeader api=api user=user />
            <main class="main-content">
                <a class="back-link" href=BLOGS_PATH>"← All posts"</a>
                {move || blog.get().map(|b| {
                    let manageable = viewer.with_value(|v| can_manage_post(v, &b));
                    view! {
                        <article class="blog-detail">
                            <h1 class="blog-title">
                                {b.title.clone()}
                                {b.is_private.then(|| view! { <span class="private-badge">"Private"</span> })}
                            </h1>
                            <div class="blog-meta">
                                <span class="blog-author">{owner_label(&b.username, b.user_id)}</span>
                                <span class="blog-date">{format_timestamp(&b.created_at)}</span>
                                {manageable.then(|| view! {
                                    <a class="edit-btn" href=Route::BlogEdit(b.id).path()>"Edit"</a>
                                })}
                            </div>
                            <div class="blog-content">{b.content.clone()}</div>
                        </article>
                    }
                })}
                <section class="comments">
                    <h2>"Comments"</h2>
                    <ul class="comment-list">
                        <For
                            each=move || blog.with(|b| b.as_ref().map(|b| b.comments.clone()).unwrap_or_default())
                            key=|comment| comment.id
                            children=comment_row
                        />
                    </ul>
                    <form class="comment-form" on:submit=on_comment>
                        <textarea
                            placeholder="Write a comment..."
                            prop:value=move || comment_text.get()
                            on:input=move |ev| set_comment_text.set(event_target_value(&ev))
                        ></textarea>
                        <button type="submit">"Comment"</button>
                    </form>
                </section>
            </main>
        </div>
    }
}
