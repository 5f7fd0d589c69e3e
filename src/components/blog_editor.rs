//! Blog Editor Page
//!
//! Shared by new and edit; edit first loads the post and checks authorship.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::PostArgs;
use crate::blog::{can_manage_post, PostDraft};
use crate::browser::{alert, redirect};
use crate::components::UserHeader;
use crate::context::PageContext;
use crate::logging::{console_error, console_log};
use crate::route::{Route, BLOGS_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    New,
    Edit(u32),
}

impl EditorMode {
    fn heading(self) -> &'static str {
        match self {
            EditorMode::New => "New post",
            EditorMode::Edit(_) => "Edit post",
        }
    }

    fn failure_notice(self) -> &'static str {
        match self {
            EditorMode::New => "Failed to create post",
            EditorMode::Edit(_) => "Failed to update post",
        }
    }
}

#[component]
pub fn BlogEditorPage(page: PageContext, mode: EditorMode) -> impl IntoView {
    let PageContext { api, user } = page;
    let viewer = StoredValue::new(user.clone());

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (is_private, set_is_private) = signal(false);
    let (saving, set_saving) = signal(false);

    if let EditorMode::Edit(id) = mode {
        spawn_local(async move {
            match api.get_blog(id).await {
                Ok(blog) if viewer.with_value(|v| can_manage_post(v, &blog)) => {
                    set_title.set(blog.title);
                    set_content.set(blog.content);
                    set_is_private.set(blog.is_private);
                }
                Ok(_) => {
                    console_log(&format!("[BLOG] Post {} belongs to another user", id));
                    redirect(BLOGS_PATH);
                }
                Err(e) => {
                    console_error(&format!("[BLOG] Load {} for edit failed: {}", id, e));
                    redirect(BLOGS_PATH);
                }
            }
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let draft = match PostDraft::validate(&title.get_untracked(), &content.get_untracked(), is_private.get_untracked()) {
            Ok(draft) => draft,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            let args = PostArgs {
                title: &draft.title,
                content: &draft.content,
                is_private: draft.is_private,
            };
            let saved = match mode {
                EditorMode::New => api.create_blog(&args).await,
                EditorMode::Edit(id) => api.update_blog(id, &args).await,
            };
            match saved {
                Ok(blog) => {
                    console_log(&format!("[BLOG] Saved post {}", blog.id));
                    redirect(&Route::BlogDetail(blog.id).path());
                }
                Err(e) => {
                    console_error(&format!("[BLOG] Save failed: {}", e));
                    alert(mode.failure_notice());
                    set_saving.set(false);
                }
            }
        });
    };

    let cancel_href = match mode {
        EditorMode::New => BLOGS_PATH.to_string(),
        EditorMode::Edit(id) => Route::BlogDetail(id).path(),
    };

    view! {
        <div class="app-layout">
            <UserHeader api=api user=user />
            <main class="main-content">
                <h1>{mode.heading()}</h1>
                <form class="blog-form" on:submit=on_submit>
                    <input
                        type="text"
                        class="blog-title-input"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <textarea
                        class="blog-content-input"
                        placeholder="Write your post..."
                        prop:value=move || content.get()
                        on:input=move |ev| set_content.set(event_target_value(&ev))
                    ></textarea>
                    <label class="private-toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || is_private.get()
                            on:change=move |ev| set_is_private.set(event_target_checked(&ev))
                        />
                        "Private"
                    </label>
                    <div class="form-actions">
                        <button type="submit" disabled=move || saving.get()>"Save"</button>
                        <a class="cancel-btn" href=cancel_href>"Cancel"</a>
                    </div>
                </form>
            </main>
        </div>
    }
}
