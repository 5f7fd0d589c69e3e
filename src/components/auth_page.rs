//! Login / Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::auth::{AuthMode, Credentials};
use crate::browser::{alert, redirect};
use crate::logging::{console_error, console_log};
use crate::route::Route;

#[component]
pub fn AuthPage(api: HttpApi, mode: AuthMode) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let credentials = match Credentials::validate(&username.get_untracked(), &password.get_untracked(), mode) {
            Ok(c) => c,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };
        set_pending.set(true);
        spawn_local(async move {
            let result = match mode {
                AuthMode::Login => api.login(&credentials).await,
                AuthMode::Register => api.register(&credentials).await,
            };
            match result {
                Ok(()) => {
                    console_log(&format!("[AUTH] {} succeeded for {}", mode.title(), credentials.username));
                    if mode == AuthMode::Register {
                        alert("Registration successful, please log in");
                    }
                    redirect(mode.success_path());
                }
                Err(e) => {
                    console_error(&format!("[AUTH] {} failed: {}", mode.title(), e));
                    alert(&mode.failure_notice(&e));
                    set_pending.set(false);
                }
            }
        });
    };

    let password_autocomplete = match mode {
        AuthMode::Login => "current-password",
        AuthMode::Register => "new-password",
    };
    let (switch_text, switch_href, switch_label) = match mode {
        AuthMode::Login => ("No account yet?", Route::Register.path(), "Register"),
        AuthMode::Register => ("Already registered?", Route::Login.path(), "Log in"),
    };

    view! {
        <div class="auth-layout">
            <form class="auth-form" on:submit=on_submit>
                <h1>{mode.title()}</h1>
                <input
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete=password_autocomplete
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || pending.get()>{mode.title()}</button>
                <p class="auth-switch">
                    {switch_text}" "<a href=switch_href>{switch_label}</a>
                </p>
            </form>
        </div>
    }
}
