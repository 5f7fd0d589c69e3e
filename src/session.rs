//! Session Bootstrap
//!
//! Every authenticated page starts by asking who is logged in. Without a
//! valid answer the page goes to the login screen and loads nothing else.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::logging::console_log;
use crate::models::CurrentUser;

#[async_trait(?Send)]
pub trait SessionBackend {
    async fn current_user(&self) -> ApiResult<CurrentUser>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Ready(CurrentUser),
    RedirectToLogin,
}

pub async fn bootstrap<B: SessionBackend>(backend: &B) -> SessionOutcome {
    match backend.current_user().await {
        Ok(user) => SessionOutcome::Ready(user),
        Err(e) => {
            console_log(&format!("[SESSION] No session ({}), redirecting to login", e));
            SessionOutcome::RedirectToLogin
        }
    }
}
