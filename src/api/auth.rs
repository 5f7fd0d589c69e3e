//! Auth Endpoints
//!
//! Current user, login, register and logout.

use async_trait::async_trait;

use super::HttpApi;
use crate::auth::Credentials;
use crate::error::ApiResult;
use crate::models::CurrentUser;
use crate::session::SessionBackend;

#[async_trait(?Send)]
impl SessionBackend for HttpApi {
    async fn current_user(&self) -> ApiResult<CurrentUser> {
        self.get("/api/current-user").await
    }
}

impl HttpApi {
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<()> {
        self.post_status("/login", credentials).await
    }

    pub async fn register(&self, credentials: &Credentials) -> ApiResult<()> {
        self.post_status("/register", credentials).await
    }

    pub async fn logout(&self) -> ApiResult<()> {
        self.call("POST", "/logout").await
    }
}
