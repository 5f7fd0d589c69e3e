//! Todo Endpoints
//!
//! Bindings for `/api/todos*`.

use async_trait::async_trait;
use serde::Serialize;

use super::HttpApi;
use crate::error::ApiResult;
use crate::models::{Item, Priority};
use crate::reorder::TodoBackend;

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTodoArgs<'a> {
    pub title: &'a str,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateOrderArgs {
    pub todo_id: u32,
    pub order: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

// ========================
// Commands
// ========================

#[async_trait(?Send)]
impl TodoBackend for HttpApi {
    async fn list_todos(&self) -> ApiResult<Vec<Item>> {
        let items: Option<Vec<Item>> = self.get("/api/todos").await?;
        Ok(items.unwrap_or_default())
    }

    async fn list_completed_todos(&self) -> ApiResult<Vec<Item>> {
        let items: Option<Vec<Item>> = self.get("/api/completed-todos").await?;
        Ok(items.unwrap_or_default())
    }

    async fn create_todo(&self, args: &CreateTodoArgs<'_>) -> ApiResult<Item> {
        self.post("/api/todos", args).await
    }

    async fn toggle_todo(&self, id: u32) -> ApiResult<()> {
        self.call("POST", &format!("/api/todos/toggle/{}", id)).await
    }

    async fn mark_todo_deleted(&self, id: u32) -> ApiResult<()> {
        self.call("DELETE", &format!("/api/todos/mark-deleted/{}", id)).await
    }

    async fn delete_todo(&self, id: u32) -> ApiResult<()> {
        self.call("DELETE", &format!("/api/todos/delete/{}", id)).await
    }

    async fn update_todo_order(&self, args: &UpdateOrderArgs) -> ApiResult<()> {
        self.post_status("/api/todos/update-order", args).await
    }
}
