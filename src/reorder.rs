//! Reorderable List Controller
//!
//! Todo list operations behind the `TodoBackend` seam: loading the tier
//! projection, add/toggle/delete round trips and the drop commit.
//! The controller never owns persisted state; callers keep the `TierBoard`
//! and pass it in.

use async_trait::async_trait;
use leptos_dragdrop::DropCommit;

use crate::api::{CreateTodoArgs, UpdateOrderArgs};
use crate::error::ApiResult;
use crate::logging::{console_error, console_log};
use crate::models::{Item, Priority};
use crate::tiers::TierBoard;

/// Server operations the todo pages need
#[async_trait(?Send)]
pub trait TodoBackend {
    async fn list_todos(&self) -> ApiResult<Vec<Item>>;
    async fn list_completed_todos(&self) -> ApiResult<Vec<Item>>;
    async fn create_todo(&self, args: &CreateTodoArgs<'_>) -> ApiResult<Item>;
    async fn toggle_todo(&self, id: u32) -> ApiResult<()>;
    async fn mark_todo_deleted(&self, id: u32) -> ApiResult<()>;
    async fn delete_todo(&self, id: u32) -> ApiResult<()>;
    async fn update_todo_order(&self, args: &UpdateOrderArgs) -> ApiResult<()>;
}

/// Trimmed title, `None` when blank
pub fn prepare_title(raw: &str) -> Option<&str> {
    Some(raw.trim()).filter(|s| !s.is_empty())
}

#[derive(Clone, Copy)]
pub struct ReorderableListController<B> {
    backend: B,
    /// Include the target tier in reorder requests
    send_priority: bool,
}

impl<B: TodoBackend> ReorderableListController<B> {
    pub fn new(backend: B, send_priority: bool) -> Self {
        Self { backend, send_priority }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetch active items and group them into tiers
    pub async fn load(&self) -> ApiResult<TierBoard> {
        let items = self.backend.list_todos().await?;
        console_log(&format!("[TODO] Loaded {} items", items.len()));
        Ok(TierBoard::from_items(items))
    }

    /// Fetch soft-deleted items for the archive view
    pub async fn load_archive(&self) -> ApiResult<Vec<Item>> {
        self.backend.list_completed_todos().await
    }

    /// Create an item; blank titles issue no request and yield `None`
    pub async fn add(&self, raw_title: &str, priority: Priority) -> ApiResult<Option<Item>> {
        let Some(title) = prepare_title(raw_title) else {
            return Ok(None);
        };
        let item = self.backend.create_todo(&CreateTodoArgs { title, priority }).await?;
        Ok(Some(item))
    }

    /// Toggle completion. Returns the checkbox state to display:
    /// flipped on success, `previous` on any failure.
    pub async fn toggle(&self, id: u32, previous: bool) -> bool {
        match self.backend.toggle_todo(id).await {
            Ok(()) => !previous,
            Err(e) => {
                console_error(&format!("[TODO] Toggle {} failed: {}", id, e));
                previous
            }
        }
    }

    pub async fn soft_delete(&self, id: u32) -> ApiResult<()> {
        self.backend.mark_todo_deleted(id).await
    }

    pub async fn hard_delete(&self, id: u32) -> ApiResult<()> {
        self.backend.delete_todo(id).await
    }

    /// Resolve a commit into the reorder request.
    ///
    /// The new order is the item's index among the items now in the target
    /// zone. An item that never hovered the zone is appended to it first.
    pub fn prepare_drop(&self, board: &mut TierBoard, commit: DropCommit<Priority>) -> Option<UpdateOrderArgs> {
        if board.position(commit.item_id).map(|(tier, _)| tier) != Some(commit.zone) {
            board.relocate(commit.item_id, commit.zone, None);
        }
        match board.position(commit.item_id) {
            Some((tier, idx)) if tier == commit.zone => Some(UpdateOrderArgs {
                todo_id: commit.item_id,
                order: idx as u32,
                priority: self.send_priority.then_some(tier),
            }),
            _ => {
                console_error(&format!("[DND] Dropped unknown item {}", commit.item_id));
                None
            }
        }
    }

    pub async fn persist_order(&self, args: &UpdateOrderArgs) -> ApiResult<()> {
        console_log(&format!("[DND] Persisting item {} at order {}", args.todo_id, args.order));
        self.backend.update_todo_order(args).await
    }
}
