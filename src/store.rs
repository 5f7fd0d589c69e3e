//! Todo Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is the
//! transient projection of server state; every reload replaces it.

use leptos::prelude::*;
use leptos_dragdrop::DragMove;
use reactive_stores::Store;

use crate::models::{Item, Priority};
use crate::tiers::TierBoard;

/// State of the todo pages
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Active items grouped into tiers
    pub board: TierBoard,
    /// Soft-deleted items (archive view)
    pub archived: Vec<Item>,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole tier projection
pub fn store_set_board(store: &TodoStore, board: TierBoard) {
    *store.board().write() = board;
}

/// Read a copy of one tier
pub fn store_tier(store: &TodoStore, priority: Priority) -> Vec<Item> {
    store.board().read().tier(priority).to_vec()
}

/// Append a newly created item to its tier
pub fn store_push_item(store: &TodoStore, item: Item) {
    store.board().write().push(item);
}

/// Remove an item from the board by ID
pub fn store_remove_item(store: &TodoStore, item_id: u32) {
    store.board().write().remove(item_id);
}

/// Live relocation; skips the write (and the re-render) when nothing moves
pub fn store_apply_move(store: &TodoStore, mv: DragMove<Priority>) -> bool {
    let moves = store
        .board()
        .with_untracked(|board| board.needs_move(mv.item_id, mv.zone, mv.before));
    moves && store.board().write().relocate(mv.item_id, mv.zone, mv.before)
}

/// Record a successful toggle so a re-created row shows it
pub fn store_set_completed(store: &TodoStore, item_id: u32, completed: bool) -> bool {
    let known = store.board().with_untracked(|board| board.position(item_id).is_some());
    known && store.board().write().set_completed(item_id, completed)
}

/// Replace the archive list
pub fn store_set_archived(store: &TodoStore, items: Vec<Item>) {
    *store.archived().write() = items;
}

/// Remove an item from the archive by ID
pub fn store_remove_archived(store: &TodoStore, item_id: u32) {
    store.archived().write().retain(|item| item.id != item_id);
}

/// Run a mutation against the board
pub fn store_update_board<R>(store: &TodoStore, f: impl FnOnce(&mut TierBoard) -> R) -> R {
    f(&mut store.board().write())
}

pub fn store_tier_visible(store: &TodoStore, priority: Priority, dragging: bool) -> bool {
    store.board().read().is_visible(priority, dragging)
}

pub fn store_board_is_empty(store: &TodoStore) -> bool {
    store.board().read().is_empty()
}

/// Read a copy of the archive list
pub fn store_archived(store: &TodoStore) -> Vec<Item> {
    store.archived().get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_item;

    fn store_with(items: Vec<Item>) -> TodoStore {
        Store::new(TodoState {
            board: TierBoard::from_items(items),
            archived: Vec::new(),
        })
    }

    #[test]
    fn test_apply_move_reports_no_change_when_in_place() {
        let store = store_with(vec![
            make_item(1, Priority::Medium, 0),
            make_item(2, Priority::Medium, 1),
        ]);
        // hovering the same slot again
        assert!(!store_apply_move(&store, DragMove { item_id: 1, zone: Priority::Medium, before: Some(2) }));
        assert!(!store_apply_move(&store, DragMove { item_id: 2, zone: Priority::Medium, before: Some(2) }));
        assert!(!store_apply_move(&store, DragMove { item_id: 9, zone: Priority::Low, before: None }));
        assert_eq!(store_tier(&store, Priority::Medium).iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_apply_move_relocates_across_tiers() {
        let store = store_with(vec![make_item(1, Priority::Medium, 0)]);
        assert!(store_apply_move(&store, DragMove { item_id: 1, zone: Priority::High, before: None }));
        assert!(store_tier(&store, Priority::Medium).is_empty());
        assert_eq!(store_tier(&store, Priority::High)[0].priority, Priority::High);
    }

    #[test]
    fn test_toggled_item_keeps_state_after_cross_tier_move() {
        let store = store_with(vec![make_item(1, Priority::Low, 0)]);
        assert!(store_set_completed(&store, 1, true));
        assert!(store_apply_move(&store, DragMove { item_id: 1, zone: Priority::High, before: None }));
        assert!(store_tier(&store, Priority::High)[0].completed);
        assert!(!store_set_completed(&store, 42, true));
    }

    #[test]
    fn test_empty_tier_visible_only_while_dragging() {
        let store = store_with(vec![make_item(1, Priority::Low, 0)]);
        assert!(!store_tier_visible(&store, Priority::High, false));
        assert!(store_tier_visible(&store, Priority::High, true));
        assert!(store_tier_visible(&store, Priority::Low, false));
    }
}
