//! Tier Grouping
//!
//! Partition of todo items into the three priority tiers, plus the
//! in-place relocation used while an item is dragged between tiers.

use crate::models::{Item, Priority};

/// Items grouped by priority, each tier in render order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TierBoard {
    tiers: [Vec<Item>; 3],
}

impl TierBoard {
    /// Group items by priority; within a tier sort by `order` (stable)
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut board = Self::default();
        for item in items {
            board.tiers[item.priority.index()].push(item);
        }
        for tier in board.tiers.iter_mut() {
            tier.sort_by_key(|item| item.order);
        }
        board
    }

    pub fn tier(&self, priority: Priority) -> &[Item] {
        &self.tiers[priority.index()]
    }

    /// A tier's section is rendered when it has items, or while a drag is
    /// in progress so it can receive a drop
    pub fn is_visible(&self, priority: Priority, dragging: bool) -> bool {
        dragging || !self.tier(priority).is_empty()
    }

    pub fn len(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tier and zero-based index of an item
    pub fn position(&self, id: u32) -> Option<(Priority, usize)> {
        Priority::DISPLAY_ORDER.iter().find_map(|p| {
            self.tier(*p)
                .iter()
                .position(|item| item.id == id)
                .map(|idx| (*p, idx))
        })
    }

    /// Is `id` already in `tier` directly before `before` (or last when `None`)
    pub fn is_placed(&self, id: u32, tier: Priority, before: Option<u32>) -> bool {
        let items = self.tier(tier);
        let Some(idx) = items.iter().position(|item| item.id == id) else {
            return false;
        };
        match before {
            Some(anchor) => items.get(idx + 1).map(|next| next.id) == Some(anchor),
            None => idx + 1 == items.len(),
        }
    }

    /// Would `relocate` change anything
    pub fn needs_move(&self, id: u32, tier: Priority, before: Option<u32>) -> bool {
        before != Some(id) && self.position(id).is_some() && !self.is_placed(id, tier, before)
    }

    /// Move an item into `tier` ahead of `before`, or to the end.
    /// Returns false when the item is unknown or already in place.
    pub fn relocate(&mut self, id: u32, tier: Priority, before: Option<u32>) -> bool {
        if !self.needs_move(id, tier, before) {
            return false;
        }
        let Some(mut item) = self.remove(id) else {
            return false;
        };
        item.priority = tier;

        let items = &mut self.tiers[tier.index()];
        let at = before
            .and_then(|anchor| items.iter().position(|i| i.id == anchor))
            .unwrap_or(items.len());
        items.insert(at, item);
        true
    }

    /// Record a confirmed completion state; false when the item is unknown
    pub fn set_completed(&mut self, id: u32, completed: bool) -> bool {
        let Some((tier, idx)) = self.position(id) else {
            return false;
        };
        self.tiers[tier.index()][idx].completed = completed;
        true
    }

    /// Append a new item at the end of its tier
    pub fn push(&mut self, item: Item) {
        self.tiers[item.priority.index()].push(item);
    }

    pub fn remove(&mut self, id: u32) -> Option<Item> {
        let (tier, idx) = self.position(id)?;
        Some(self.tiers[tier.index()].remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, priority: Priority, order: u32) -> Item {
        Item {
            id,
            user_id: 1,
            username: String::new(),
            title: format!("Item {}", id),
            completed: false,
            deleted: false,
            priority,
            order,
        }
    }

    /// Ids of the rendered sections, high to low, while idle
    fn render_order(board: &TierBoard) -> Vec<u32> {
        Priority::DISPLAY_ORDER
            .iter()
            .filter(|p| board.is_visible(**p, false))
            .flat_map(|p| board.tier(*p).iter().map(|item| item.id))
            .collect()
    }

    fn visible(board: &TierBoard, dragging: bool) -> Vec<Priority> {
        Priority::DISPLAY_ORDER
            .iter()
            .copied()
            .filter(|p| board.is_visible(*p, dragging))
            .collect()
    }

    #[test]
    fn test_each_priority_is_its_own_tier_high_to_low() {
        let items = vec![
            make_item(1, Priority::High, 0),
            make_item(2, Priority::Low, 0),
            make_item(3, Priority::Medium, 0),
        ];
        let board = TierBoard::from_items(items);

        assert_eq!(visible(&board, false), vec![Priority::High, Priority::Medium, Priority::Low]);
        assert_eq!(render_order(&board), vec![1, 3, 2]);
    }

    #[test]
    fn test_sorted_by_order_within_tier() {
        let items = vec![
            make_item(1, Priority::Medium, 5),
            make_item(2, Priority::Medium, 1),
            make_item(3, Priority::Medium, 3),
        ];
        let board = TierBoard::from_items(items);
        assert_eq!(render_order(&board), vec![2, 3, 1]);
    }

    #[test]
    fn test_equal_orders_keep_fetch_order() {
        let items = vec![
            make_item(9, Priority::High, 0),
            make_item(4, Priority::High, 1),
            make_item(7, Priority::High, 0),
            make_item(2, Priority::High, 0),
        ];
        let board = TierBoard::from_items(items);
        assert_eq!(render_order(&board), vec![9, 7, 2, 4]);
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let items = vec![
            make_item(1, Priority::Low, 2),
            make_item(2, Priority::High, 2),
            make_item(3, Priority::Low, 1),
            make_item(4, Priority::Medium, 0),
            make_item(5, Priority::High, 2),
        ];
        let first = TierBoard::from_items(items.clone());
        let second = TierBoard::from_items(items);
        assert_eq!(first, second);
        assert_eq!(render_order(&first), vec![2, 5, 4, 3, 1]);
    }

    #[test]
    fn test_empty_tiers_are_omitted_while_idle() {
        let board = TierBoard::from_items(vec![make_item(1, Priority::Low, 0)]);
        assert_eq!(visible(&board, false), vec![Priority::Low]);
        assert!(visible(&TierBoard::default(), false).is_empty());
    }

    #[test]
    fn test_empty_tiers_shown_while_dragging() {
        let board = TierBoard::from_items(vec![make_item(1, Priority::Low, 0)]);
        assert_eq!(visible(&board, true), Priority::DISPLAY_ORDER.to_vec());
    }

    #[test]
    fn test_relocate_within_tier() {
        let mut board = TierBoard::from_items(vec![
            make_item(1, Priority::Medium, 0),
            make_item(2, Priority::Medium, 1),
            make_item(3, Priority::Medium, 2),
        ]);
        assert!(board.relocate(3, Priority::Medium, Some(1)));
        assert_eq!(render_order(&board), vec![3, 1, 2]);
        assert!(board.relocate(3, Priority::Medium, None));
        assert_eq!(render_order(&board), vec![1, 2, 3]);
    }

    #[test]
    fn test_relocate_across_tiers_updates_priority() {
        let mut board = TierBoard::from_items(vec![
            make_item(1, Priority::High, 0),
            make_item(2, Priority::Low, 0),
        ]);
        assert!(board.relocate(2, Priority::High, Some(1)));
        assert_eq!(board.position(2), Some((Priority::High, 0)));
        assert_eq!(board.tier(Priority::High)[0].priority, Priority::High);
        assert!(board.tier(Priority::Low).is_empty());
    }

    #[test]
    fn test_relocate_noop_when_already_placed() {
        let mut board = TierBoard::from_items(vec![
            make_item(1, Priority::Medium, 0),
            make_item(2, Priority::Medium, 1),
        ]);
        assert!(!board.relocate(1, Priority::Medium, Some(2)));
        assert!(!board.relocate(2, Priority::Medium, None));
        assert!(!board.relocate(2, Priority::Medium, Some(2)));
        assert!(!board.relocate(99, Priority::Medium, None));
        assert_eq!(render_order(&board), vec![1, 2]);
    }

    #[test]
    fn test_relocate_into_empty_tier() {
        let mut board = TierBoard::from_items(vec![make_item(1, Priority::Medium, 0)]);
        assert!(board.relocate(1, Priority::Low, None));
        assert_eq!(board.position(1), Some((Priority::Low, 0)));
    }

    #[test]
    fn test_needs_move_matches_relocate() {
        let mut board = TierBoard::from_items(vec![
            make_item(1, Priority::Medium, 0),
            make_item(2, Priority::Medium, 1),
        ]);
        assert!(!board.needs_move(1, Priority::Medium, Some(2)));
        assert!(!board.needs_move(7, Priority::High, None));
        assert!(board.needs_move(2, Priority::Medium, Some(1)));
        assert!(board.relocate(2, Priority::Medium, Some(1)));
        assert!(!board.needs_move(2, Priority::Medium, Some(1)));
    }

    #[test]
    fn test_completed_state_survives_cross_tier_move() {
        let mut board = TierBoard::from_items(vec![
            make_item(1, Priority::Low, 0),
            make_item(2, Priority::High, 0),
        ]);
        assert!(board.set_completed(1, true));
        assert!(board.relocate(1, Priority::High, None));
        assert_eq!(board.tier(Priority::High)[1].id, 1);
        assert!(board.tier(Priority::High)[1].completed);
        assert!(!board.set_completed(99, true));
    }

    #[test]
    fn test_push_and_remove() {
        let mut board = TierBoard::from_items(vec![make_item(1, Priority::High, 3)]);
        board.push(make_item(2, Priority::High, 0));
        // appended regardless of its order value
        assert_eq!(render_order(&board), vec![1, 2]);
        assert_eq!(board.remove(1).map(|i| i.id), Some(1));
        assert_eq!(board.remove(1), None);
        assert_eq!(board.len(), 1);
    }
}
