//! MenuReorder - drag gesture to new menu order
//!
//! ```text
//! Idle ──begin_drag──▶ Dragging ──end_drag───▶ Idle   (move committed if candidate valid)
//!                         │
//!                         └──cancel_drag──▶ Idle     (candidate discarded)
//! ```
//!
//! The drop position is either resolved from row bounds
//! ([`MenuReorder::update_position`]) or supplied directly
//! ([`MenuReorder::set_target`]).

use shared::models::MenuItem;

/// Vertical extent of one rendered menu row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBounds {
    pub top: f64,
    pub bottom: f64,
}

impl RowBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Strictly inside; edges belong to neither row
    fn contains(&self, y: f64) -> bool {
        y > self.top && y < self.bottom
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        item_id: String,
        source_index: usize,
        candidate: Option<usize>,
    },
}

#[derive(Debug, Default)]
pub struct MenuReorder {
    state: DragState,
}

impl MenuReorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Current insertion candidate while dragging
    pub fn candidate(&self) -> Option<usize> {
        match &self.state {
            DragState::Dragging { candidate, .. } => *candidate,
            DragState::Idle => None,
        }
    }

    /// Start dragging the row at `source_index`
    ///
    /// Starting a new drag replaces any drag in progress.
    pub fn begin_drag(&mut self, item_id: impl Into<String>, source_index: usize) {
        self.state = DragState::Dragging {
            item_id: item_id.into(),
            source_index,
            candidate: None,
        };
    }

    /// Resolve the pointer against row bounds
    ///
    /// The last row containing `pointer_y` wins. A miss, or a hit on the
    /// source row, keeps the previous candidate.
    pub fn update_position(&mut self, pointer_y: f64, rows: &[RowBounds]) {
        let hit = rows.iter().rposition(|r| r.contains(pointer_y));
        if let Some(index) = hit {
            self.set_target(index);
        }
    }

    /// Explicit target index, same rules as a row hit
    pub fn set_target(&mut self, index: usize) {
        if let DragState::Dragging {
            source_index,
            candidate,
            ..
        } = &mut self.state
            && index != *source_index
        {
            *candidate = Some(index);
        }
    }

    /// Finish the drag
    ///
    /// Returns the reordered menu when a distinct, in-range candidate exists
    /// and the source row still holds the dragged item; `None` otherwise.
    /// Always returns to `Idle`.
    pub fn end_drag(&mut self, menu: &[MenuItem]) -> Option<Vec<MenuItem>> {
        let state = std::mem::take(&mut self.state);
        let DragState::Dragging {
            item_id,
            source_index,
            candidate: Some(target),
        } = state
        else {
            return None;
        };

        if target == source_index || source_index >= menu.len() || target >= menu.len() {
            return None;
        }
        if menu[source_index].id != item_id {
            tracing::warn!(
                item_id = %item_id,
                source_index,
                "Menu changed during drag, dropping move"
            );
            return None;
        }

        let mut reordered = menu.to_vec();
        move_item(&mut reordered, source_index, target);
        tracing::debug!(item_id = %item_id, from = source_index, to = target, "Menu item moved");
        Some(reordered)
    }

    /// Abandon the drag
    pub fn cancel_drag(&mut self) {
        self.state = DragState::Idle;
    }
}

/// Remove at `from`, then insert at `to` in the shortened sequence
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to.min(items.len()), item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::MultistepEmotes;

    fn menu(ids: &[&str]) -> Vec<MenuItem> {
        ids.iter()
            .map(|id| MenuItem {
                id: id.to_string(),
                name: id.to_uppercase(),
                item_type: "item".into(),
                available: true,
                price: 1.0,
                emotes: MultistepEmotes::default(),
                image: None,
            })
            .collect()
    }

    fn ids(menu: &[MenuItem]) -> Vec<&str> {
        menu.iter().map(|m| m.id.as_str()).collect()
    }

    fn rows(n: usize) -> Vec<RowBounds> {
        (0..n)
            .map(|i| RowBounds::new(i as f64 * 40.0, (i + 1) as f64 * 40.0))
            .collect()
    }

    #[test]
    fn test_move_down_is_single_move() {
        let menu = menu(&["a", "b", "c", "d"]);
        let mut drag = MenuReorder::new();
        drag.begin_drag("a", 0);
        drag.update_position(100.0, &rows(4));
        assert_eq!(drag.candidate(), Some(2));

        let reordered = drag.end_drag(&menu).unwrap();
        assert_eq!(ids(&reordered), vec!["b", "c", "a", "d"]);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_move_up() {
        let menu = menu(&["a", "b", "c", "d"]);
        let mut drag = MenuReorder::new();
        drag.begin_drag("d", 3);
        drag.set_target(1);
        assert_eq!(ids(&drag.end_drag(&menu).unwrap()), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_move_to_last_position() {
        let menu = menu(&["a", "b", "c"]);
        let mut drag = MenuReorder::new();
        drag.begin_drag("a", 0);
        drag.set_target(2);
        assert_eq!(ids(&drag.end_drag(&menu).unwrap()), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_same_index_leaves_menu_unchanged() {
        let menu = menu(&["a", "b", "c"]);
        let mut drag = MenuReorder::new();
        drag.begin_drag("b", 1);
        drag.update_position(60.0, &rows(3));
        assert_eq!(drag.candidate(), None);
        assert!(drag.end_drag(&menu).is_none());
        assert_eq!(drag.state(), &DragState::Idle);
    }

    #[test]
    fn test_miss_retains_previous_candidate() {
        let mut drag = MenuReorder::new();
        drag.begin_drag("a", 0);
        drag.update_position(90.0, &rows(3));
        assert_eq!(drag.candidate(), Some(2));
        drag.update_position(500.0, &rows(3));
        assert_eq!(drag.candidate(), Some(2));
        drag.update_position(80.0, &rows(3));
        assert_eq!(drag.candidate(), Some(2), "edge is not inside any row");
        drag.update_position(20.0, &rows(3));
        assert_eq!(drag.candidate(), Some(2), "source row keeps candidate");
    }

    #[test]
    fn test_overlapping_rows_last_match_wins() {
        let mut drag = MenuReorder::new();
        drag.begin_drag("a", 0);
        let rows = vec![
            RowBounds::new(0.0, 50.0),
            RowBounds::new(30.0, 70.0),
            RowBounds::new(40.0, 90.0),
        ];
        drag.update_position(45.0, &rows);
        assert_eq!(drag.candidate(), Some(2));
    }

    #[test]
    fn test_cancel_discards_candidate() {
        let menu = menu(&["a", "b"]);
        let mut drag = MenuReorder::new();
        drag.begin_drag("a", 0);
        drag.set_target(1);
        drag.cancel_drag();
        assert_eq!(drag.state(), &DragState::Idle);
        assert!(drag.end_drag(&menu).is_none());
    }

    #[test]
    fn test_out_of_range_candidate_is_ignored() {
        let menu = menu(&["a", "b"]);
        let mut drag = MenuReorder::new();
        drag.begin_drag("a", 0);
        drag.set_target(7);
        assert!(drag.end_drag(&menu).is_none());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_stale_source_is_ignored() {
        let menu = menu(&["a", "b", "c"]);
        let mut drag = MenuReorder::new();
        drag.begin_drag("z", 0);
        drag.set_target(2);
        assert!(drag.end_drag(&menu).is_none());
    }

    #[test]
    fn test_position_updates_ignored_when_idle() {
        let mut drag = MenuReorder::new();
        drag.update_position(10.0, &rows(3));
        drag.set_target(1);
        assert_eq!(drag.state(), &DragState::Idle);
    }
}
