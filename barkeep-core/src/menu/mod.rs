//! Menu Module
//!
//! Drag-to-reorder state machine for menu rows.

pub mod reorder;

pub use reorder::{DragState, MenuReorder, RowBounds, move_item};
