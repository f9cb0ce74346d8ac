//! Orders Module
//!
//! - **manager**: OrdersManager owning active/archived orders and the emote engine
//! - **draft**: the order form being filled in before submit
//! - **money**: Decimal-backed totals
//!
//! # Data Flow
//!
//! ```text
//! OrderDraft ──submit──▶ OrdersManager::create_order ──▶ active
//!                                  │
//!                     copy_emote ──┴──▶ EmoteEngine ──▶ Clipboard
//! ```

pub mod draft;
pub mod manager;
pub mod money;

// Re-exports
pub use draft::OrderDraft;
pub use manager::{DEFAULT_CUSTOMER_LABEL, OrdersManager};
