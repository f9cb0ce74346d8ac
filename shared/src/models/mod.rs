//! Data models
//!
//! Shared between the order desk engines and whatever front end drives them.
//! Serialized with camelCase keys, matching the persisted profile documents.

pub mod menu;
pub mod order;
pub mod profile;
pub mod theme;

// Re-exports
pub use menu::*;
pub use order::*;
pub use profile::*;
pub use theme::*;
