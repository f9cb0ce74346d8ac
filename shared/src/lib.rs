//! Shared types for Barkeep
//!
//! Data models (menu, orders, profiles, themes), the unified error type and
//! small utilities used by every crate in the workspace.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
