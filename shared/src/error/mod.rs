//! Unified error system for Barkeep
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Menu errors
//! - 7xxx: Profile errors
//! - 8xxx: File errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::ProfileIdMismatch);
//! assert_eq!(err.code.code(), 7003);
//!
//! let err = AppError::with_message(ErrorCode::MenuItemIdConflict, "Menu Item ID conflict")
//!     .with_detail("menu_item_id", "m2");
//! assert!(err.details.is_some());
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
