//! Unified error codes for Barkeep
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Menu errors
//! - 7xxx: Profile errors
//! - 8xxx: File errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they serialize as plain
/// numbers in persisted documents and notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 6xxx: Menu ====================
    /// Menu item price is negative, non-finite or too large
    MenuItemInvalidPrice = 6002,
    /// Two menu items in one document share an id
    DuplicateMenuItemId = 6101,
    /// Menu item id is already used by another profile
    MenuItemIdConflict = 6102,

    // ==================== 7xxx: Profile ====================
    /// Profile not found
    ProfileNotFound = 7001,
    /// No profile is focused
    ProfileNotFocused = 7002,
    /// Imported profile id differs from the focused profile
    ProfileIdMismatch = 7003,
    /// Profile document is structurally invalid
    InvalidProfile = 7004,
    /// Custom theme is malformed
    InvalidTheme = 7101,

    // ==================== 8xxx: File ====================
    /// File exceeds the size limit
    FileTooLarge = 8001,
    /// File extension is not accepted
    InvalidFileExtension = 8002,
    /// File content is not valid UTF-8
    InvalidEncoding = 8003,
    /// File content is not valid JSON
    InvalidJson = 8004,
    /// No file content
    EmptyFile = 8005,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Profile storage read/write failed
    StorageError = 9002,
    /// Clipboard is not available
    ClipboardUnavailable = 9201,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Menu
            ErrorCode::MenuItemInvalidPrice => "Menu item price is invalid",
            ErrorCode::DuplicateMenuItemId => "Duplicate menu item id",
            ErrorCode::MenuItemIdConflict => "Menu item id conflicts with existing data",

            // Profile
            ErrorCode::ProfileNotFound => "Profile not found",
            ErrorCode::ProfileNotFocused => "No profile is open",
            ErrorCode::ProfileIdMismatch => "Profile ID does not match the current profile",
            ErrorCode::InvalidProfile => "Invalid profile structure",
            ErrorCode::InvalidTheme => "Invalid custom theme",

            // File
            ErrorCode::FileTooLarge => "File too large",
            ErrorCode::InvalidFileExtension => "Only JSON files are allowed",
            ErrorCode::InvalidEncoding => "File is not valid UTF-8",
            ErrorCode::InvalidJson => "Invalid JSON format",
            ErrorCode::EmptyFile => "Empty file provided",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::StorageError => "Profile storage error",
            ErrorCode::ClipboardUnavailable => "Clipboard is not available",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Menu
            6002 => Ok(ErrorCode::MenuItemInvalidPrice),
            6101 => Ok(ErrorCode::DuplicateMenuItemId),
            6102 => Ok(ErrorCode::MenuItemIdConflict),

            // Profile
            7001 => Ok(ErrorCode::ProfileNotFound),
            7002 => Ok(ErrorCode::ProfileNotFocused),
            7003 => Ok(ErrorCode::ProfileIdMismatch),
            7004 => Ok(ErrorCode::InvalidProfile),
            7101 => Ok(ErrorCode::InvalidTheme),

            // File
            8001 => Ok(ErrorCode::FileTooLarge),
            8002 => Ok(ErrorCode::InvalidFileExtension),
            8003 => Ok(ErrorCode::InvalidEncoding),
            8004 => Ok(ErrorCode::InvalidJson),
            8005 => Ok(ErrorCode::EmptyFile),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageError),
            9201 => Ok(ErrorCode::ClipboardUnavailable),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
