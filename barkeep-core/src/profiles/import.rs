//! Profile import merger
//!
//! An imported document may only replace the focused profile, and only when
//! none of its menu item ids collide with each other or with any other stored
//! profile. The merge is all-or-nothing:
//!
//! ```text
//! file checks → decode → JSON → profile fields → theme → prices
//!     → id == focused → no duplicate ids → no cross-profile ids
//!     → replace profile + apply theme
//! ```
//!
//! Every failure leaves the book and the theme untouched.

use shared::error::{AppError, ErrorCode};
use shared::models::Profile;
use std::collections::HashSet;
use thiserror::Error;

use super::book::ProfileBook;
use super::validation;
use crate::orders::money;
use crate::services::ThemeState;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("File too large. Maximum size is 1MB")]
    FileTooLarge { size: u64 },

    #[error("Only JSON files are allowed")]
    InvalidExtension,

    #[error("File is empty")]
    EmptyFile,

    #[error("File is not valid UTF-8 text")]
    InvalidEncoding,

    #[error("Invalid JSON format")]
    InvalidJson,

    #[error("Invalid JSON structure")]
    InvalidStructure,

    #[error("{0}")]
    InvalidProfile(String),

    #[error("{0}")]
    InvalidTheme(String),

    #[error("Invalid price for menu item: {0}")]
    InvalidPrice(String),

    #[error("No profile is open")]
    NoFocusedProfile,

    #[error("Profile ID does not match the current profile")]
    ProfileIdMismatch,

    #[error("Duplicate Menu Item ID found in imported profile: {0}")]
    DuplicateMenuItemId(String),

    #[error("Menu Item ID conflict detected with existing data: {0}")]
    MenuItemIdConflict(String),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

impl ImportError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ImportError::FileTooLarge { .. } => ErrorCode::FileTooLarge,
            ImportError::InvalidExtension => ErrorCode::InvalidFileExtension,
            ImportError::EmptyFile => ErrorCode::EmptyFile,
            ImportError::InvalidEncoding => ErrorCode::InvalidEncoding,
            ImportError::InvalidJson | ImportError::InvalidStructure => ErrorCode::InvalidJson,
            ImportError::InvalidProfile(_) => ErrorCode::InvalidProfile,
            ImportError::InvalidTheme(_) => ErrorCode::InvalidTheme,
            ImportError::InvalidPrice(_) => ErrorCode::MenuItemInvalidPrice,
            ImportError::NoFocusedProfile => ErrorCode::ProfileNotFocused,
            ImportError::ProfileIdMismatch => ErrorCode::ProfileIdMismatch,
            ImportError::DuplicateMenuItemId(_) => ErrorCode::DuplicateMenuItemId,
            ImportError::MenuItemIdConflict(_) => ErrorCode::MenuItemIdConflict,
            ImportError::Io(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        let code = err.code();
        let app = AppError::with_message(code, err.to_string());
        match err {
            ImportError::DuplicateMenuItemId(id)
            | ImportError::MenuItemIdConflict(id)
            | ImportError::InvalidPrice(id) => {
                app.with_detail("menu_item_id", id)
            }
            ImportError::FileTooLarge { size } => app.with_detail("size", size),
            _ => app,
        }
    }
}

/// Decode and structurally validate an import document
pub fn parse_profile_document(bytes: &[u8]) -> Result<Profile, ImportError> {
    let text = validation::decode_text(bytes)?;
    let doc = validation::parse_json_object(text)?;
    validation::validate_profile(&doc)?;
    let profile: Profile = serde_json::from_value(serde_json::Value::Object(doc))
        .map_err(|e| ImportError::InvalidProfile(format!("Invalid profile structure: {e}")))?;
    if let Some(item) = profile
        .menu
        .iter()
        .find(|item| money::validate_price(item.price).is_err())
    {
        return Err(ImportError::InvalidPrice(item.id.clone()));
    }
    Ok(profile)
}

/// Merge an already-parsed profile into the book
///
/// Replaces the focused profile and applies the imported custom theme, or
/// resets to the default theme when it carries none.
pub fn merge_profile(
    book: &mut ProfileBook,
    theme: &mut ThemeState,
    imported: Profile,
) -> Result<(), ImportError> {
    let focused_id = book.focused_id().ok_or(ImportError::NoFocusedProfile)?;
    if imported.id != focused_id {
        return Err(ImportError::ProfileIdMismatch);
    }

    let mut seen = HashSet::new();
    if let Some(dup) = imported.menu_item_ids().find(|id| !seen.insert(*id)) {
        return Err(ImportError::DuplicateMenuItemId(dup.to_string()));
    }

    let others = book.menu_item_ids_except(&imported.id);
    if let Some(conflict) = imported.menu_item_ids().find(|id| others.contains(id)) {
        return Err(ImportError::MenuItemIdConflict(conflict.to_string()));
    }

    let custom_theme = imported.custom_theme.clone();
    let profile_id = imported.id.clone();
    if !book.replace_profile(imported) {
        // focus always points at a stored profile
        return Err(ImportError::NoFocusedProfile);
    }
    theme.apply_profile(custom_theme.as_ref());

    tracing::info!(
        profile_id = %profile_id,
        custom_theme = custom_theme.is_some(),
        "Profile imported"
    );
    Ok(())
}

/// Full import of a file already read into memory
///
/// Returns the id of the replaced profile.
pub fn import_profile(
    book: &mut ProfileBook,
    theme: &mut ThemeState,
    file_name: &str,
    bytes: &[u8],
) -> Result<String, ImportError> {
    let result = validation::validate_file(file_name, bytes.len() as u64)
        .and_then(|()| parse_profile_document(bytes))
        .and_then(|profile| {
            let id = profile.id.clone();
            merge_profile(book, theme, profile).map(|()| id)
        });

    if let Err(e) = &result {
        tracing::warn!(file = %file_name, error = %e, "Profile import rejected");
    }
    result
}
