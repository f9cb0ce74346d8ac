//! Input validation helpers
//!
//! Centralized text length constants and validation functions for values
//! typed at the desk (customer names, menu entries, image URLs).

use shared::error::AppError;
use url::Url;

// ── Text length limits ──────────────────────────────────────────────

/// Free-text input: customer names, menu item names, emote lines
pub const MAX_INPUT_LENGTH: usize = 1000;

/// Image extensions accepted for profile and menu item images
const IMAGE_EXTENSIONS: [&str; 7] = ["jpeg", "jpg", "png", "gif", "webp", "bmp", "svg"];

// ── Helpers ─────────────────────────────────────────────────────────

/// Trim, cap at [`MAX_INPUT_LENGTH`] chars, strip `<` and `>`
pub fn sanitize_input(input: &str) -> String {
    input
        .trim()
        .chars()
        .take(MAX_INPUT_LENGTH)
        .filter(|c| *c != '<' && *c != '>')
        .collect()
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Validate an image URL
///
/// Empty is allowed (no image). Otherwise: parses as an absolute URL,
/// http(s), has a host, and the path ends in a known image extension.
pub fn validate_image_url(url: &str) -> Result<(), AppError> {
    let url = url.trim();
    if url.is_empty() {
        return Ok(());
    }
    if url.len() > MAX_INPUT_LENGTH {
        return Err(AppError::validation("URL too long"));
    }

    let parsed = Url::parse(url).map_err(|_| AppError::validation("Invalid URL format"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::validation("Invalid URL protocol"));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(AppError::validation("Invalid URL format"));
    }

    let has_image_ext = parsed
        .path()
        .rsplit_once('.')
        .is_some_and(|(_, ext)| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        });
    if !has_image_ext {
        return Err(AppError::validation(
            "URL must end with a valid image extension",
        ));
    }
    Ok(())
}
