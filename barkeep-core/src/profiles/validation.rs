//! Structural checks for imported profile documents
//!
//! Checks run in a fixed order and the first failure wins:
//! file (size, extension) → encoding → JSON → profile fields → custom theme.

use regex::Regex;
use serde_json::{Map, Value};
use shared::models::ThemePalette;
use std::sync::LazyLock;

use super::import::ImportError;

/// Largest accepted import file (1 MiB)
pub const MAX_IMPORT_BYTES: u64 = 1024 * 1024;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color pattern is valid"));

/// File name and size checks, done before any content is read
pub fn validate_file(file_name: &str, size: u64) -> Result<(), ImportError> {
    if size > MAX_IMPORT_BYTES {
        return Err(ImportError::FileTooLarge { size });
    }
    let is_json = file_name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return Err(ImportError::InvalidExtension);
    }
    Ok(())
}

/// Decode file content as UTF-8 text
pub fn decode_text(bytes: &[u8]) -> Result<&str, ImportError> {
    if bytes.is_empty() {
        return Err(ImportError::EmptyFile);
    }
    if bytes.len() as u64 > MAX_IMPORT_BYTES {
        return Err(ImportError::FileTooLarge {
            size: bytes.len() as u64,
        });
    }
    std::str::from_utf8(bytes).map_err(|_| ImportError::InvalidEncoding)
}

/// Parse text into a JSON object
pub fn parse_json_object(text: &str) -> Result<Map<String, Value>, ImportError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ImportError::InvalidStructure),
        Err(_) => Err(ImportError::InvalidJson),
    }
}

/// Required profile fields and the optional custom theme
pub fn validate_profile(doc: &Map<String, Value>) -> Result<(), ImportError> {
    if !is_non_empty_str(doc.get("id")) {
        return Err(ImportError::InvalidProfile("Profile must have a valid ID".into()));
    }
    if !is_non_empty_str(doc.get("name")) {
        return Err(ImportError::InvalidProfile("Profile must have a valid name".into()));
    }
    if !is_non_empty_str(doc.get("image")) {
        return Err(ImportError::InvalidProfile(
            "Profile must have a valid image URL".into(),
        ));
    }
    if !doc.get("menu").is_some_and(Value::is_array) {
        return Err(ImportError::InvalidProfile(
            "Profile must have a valid menu array".into(),
        ));
    }

    match doc.get("customTheme") {
        None | Some(Value::Null) => Ok(()),
        Some(theme) => validate_custom_theme(theme),
    }
}

fn validate_custom_theme(theme: &Value) -> Result<(), ImportError> {
    let Some(theme) = theme.as_object() else {
        return Err(ImportError::InvalidTheme("Custom theme must be an object".into()));
    };
    let present = |key: &str| theme.get(key).is_some_and(is_truthy);
    if !present("light") || !present("dark") {
        return Err(ImportError::InvalidTheme(
            "Custom theme must contain both light and dark theme objects".into(),
        ));
    }

    for mode in ["light", "dark"] {
        let Some(palette) = theme.get(mode).and_then(Value::as_object) else {
            return Err(ImportError::InvalidTheme(format!("{mode} theme must be an object")));
        };
        for key in ThemePalette::KEYS {
            let Some(color) = palette.get(key).and_then(Value::as_str).filter(|c| !c.is_empty())
            else {
                return Err(ImportError::InvalidTheme(format!(
                    "Missing or invalid {key} in {mode} theme"
                )));
            };
            if !HEX_COLOR.is_match(color) {
                return Err(ImportError::InvalidTheme(format!(
                    "Invalid hex color format for {key} in {mode} theme"
                )));
            }
        }
    }
    Ok(())
}

fn is_non_empty_str(value: Option<&Value>) -> bool {
    value.and_then(Value::as_str).is_some_and(|s| !s.is_empty())
}

/// JSON truthiness: everything except null, false, 0, "" is present
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
