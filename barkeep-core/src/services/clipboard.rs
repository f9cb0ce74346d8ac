//! Clipboard capability
//!
//! Emote text leaves the desk through [`Clipboard`]. The desktop build shells
//! out to the platform clipboard tool; tests and headless runs use
//! [`MemoryClipboard`].

use std::io::Write;
use std::process::{Command, Stdio};
use thiserror::Error;

use shared::error::{AppError, ErrorCode};

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("No clipboard tool available")]
    Unavailable,

    #[error("Clipboard tool failed: {0}")]
    Failed(String),
}

impl From<ClipboardError> for AppError {
    fn from(err: ClipboardError) -> Self {
        AppError::with_message(ErrorCode::ClipboardUnavailable, err.to_string())
    }
}

/// "Copy text" capability
pub trait Clipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Keeps everything copied in memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    history: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clipboard content
    pub fn last(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Clipboard for MemoryClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.history.push(text.to_string());
        Ok(())
    }
}

/// Pipes text into the platform clipboard command
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    program: String,
    args: Vec<String>,
}

impl SystemClipboard {
    /// Explicit command, e.g. `xclip -selection clipboard`
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Pick the clipboard tool for the running environment
    pub fn detect() -> Option<Self> {
        if cfg!(target_os = "macos") {
            return Some(Self::new("pbcopy", vec![]));
        }
        if cfg!(target_os = "windows") {
            return Some(Self::new("clip", vec![]));
        }
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            return Some(Self::new("wl-copy", vec![]));
        }
        if std::env::var_os("DISPLAY").is_some() {
            return Some(Self::new(
                "xclip",
                vec!["-selection".to_string(), "clipboard".to_string()],
            ));
        }
        None
    }
}

impl Clipboard for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ClipboardError::Unavailable,
                _ => ClipboardError::Failed(e.to_string()),
            })?;

        if let Some(mut stdin) = child.stdin.take()
            && let Err(e) = stdin.write_all(text.as_bytes())
        {
            drop(stdin);
            // reap the child before reporting
            let _ = child.kill();
            let _ = child.wait();
            return Err(ClipboardError::Failed(e.to_string()));
        }

        let status = child
            .wait()
            .map_err(|e| ClipboardError::Failed(e.to_string()))?;
        if !status.success() {
            return Err(ClipboardError::Failed(format!(
                "{} exited with {}",
                self.program, status
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_keeps_history() {
        let mut clipboard = MemoryClipboard::new();
        assert!(clipboard.last().is_none());
        clipboard.copy_text("one").unwrap();
        clipboard.copy_text("two").unwrap();
        assert_eq!(clipboard.last(), Some("two"));
        assert_eq!(clipboard.history().len(), 2);
    }

    #[test]
    fn test_missing_tool_is_unavailable() {
        let mut clipboard = SystemClipboard::new("barkeep-no-such-clipboard-tool", vec![]);
        assert!(matches!(
            clipboard.copy_text("x"),
            Err(ClipboardError::Unavailable)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_tool_that_stops_reading_fails_cleanly() {
        // `true` exits without reading, so a large write hits a closed pipe
        let mut clipboard = SystemClipboard::new("true", vec![]);
        let text = "x".repeat(1024 * 1024);
        assert!(matches!(
            clipboard.copy_text(&text),
            Err(ClipboardError::Failed(_))
        ));
    }

    #[test]
    fn test_clipboard_error_code() {
        let err: AppError = ClipboardError::Unavailable.into();
        assert_eq!(err.code, ErrorCode::ClipboardUnavailable);
    }
}
