//! Desk services - collaborators around the engines
//!
//! - **clipboard**: where emitted emote text goes
//! - **notify**: capped, self-expiring notification queue
//! - **theme**: light/dark mode and per-profile custom palettes

pub mod clipboard;
pub mod notify;
pub mod theme;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use notify::{Notification, NotificationKind, NotificationQueue};
pub use theme::ThemeState;
