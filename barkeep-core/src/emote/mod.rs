//! Emote Module
//!
//! - **engine**: per-order-item progression cursors and anti-repeat seeding
//! - **template**: `{variable}` interpolation and RP helper rendering

mod engine;
pub mod template;

pub use engine::EmoteEngine;
pub use template::{EmoteContext, interpolate, render_helper_command};
