pub mod config;
pub mod state;

pub use config::{Config, PROFILES_FILE};
pub use state::DeskState;
