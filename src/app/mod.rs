//! Application module
//!
//! This module contains the core application state, settings and key bindings.

pub mod config;
pub mod keymap;
mod language;
mod state;

pub use config::Settings;
pub use keymap::{Action, Keymap};
pub use language::Language;
pub use state::{AppState, TranslationResult};
