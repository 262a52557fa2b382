//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Dialog, Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::ui::ruler::DEFAULT_RULER_WIDTH;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
    function_keys_enabled: bool,
    ruler_width: usize,
}

impl App {
    /// Create a new application, optionally opening `file_path` at startup.
    pub const fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            function_keys_enabled: false,
            ruler_width: DEFAULT_RULER_WIDTH,
        }
    }

    /// Let physical F1-F10 keys dispatch actions.
    #[must_use]
    pub const fn with_function_keys(mut self, enabled: bool) -> Self {
        self.function_keys_enabled = enabled;
        self
    }

    /// Set the ruler width in columns.
    #[must_use]
    pub const fn with_ruler_width(mut self, width: usize) -> Self {
        self.ruler_width = width;
        self
    }
}

#[cfg(test)]
mod tests;
