// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorMode)
    clippy::module_name_repetitions
)]

//! # dwsim
//!
//! A terminal simulator of the DisplayWrite word-processor screen.
//!
//! The screen carries:
//! - A column ruler across the top
//! - The editable text pane
//! - A status line with caret position, typing mode and file name
//! - A function-key bar with the ten classic commands
//!
//! ## Architecture
//!
//! dwsim uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`actions`]: Function-key command set
//! - [`editor`]: Text buffer, caret location and typing mode
//! - [`session`]: The document being edited and its file binding
//! - [`files`]: Reading, writing and background loading of documents
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved command-line defaults
//! - [`logging`]: File logging setup

pub mod actions;
pub mod app;
pub mod config;
pub mod editor;
pub mod files;
pub mod logging;
pub mod session;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::actions::Action;
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{Position, locate};
    pub use crate::session::EditorSession;
}
