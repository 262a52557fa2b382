//! Document editing core.
//!
//! Provides a rope-backed text buffer with caret management, the caret
//! position tracker behind the status line, and the display-only editing
//! mode.

mod buffer;
mod mode;
mod position;

pub use buffer::{Cursor, Direction, EditorBuffer, display_width};
pub use mode::EditorMode;
pub use position::{LocateError, Position, locate};
