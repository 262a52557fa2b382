//! Terminal UI components.
//!
//! - [`ruler`]: The column ruler above the text pane
//! - [`status`]: Status line, function-key bar and toasts
//! - overlays: Modal popups for notices, the exit question and file prompt

pub mod ruler;
pub mod status;

mod overlays;
mod render;

pub use render::{ScreenLayout, render, screen_layout};
