//! Pane rendering
//!
//! Stateless functions that turn debugger state into surface content. None
//! of them touch the screen: the session hands the result to the
//! [`compositor`](super::compositor).
//!
//! - [`commands`]: key binding help
//! - [`registers`]: register values and the status flags
//! - [`action`]: the two-line action log
//! - [`memory`]: the 64KB hex dump, whole or a line range at a time

pub mod action;
pub mod commands;
pub mod memory;
pub mod registers;

pub use action::{render_action_detail, render_action_line, render_action_view};
pub use commands::render_commands_help;
pub use memory::{format_memory_line, render_memory_dump, render_memory_frame};
pub use registers::{format_flags, render_registers};

use super::surface::VirtualSurface;
use crate::errors::SurfaceError;

/// Clear a pane and draw its border with a title in the top edge
pub(crate) fn render_frame(surface: &mut VirtualSurface, title: &str) -> Result<(), SurfaceError> {
    surface.clear();
    surface.draw_border();
    surface.write_text(4, 0, title, false)
}
