//! Memory view: a hex dump of the whole address space
//!
//! One surface line per 8 bytes. Line `L` starts with the address `L*8` in
//! four hex digits, followed by ` xx` for each defined byte and three blanks
//! for each uninitialized one.
//!
//! The dump surface holds all 8192 lines. The session renders it once in
//! full, then re-renders only the lines a step touched.

use super::render_frame;
use crate::errors::SurfaceError;
use crate::machine::{Memory, BYTES_PER_LINE, MEMORY_LINES};
use crate::ui::surface::VirtualSurface;

pub fn format_memory_line(memory: &Memory, line: usize) -> String {
    let mut text = String::with_capacity(4 + BYTES_PER_LINE * 3);
    text.push_str(&format!("{:04x}", line * BYTES_PER_LINE));
    for cell in memory.line(line) {
        match cell {
            Some(byte) => text.push_str(&format!(" {:02x}", byte)),
            None => text.push_str("   "),
        }
    }
    text
}

/// Render lines `start_line..=end_line`; lines past the end of memory are ignored
pub fn render_memory_dump(
    surface: &mut VirtualSurface,
    memory: &Memory,
    start_line: usize,
    end_line: usize,
) -> Result<(), SurfaceError> {
    let last = end_line.min(MEMORY_LINES - 1);
    for line in start_line..=last {
        surface.write_text(0, line, &format_memory_line(memory, line), false)?;
    }
    Ok(())
}

/// The bordered frame the dump scrolls inside
pub fn render_memory_frame(surface: &mut VirtualSurface) -> Result<(), SurfaceError> {
    render_frame(surface, "MEMORY")
}
