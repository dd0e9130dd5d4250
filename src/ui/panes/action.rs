//! The action log: what the last command did
//!
//! Row 1 holds the primary text (the disassembled instruction for a step,
//! or the name of an interrupt), row 2 the classification of a step.

use super::render_frame;
use crate::errors::SurfaceError;
use crate::ui::surface::VirtualSurface;

const PRIMARY_ROW: usize = 1;
const DETAIL_ROW: usize = 2;

pub fn render_action_view(surface: &mut VirtualSurface) -> Result<(), SurfaceError> {
    render_frame(surface, "ACTION")?;
    render_action_line(surface, "Nothing Yet")
}

pub fn render_action_line(surface: &mut VirtualSurface, text: &str) -> Result<(), SurfaceError> {
    write_padded(surface, PRIMARY_ROW, text)
}

pub fn render_action_detail(surface: &mut VirtualSurface, text: &str) -> Result<(), SurfaceError> {
    write_padded(surface, DETAIL_ROW, text)
}

// pad to the inner width so a short message erases a longer one
fn write_padded(surface: &mut VirtualSurface, row: usize, text: &str) -> Result<(), SurfaceError> {
    let (width, _) = surface.dimensions();
    let inner = width.saturating_sub(2);
    let padded: String = text.chars().chain(std::iter::repeat(' ')).take(inner).collect();
    surface.write_text(1, row, &padded, false)
}
