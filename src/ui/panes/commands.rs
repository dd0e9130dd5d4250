//! Key binding help

use super::render_frame;
use crate::errors::SurfaceError;
use crate::ui::surface::VirtualSurface;

const HELP_LINES: [&str; 2] = [
    "R: Reset, I: Irq, N: Nmi, s: Step, i/k: mem up/down, o/l: page up/down",
    "ESC: exit",
];

pub fn render_commands_help(surface: &mut VirtualSurface) -> Result<(), SurfaceError> {
    render_frame(surface, "COMMANDS")?;
    for (row, text) in HELP_LINES.iter().enumerate() {
        surface.write_text(1, row + 1, text, false)?;
    }
    Ok(())
}
