//! Register view
//!
//! ```text
//! PC:0200 A:00 X:00 Y:00 NV-BDIZC
//! SP:01fd          Flags:..1..1..
//! ```

use super::render_frame;
use crate::errors::SurfaceError;
use crate::machine::Registers;
use crate::ui::surface::VirtualSurface;

/// Status flags as eight characters, bit 7 first: `'1'` set, `'.'` clear
pub fn format_flags(cc: u8) -> String {
    (0..8)
        .rev()
        .map(|bit| if cc & (1 << bit) != 0 { '1' } else { '.' })
        .collect()
}

pub fn render_registers(
    surface: &mut VirtualSurface,
    registers: &Registers,
) -> Result<(), SurfaceError> {
    render_frame(surface, "REGISTERS")?;
    surface.write_text(
        1,
        1,
        &format!(
            "PC:{:04x} A:{:02x} X:{:02x} Y:{:02x} NV-BDIZC",
            registers.pc, registers.a, registers.x, registers.y
        ),
        false,
    )?;
    surface.write_text(
        1,
        2,
        &format!(
            "SP:{:04x}          Flags:{}",
            registers.stack_address(),
            format_flags(registers.cc)
        ),
        false,
    )
}
