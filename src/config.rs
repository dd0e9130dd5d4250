//! Session configuration and the pane layout derived from it
//!
//! Nothing here is global: [`SessionConfig`] is handed to the session at
//! construction and [`Layout`] is computed once from the physical screen size.

use crate::errors::DebuggerError;

/// What the Nmi key does.
///
/// Earlier builds of this debugger sent the Nmi key to the simulator's reset
/// operation. `Distinct` raises a real NMI; `ResetAlias` keeps the old
/// behavior for anyone relying on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NmiPolicy {
    #[default]
    Distinct,
    ResetAlias,
}

/// Tunable parameters for a debugging session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Width of the register, action and memory column
    pub left_width: usize,
    /// Height of each of the commands, registers and action panes
    pub pane_height: usize,
    /// Lines moved by a page scroll
    pub page_lines: usize,
    pub nmi_policy: NmiPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            left_width: 50,
            pane_height: 4,
            page_lines: 32,
            nmi_policy: NmiPolicy::default(),
        }
    }
}

/// A rectangle in screen cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Where every pane sits on the physical screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub commands: Region,
    pub registers: Region,
    pub action: Region,
    /// The bordered frame around the scrolling memory view
    pub memory: Region,
}

/// Smallest memory frame that still shows one line of memory
const MIN_MEMORY_HEIGHT: usize = 3;

impl Layout {
    /// Stack the panes down the left edge; the memory frame takes what is left
    pub fn compute(
        screen_width: usize,
        screen_height: usize,
        config: &SessionConfig,
    ) -> Result<Layout, DebuggerError> {
        let panes_height = config.pane_height * 3;
        let min_height = panes_height + MIN_MEMORY_HEIGHT;
        if screen_width < config.left_width || screen_height < min_height {
            return Err(DebuggerError::TerminalTooSmall {
                width: screen_width,
                height: screen_height,
                min_width: config.left_width,
                min_height,
            });
        }

        let pane = |row: usize, width: usize| Region {
            x: 0,
            y: row * config.pane_height,
            width,
            height: config.pane_height,
        };

        Ok(Layout {
            commands: pane(0, screen_width),
            registers: pane(1, config.left_width),
            action: pane(2, config.left_width),
            memory: Region {
                x: 0,
                y: panes_height,
                width: config.left_width,
                height: screen_height - panes_height,
            },
        })
    }

    /// Memory lines visible inside the frame's border
    pub fn visible_memory_lines(&self) -> usize {
        self.memory.height - 2
    }
}
