//! Scrolling the memory view
//!
//! The scroll position is kept as an address, always a multiple of 8, and
//! applied as the source line of the nested memory window.
//!
//! Moving up clamps at address 0. Moving down is all-or-nothing: a move is
//! accepted only if the whole visible window still fits inside memory, so a
//! page-down near the end is rejected rather than shortened. Line steps can
//! always reach the last full window.

use super::compositor::{CompositeWindowManager, WindowId};
use crate::machine::{BYTES_PER_LINE, MEMORY_LINES};
use ratatui::backend::Backend;

#[derive(Debug, Clone)]
pub struct MemoryScroll {
    address: usize,
    visible_lines: usize,
    window: WindowId,
}

impl MemoryScroll {
    pub fn new(window: WindowId, visible_lines: usize) -> Self {
        MemoryScroll {
            address: 0,
            visible_lines,
            window,
        }
    }

    pub fn address(&self) -> usize {
        self.address
    }

    pub fn line(&self) -> usize {
        self.address / BYTES_PER_LINE
    }

    pub fn visible_lines(&self) -> usize {
        self.visible_lines
    }

    /// Address after moving up `lines`, clamped at 0
    pub fn candidate_up(&self, lines: usize) -> usize {
        self.address.saturating_sub(lines * BYTES_PER_LINE)
    }

    /// Address after moving down `lines`, if the window would still fit
    pub fn candidate_down(&self, lines: usize) -> Option<usize> {
        let candidate = self.address + lines * BYTES_PER_LINE;
        (candidate / BYTES_PER_LINE + self.visible_lines <= MEMORY_LINES).then_some(candidate)
    }

    pub fn step_up<B: Backend>(&mut self, windows: &mut CompositeWindowManager<B>, lines: usize) {
        self.apply(windows, self.candidate_up(lines));
    }

    pub fn page_up<B: Backend>(&mut self, windows: &mut CompositeWindowManager<B>, lines: usize) {
        self.step_up(windows, lines);
    }

    /// Returns whether the move was accepted
    pub fn step_down<B: Backend>(
        &mut self,
        windows: &mut CompositeWindowManager<B>,
        lines: usize,
    ) -> bool {
        match self.candidate_down(lines) {
            Some(address) => {
                self.apply(windows, address);
                true
            }
            None => false,
        }
    }

    pub fn page_down<B: Backend>(
        &mut self,
        windows: &mut CompositeWindowManager<B>,
        lines: usize,
    ) -> bool {
        self.step_down(windows, lines)
    }

    fn apply<B: Backend>(&mut self, windows: &mut CompositeWindowManager<B>, address: usize) {
        self.address = address;
        windows.move_nested_window(self.window, 0, self.line());
    }
}
