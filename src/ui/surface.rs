//! Off-screen character buffers
//!
//! A [`VirtualSurface`] is a grid of characters that is never shown directly.
//! The [`compositor`](super::compositor) copies surfaces, or windows into
//! them, onto the physical screen. Surfaces can be far larger than the
//! terminal: the memory view is a single surface holding all 8192 lines of
//! the address space.

use crate::errors::SurfaceError;
use ratatui::symbols::border;

/// One character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceCell {
    pub ch: char,
    pub bold: bool,
}

impl Default for SurfaceCell {
    fn default() -> Self {
        SurfaceCell {
            ch: ' ',
            bold: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualSurface {
    width: usize,
    height: usize,
    cells: Vec<SurfaceCell>,
}

impl VirtualSurface {
    pub fn new(width: usize, height: usize) -> Self {
        VirtualSurface {
            width,
            height,
            cells: vec![SurfaceCell::default(); width * height],
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Blank every cell
    pub fn clear(&mut self) {
        self.cells.fill(SurfaceCell::default());
    }

    /// Draw a single-line box around the edge of the surface
    pub fn draw_border(&mut self) {
        if self.width < 2 || self.height < 2 {
            return;
        }
        let set = border::PLAIN;
        let (right, bottom) = (self.width - 1, self.height - 1);
        let horizontal = |s: &str| s.repeat(right - 1);

        self.put(0, 0, set.top_left);
        self.put(right, 0, set.top_right);
        self.put(0, bottom, set.bottom_left);
        self.put(right, bottom, set.bottom_right);
        self.put_str(1, 0, &horizontal(set.horizontal_top));
        self.put_str(1, bottom, &horizontal(set.horizontal_bottom));
        for y in 1..bottom {
            self.put(0, y, set.vertical_left);
            self.put(right, y, set.vertical_right);
        }
    }

    /// Write `text` starting at `(x, y)`, clipped at the right edge.
    ///
    /// The origin itself must be inside the surface.
    pub fn write_text(
        &mut self,
        x: usize,
        y: usize,
        text: &str,
        bold: bool,
    ) -> Result<(), SurfaceError> {
        if x >= self.width || y >= self.height {
            return Err(SurfaceError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let row = y * self.width;
        for (col, ch) in (x..self.width).zip(text.chars()) {
            self.cells[row + col] = SurfaceCell { ch, bold };
        }
        Ok(())
    }

    // border symbols are single characters; callers stay in bounds
    fn put(&mut self, x: usize, y: usize, symbol: &str) {
        if let Some(ch) = symbol.chars().next() {
            self.cells[y * self.width + x] = SurfaceCell { ch, bold: false };
        }
    }

    fn put_str(&mut self, x: usize, y: usize, text: &str) {
        let row = y * self.width;
        for (col, ch) in (x..self.width).zip(text.chars()) {
            self.cells[row + col] = SurfaceCell { ch, bold: false };
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&SurfaceCell> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// The characters of one row, or `None` past the bottom
    pub fn row_text(&self, y: usize) -> Option<String> {
        if y >= self.height {
            return None;
        }
        let row = y * self.width;
        Some(self.cells[row..row + self.width].iter().map(|c| c.ch).collect())
    }

    /// Copy a `size` rectangle at `src_origin` in `src` to `dst_origin` in self.
    ///
    /// Cells falling outside either surface are skipped.
    pub fn copy_from(
        &mut self,
        src: &VirtualSurface,
        src_origin: (usize, usize),
        size: (usize, usize),
        dst_origin: (usize, usize),
    ) {
        let (sx, sy) = src_origin;
        let (dx, dy) = dst_origin;
        let cols = size
            .0
            .min(src.width.saturating_sub(sx))
            .min(self.width.saturating_sub(dx));
        let rows = size
            .1
            .min(src.height.saturating_sub(sy))
            .min(self.height.saturating_sub(dy));

        for r in 0..rows {
            let from = (sy + r) * src.width + sx;
            let to = (dy + r) * self.width + dx;
            self.cells[to..to + cols].copy_from_slice(&src.cells[from..from + cols]);
        }
    }
}
