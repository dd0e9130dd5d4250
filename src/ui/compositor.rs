//! Window compositing onto the physical terminal
//!
//! The manager owns every window and its [`VirtualSurface`]. Windows form a
//! small scene graph:
//!
//! - **top-level windows** are anchored at screen coordinates and blitted
//!   whole, in registration order, so later windows draw over earlier ones
//! - **nested windows** are anchored inside their parent's surface and show
//!   only a `display` sized rectangle of their own surface, starting at a
//!   movable `source` offset. This is how a 8192-line memory surface scrolls
//!   inside a frame a few dozen lines tall
//!
//! Compositing visits children before parents. Everything lands in a
//! screen-sized shadow surface which is then handed to ratatui; ratatui diffs
//! against the previous frame so only changed cells reach the device.

use super::surface::VirtualSurface;
use super::theme::DEFAULT_THEME;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Handle to a registered window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(usize);

#[derive(Debug)]
struct AnchoredWindow {
    surface: VirtualSurface,
    /// Screen position for top-level windows, parent-surface position otherwise
    anchor: (usize, usize),
    parent: Option<WindowId>,
    source: (usize, usize),
    display: (usize, usize),
    active: bool,
}

pub struct CompositeWindowManager<B: Backend> {
    terminal: Terminal<B>,
    screen: VirtualSurface,
    windows: Vec<AnchoredWindow>,
}

impl<B: Backend> CompositeWindowManager<B> {
    /// Take over a terminal; the shadow screen matches its current size
    pub fn new(mut terminal: Terminal<B>) -> Self {
        let area = terminal.get_frame().area();
        CompositeWindowManager {
            terminal,
            screen: VirtualSurface::new(area.width as usize, area.height as usize),
            windows: Vec::new(),
        }
    }

    pub fn screen_size(&self) -> (usize, usize) {
        self.screen.dimensions()
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Register a window shown whole at a screen position
    pub fn register_window(&mut self, surface: VirtualSurface, anchor: (usize, usize)) -> WindowId {
        let display = surface.dimensions();
        self.windows.push(AnchoredWindow {
            surface,
            anchor,
            parent: None,
            source: (0, 0),
            display,
            active: true,
        });
        WindowId(self.windows.len() - 1)
    }

    /// Register a scrollable viewport into `surface`, placed inside `parent`
    #[allow(clippy::too_many_arguments)]
    pub fn register_nested_window(
        &mut self,
        parent: WindowId,
        surface: VirtualSurface,
        display_width: usize,
        display_height: usize,
        anchor: (usize, usize),
        srcx: usize,
        srcy: usize,
        active: bool,
    ) -> WindowId {
        debug_assert!(
            parent.0 < self.windows.len(),
            "parent window must be registered first"
        );
        self.windows.push(AnchoredWindow {
            surface,
            anchor,
            parent: Some(parent),
            source: (srcx, srcy),
            display: (display_width, display_height),
            active,
        });
        WindowId(self.windows.len() - 1)
    }

    /// Change the offset a nested window shows from. Bounds are the caller's problem.
    pub fn move_nested_window(&mut self, id: WindowId, srcx: usize, srcy: usize) {
        self.windows[id.0].source = (srcx, srcy);
    }

    pub fn window_source(&self, id: WindowId) -> (usize, usize) {
        self.windows[id.0].source
    }

    pub fn surface(&self, id: WindowId) -> &VirtualSurface {
        &self.windows[id.0].surface
    }

    pub fn surface_mut(&mut self, id: WindowId) -> &mut VirtualSurface {
        &mut self.windows[id.0].surface
    }

    /// Composite every top-level window and flush once
    pub fn present(&mut self) -> io::Result<()> {
        let roots: Vec<WindowId> = self
            .windows
            .iter()
            .enumerate()
            .filter(|(_, w)| w.parent.is_none() && w.active)
            .map(|(i, _)| WindowId(i))
            .collect();
        for id in roots {
            self.composite(id);
            self.blit_to_screen(id);
        }
        self.flush()
    }

    /// Composite and flush only the subtree rooted at `id`
    pub fn present_window(&mut self, id: WindowId) -> io::Result<()> {
        self.composite(id);
        if self.windows[id.0].parent.is_some() {
            self.blit_into_parent(id);
        }
        self.blit_to_screen(id);
        self.flush()
    }

    fn children(&self, id: WindowId) -> Vec<WindowId> {
        self.windows
            .iter()
            .enumerate()
            .filter(|(_, w)| w.parent == Some(id) && w.active)
            .map(|(i, _)| WindowId(i))
            .collect()
    }

    fn composite(&mut self, id: WindowId) {
        for child in self.children(id) {
            self.composite(child);
            self.blit_into_parent(child);
        }
    }

    fn blit_into_parent(&mut self, child: WindowId) {
        let Some(parent) = self.windows[child.0].parent else {
            return;
        };
        // parents are always registered before their children
        let (head, tail) = self.windows.split_at_mut(child.0);
        let window = &tail[0];
        head[parent.0].surface.copy_from(
            &window.surface,
            window.source,
            window.display,
            window.anchor,
        );
    }

    fn screen_origin(&self, id: WindowId) -> (usize, usize) {
        let window = &self.windows[id.0];
        match window.parent {
            None => window.anchor,
            Some(parent) => {
                let (px, py) = self.screen_origin(parent);
                (px + window.anchor.0, py + window.anchor.1)
            }
        }
    }

    fn blit_to_screen(&mut self, id: WindowId) {
        let origin = self.screen_origin(id);
        let window = &self.windows[id.0];
        match window.parent {
            None => self.screen.copy_from(
                &window.surface,
                (0, 0),
                window.surface.dimensions(),
                origin,
            ),
            Some(parent) => self.screen.copy_from(
                &self.windows[parent.0].surface,
                window.anchor,
                window.display,
                origin,
            ),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let screen = &self.screen;
        self.terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            for y in 0..area.height {
                for x in 0..area.width {
                    let Some(cell) = screen.cell(x as usize, y as usize) else {
                        continue;
                    };
                    if let Some(target) = buf.cell_mut((area.x + x, area.y + y)) {
                        target
                            .set_char(cell.ch)
                            .set_style(DEFAULT_THEME.cell_style(cell.bold));
                    }
                }
            }
        })?;
        Ok(())
    }
}
