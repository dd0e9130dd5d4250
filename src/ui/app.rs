//! The debugger session: key table, event loop and redraw policy

use super::compositor::{CompositeWindowManager, WindowId};
use super::panes;
use super::scroll::MemoryScroll;
use super::surface::VirtualSurface;
use super::terminal::EventSource;
use crate::config::{Layout, NmiPolicy, Region, SessionConfig};
use crate::errors::DebuggerError;
use crate::machine::{
    ActionResult, Disassembler, Registers, Simulator, BYTES_PER_LINE, MEMORY_LINES, STACK_PAGE,
};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::backend::Backend;
use rustc_hash::FxHashMap;
use std::ops::RangeInclusive;

/// Everything a key can ask the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Exit,
    Reset,
    Irq,
    Nmi,
    Step,
    ScrollUpLine,
    ScrollUpPage,
    ScrollDownLine,
    ScrollDownPage,
}

/// Key bindings; any key not listed is ignored
pub const KEYMAP: [(KeyCode, Command); 9] = [
    (KeyCode::Esc, Command::Exit),
    (KeyCode::Char('R'), Command::Reset),
    (KeyCode::Char('I'), Command::Irq),
    (KeyCode::Char('N'), Command::Nmi),
    (KeyCode::Char('s'), Command::Step),
    (KeyCode::Char('i'), Command::ScrollUpLine),
    (KeyCode::Char('o'), Command::ScrollUpPage),
    (KeyCode::Char('k'), Command::ScrollDownLine),
    (KeyCode::Char('l'), Command::ScrollDownPage),
];

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The surfaces a session draws into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Commands,
    Registers,
    Action,
    /// Border around the memory view
    MemoryFrame,
    /// The full 8192-line dump
    Memory,
}

#[derive(Debug, Clone, Copy)]
struct PaneWindows {
    commands: WindowId,
    registers: WindowId,
    action: WindowId,
    memory_frame: WindowId,
    memory: WindowId,
}

/// Memory-view lines covering the stack page
pub fn stack_lines() -> RangeInclusive<usize> {
    let base = STACK_PAGE as usize;
    (base / BYTES_PER_LINE)..=((base + 0xff) / BYTES_PER_LINE)
}

/// Memory-view lines that need redrawing after a step.
///
/// A write redraws from the line before to two lines after, enough to cover
/// multi-byte stores and pushes that cross a line boundary.
pub fn redraw_lines(result: ActionResult) -> Option<RangeInclusive<usize>> {
    match result {
        ActionResult::MemoryWrite(addr) => {
            let line = addr as usize / BYTES_PER_LINE;
            Some(line.saturating_sub(1)..=(line + 2).min(MEMORY_LINES - 1))
        }
        ActionResult::StackActivity => Some(stack_lines()),
        ActionResult::NormalStep
        | ActionResult::UninitializedAccess
        | ActionResult::InvalidInstruction => None,
    }
}

pub struct DebuggerSession<S: Simulator, D: Disassembler, B: Backend> {
    simulator: S,
    disassembler: D,
    windows: CompositeWindowManager<B>,
    panes: PaneWindows,
    scroll: MemoryScroll,
    keymap: FxHashMap<KeyCode, Command>,
    config: SessionConfig,
    registers: Registers,
    last_action: String,
    action_detail: String,
}

impl<S: Simulator, D: Disassembler, B: Backend> DebuggerSession<S, D, B> {
    /// Lay out and render every pane, and register the windows
    pub fn new(
        simulator: S,
        disassembler: D,
        mut windows: CompositeWindowManager<B>,
        config: SessionConfig,
    ) -> Result<Self, DebuggerError> {
        let (screen_width, screen_height) = windows.screen_size();
        let layout = Layout::compute(screen_width, screen_height, &config)?;
        let registers = simulator.registers();

        let mut commands = VirtualSurface::new(layout.commands.width, layout.commands.height);
        panes::render_commands_help(&mut commands)?;

        let mut register_view = VirtualSurface::new(layout.registers.width, layout.registers.height);
        panes::render_registers(&mut register_view, &registers)?;

        let mut action = VirtualSurface::new(layout.action.width, layout.action.height);
        panes::render_action_view(&mut action)?;

        let mut frame = VirtualSurface::new(layout.memory.width, layout.memory.height);
        panes::render_memory_frame(&mut frame)?;

        let dump_width = layout.memory.width - 2;
        let mut dump = VirtualSurface::new(dump_width, MEMORY_LINES);
        panes::render_memory_dump(&mut dump, simulator.memory(), 0, MEMORY_LINES - 1)?;

        let at = |r: Region| (r.x, r.y);
        let commands = windows.register_window(commands, at(layout.commands));
        let register_id = windows.register_window(register_view, at(layout.registers));
        let action = windows.register_window(action, at(layout.action));
        let memory_frame = windows.register_window(frame, at(layout.memory));
        let visible = layout.visible_memory_lines();
        let memory = windows.register_nested_window(
            memory_frame,
            dump,
            dump_width,
            visible,
            (1, 1),
            0,
            0,
            true,
        );
        log::trace!(
            "session layout {}x{}, {} memory lines visible",
            screen_width,
            screen_height,
            visible
        );

        Ok(DebuggerSession {
            simulator,
            disassembler,
            windows,
            panes: PaneWindows {
                commands,
                registers: register_id,
                action,
                memory_frame,
                memory,
            },
            scroll: MemoryScroll::new(memory, visible),
            keymap: KEYMAP.into_iter().collect(),
            config,
            registers,
            last_action: String::from("Nothing Yet"),
            action_detail: String::new(),
        })
    }

    /// Present, wait for an event, handle it; until the exit key
    pub fn run<E: EventSource>(&mut self, events: &mut E) -> Result<(), DebuggerError> {
        loop {
            self.present()?;
            if let Event::Key(key) = events.next_event()? {
                if self.handle_key_event(key)? == Flow::Exit {
                    break;
                }
            }
        }
        log::trace!("session exiting");
        Ok(())
    }

    /// Composite and flush every window
    pub fn present(&mut self) -> Result<(), DebuggerError> {
        self.windows.present()?;
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<Flow, DebuggerError> {
        if key.kind != KeyEventKind::Press {
            return Ok(Flow::Continue);
        }
        match self.keymap.get(&key.code).copied() {
            Some(command) => self.dispatch(command),
            None => Ok(Flow::Continue),
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Flow, DebuggerError> {
        log::trace!("dispatch {:?}", command);
        match command {
            Command::Exit => return Ok(Flow::Exit),
            Command::Reset => {
                self.simulator.reset();
                self.after_interrupt("RESET", false)?;
            }
            Command::Irq => {
                self.simulator.irq();
                self.after_interrupt("IRQ", true)?;
            }
            Command::Nmi => {
                match self.config.nmi_policy {
                    NmiPolicy::Distinct => self.simulator.nmi(),
                    NmiPolicy::ResetAlias => self.simulator.reset(),
                }
                self.after_interrupt("NMI", true)?;
            }
            Command::Step => self.step()?,
            Command::ScrollUpLine => self.scroll.step_up(&mut self.windows, 1),
            Command::ScrollUpPage => self
                .scroll
                .page_up(&mut self.windows, self.config.page_lines),
            Command::ScrollDownLine => {
                self.scroll.step_down(&mut self.windows, 1);
            }
            Command::ScrollDownPage => {
                self.scroll
                    .page_down(&mut self.windows, self.config.page_lines);
            }
        }
        Ok(Flow::Continue)
    }

    fn after_interrupt(&mut self, label: &str, touches_stack: bool) -> Result<(), DebuggerError> {
        self.set_action(label.to_string())?;
        self.refresh_registers()?;
        if touches_stack {
            self.redraw_memory(stack_lines())?;
        }
        Ok(())
    }

    fn step(&mut self) -> Result<(), DebuggerError> {
        let pc = self.simulator.registers().pc;
        let listing = self
            .disassembler
            .disassemble_line(self.simulator.memory(), pc);
        let result = self.simulator.execute();
        if result.is_anomaly() {
            log::trace!("anomaly at {:04x}: {} -> {:?}", pc, listing, result);
        } else {
            log::trace!("{} -> {:?}", listing, result);
        }

        self.set_action(listing)?;
        self.refresh_registers()?;

        let detail = match result {
            ActionResult::UninitializedAccess => String::from("In uninitialized mem"),
            ActionResult::MemoryWrite(addr) => match self.simulator.memory().get(addr) {
                Some(value) => format!("modified {:04x}={:02x}", addr, value),
                None => format!("modified {:04x}", addr),
            },
            ActionResult::StackActivity => String::from("modified stack"),
            ActionResult::InvalidInstruction => String::from("Not an instruction"),
            ActionResult::NormalStep => String::new(),
        };
        self.action_detail = detail;
        panes::render_action_detail(
            self.windows.surface_mut(self.panes.action),
            &self.action_detail,
        )?;

        if let Some(lines) = redraw_lines(result) {
            self.redraw_memory(lines)?;
        }
        self.windows.present_window(self.panes.memory_frame)?;
        Ok(())
    }

    fn set_action(&mut self, text: String) -> Result<(), DebuggerError> {
        self.last_action = text;
        panes::render_action_line(self.windows.surface_mut(self.panes.action), &self.last_action)?;
        Ok(())
    }

    fn refresh_registers(&mut self) -> Result<(), DebuggerError> {
        self.registers = self.simulator.registers();
        panes::render_registers(
            self.windows.surface_mut(self.panes.registers),
            &self.registers,
        )?;
        Ok(())
    }

    fn redraw_memory(&mut self, lines: RangeInclusive<usize>) -> Result<(), DebuggerError> {
        panes::render_memory_dump(
            self.windows.surface_mut(self.panes.memory),
            self.simulator.memory(),
            *lines.start(),
            *lines.end(),
        )?;
        Ok(())
    }

    pub fn registers(&self) -> Registers {
        self.registers
    }

    /// Primary action text
    pub fn last_action(&self) -> &str {
        &self.last_action
    }

    /// Classification of the last step; empty after a normal step
    pub fn action_detail(&self) -> &str {
        &self.action_detail
    }

    pub fn scroll_address(&self) -> usize {
        self.scroll.address()
    }

    pub fn visible_memory_lines(&self) -> usize {
        self.scroll.visible_lines()
    }

    pub fn pane(&self, pane: Pane) -> &VirtualSurface {
        let id = match pane {
            Pane::Commands => self.panes.commands,
            Pane::Registers => self.panes.registers,
            Pane::Action => self.panes.action,
            Pane::MemoryFrame => self.panes.memory_frame,
            Pane::Memory => self.panes.memory,
        };
        self.windows.surface(id)
    }

    pub fn windows(&self) -> &CompositeWindowManager<B> {
        &self.windows
    }

    pub fn simulator(&self) -> &S {
        &self.simulator
    }

    pub fn simulator_mut(&mut self) -> &mut S {
        &mut self.simulator
    }
}
