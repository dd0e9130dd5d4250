// Test doubles shared by the session tests

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use dbg6502::config::SessionConfig;
use dbg6502::machine::{ActionResult, Disassembler, Memory, Registers, Simulator};
use dbg6502::ui::terminal::EventSource;
use dbg6502::ui::{CompositeWindowManager, DebuggerSession};
use ratatui::{backend::TestBackend, Terminal};
use std::collections::VecDeque;
use std::io;

/// One scripted instruction: memory writes to apply and what to report
pub struct ScriptedStep {
    pub writes: Vec<(u16, u8)>,
    pub result: ActionResult,
    pub registers: Registers,
}

impl ScriptedStep {
    pub fn new(result: ActionResult) -> Self {
        ScriptedStep {
            writes: Vec::new(),
            result,
            registers: Registers::default(),
        }
    }

    pub fn write(mut self, addr: u16, value: u8) -> Self {
        self.writes.push((addr, value));
        self
    }

    pub fn registers(mut self, registers: Registers) -> Self {
        self.registers = registers;
        self
    }
}

/// Replays scripted steps and records interrupt calls
pub struct ScriptedSimulator {
    pub memory: Memory,
    pub registers: Registers,
    pub steps: VecDeque<ScriptedStep>,
    pub calls: Vec<&'static str>,
}

impl ScriptedSimulator {
    pub fn new(steps: Vec<ScriptedStep>) -> Self {
        ScriptedSimulator {
            memory: Memory::new(),
            registers: Registers::default(),
            steps: steps.into(),
            calls: Vec::new(),
        }
    }
}

impl Simulator for ScriptedSimulator {
    fn reset(&mut self) {
        self.calls.push("reset");
        self.registers = Registers::default();
    }

    fn irq(&mut self) {
        self.calls.push("irq");
    }

    fn nmi(&mut self) {
        self.calls.push("nmi");
    }

    fn execute(&mut self) -> ActionResult {
        self.calls.push("execute");
        match self.steps.pop_front() {
            Some(step) => {
                for (addr, value) in step.writes {
                    self.memory.set(addr, value);
                }
                self.registers = step.registers;
                step.result
            }
            None => {
                self.registers.pc = self.registers.pc.wrapping_add(1);
                ActionResult::NormalStep
            }
        }
    }

    fn memory(&self) -> &Memory {
        &self.memory
    }

    fn registers(&self) -> Registers {
        self.registers
    }
}

pub struct AddressDisassembler;

impl Disassembler for AddressDisassembler {
    fn disassemble_line(&self, _memory: &Memory, address: u16) -> String {
        format!("insn@{:04x}", address)
    }
}

/// Feeds queued events, then Esc forever
pub struct ScriptedEvents(pub VecDeque<Event>);

impl ScriptedEvents {
    pub fn keys(keys: &str) -> Self {
        ScriptedEvents(keys.chars().map(|c| key(KeyCode::Char(c))).collect())
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        Ok(self.0.pop_front().unwrap_or_else(|| key(KeyCode::Esc)))
    }
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub type TestSession = DebuggerSession<ScriptedSimulator, AddressDisassembler, TestBackend>;

pub fn session_with<S: Simulator, D: Disassembler>(
    simulator: S,
    disassembler: D,
    config: SessionConfig,
) -> DebuggerSession<S, D, TestBackend> {
    let terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
    DebuggerSession::new(
        simulator,
        disassembler,
        CompositeWindowManager::new(terminal),
        config,
    )
    .expect("session")
}

pub fn session(steps: Vec<ScriptedStep>) -> TestSession {
    session_with(
        ScriptedSimulator::new(steps),
        AddressDisassembler,
        SessionConfig::default(),
    )
}

/// One row of what the terminal currently shows
pub fn screen_row<S: Simulator, D: Disassembler>(
    session: &DebuggerSession<S, D, TestBackend>,
    y: u16,
) -> String {
    let buf = session.windows().terminal().backend().buffer();
    (0..buf.area.width)
        .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
        .collect()
}
