//! A machine with memory, registers and interrupt sequencing but no
//! instruction core.
//!
//! Interrupts follow 6502 conventions: reset loads the vector at `$FFFC`,
//! NMI pushes PC and status onto the stack page and loads `$FFFA`, IRQ does
//! the same through `$FFFE` unless interrupts are disabled. Vector bytes that
//! are uninitialized read as zero.
//!
//! [`BareMachine::execute`] decodes nothing: a defined byte at PC classifies
//! as [`ActionResult::InvalidInstruction`] and PC moves past it, an
//! uninitialized one as [`ActionResult::UninitializedAccess`] and PC stays put.
//! Plug a real core in through [`Simulator`] to execute programs.

use super::{ActionResult, Memory, Registers, Simulator, STACK_PAGE};

pub const NMI_VECTOR: u16 = 0xfffa;
pub const RESET_VECTOR: u16 = 0xfffc;
pub const IRQ_VECTOR: u16 = 0xfffe;

/// Interrupt-disable flag
pub const FLAG_I: u8 = 0b0000_0100;
/// Unused bit, always reads as set
pub const FLAG_UNUSED: u8 = 0b0010_0000;

#[derive(Debug, Clone)]
pub struct BareMachine {
    memory: Memory,
    registers: Registers,
}

impl BareMachine {
    /// Load a memory image and take the reset vector
    pub fn new(memory: Memory) -> Self {
        let mut machine = BareMachine {
            memory,
            registers: Registers::default(),
        };
        machine.reset();
        machine
    }

    fn push(&mut self, value: u8) {
        let addr = STACK_PAGE | self.registers.sp as u16;
        self.memory.set(addr, value);
        self.registers.sp = self.registers.sp.wrapping_sub(1);
    }

    fn interrupt(&mut self, vector: u16) {
        let [lo, hi] = self.registers.pc.to_le_bytes();
        self.push(hi);
        self.push(lo);
        self.push(self.registers.cc | FLAG_UNUSED);
        self.registers.cc |= FLAG_I;
        self.registers.pc = self.memory.word(vector).unwrap_or_default();
    }
}

impl Simulator for BareMachine {
    fn reset(&mut self) {
        self.registers.sp = 0xfd;
        self.registers.cc = FLAG_UNUSED | FLAG_I;
        self.registers.pc = self.memory.word(RESET_VECTOR).unwrap_or_default();
    }

    fn irq(&mut self) {
        if self.registers.cc & FLAG_I == 0 {
            self.interrupt(IRQ_VECTOR);
        }
    }

    fn nmi(&mut self) {
        self.interrupt(NMI_VECTOR);
    }

    fn execute(&mut self) -> ActionResult {
        match self.memory.get(self.registers.pc) {
            None => ActionResult::UninitializedAccess,
            Some(_) => {
                self.registers.pc = self.registers.pc.wrapping_add(1);
                ActionResult::InvalidInstruction
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
