//! The simulated machine, seen through the narrow interfaces the debugger needs
//!
//! - [`Simulator`]: executes one instruction at a time and reports what it touched
//! - [`Disassembler`]: turns the bytes at an address into display text
//! - [`Assembler`]: builds the initial [`Program`] before the session starts
//!
//! The debugger never decodes or executes instructions itself. [`listing`]
//! and [`bare`] provide the stand-ins the binary ships with.
//!
//! # Action classification
//!
//! Every step reports an [`ActionResult`]. The session uses it to pick the
//! smallest region of the memory view that needs redrawing.

pub mod bare;
pub mod listing;
pub mod memory;

use crate::errors::DebuggerError;
use rustc_hash::FxHashMap;

pub use memory::{Memory, BYTES_PER_LINE, MEMORY_LINES, MEMORY_SIZE};

/// Base of the hardware stack page
pub const STACK_PAGE: u16 = 0x0100;

/// Side effect of a single simulated instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// Ran without touching memory
    NormalStep,
    /// Stored to the given address
    MemoryWrite(u16),
    /// Pushed to or pulled from the stack page
    StackActivity,
    /// The program counter points at uninitialized memory
    UninitializedAccess,
    /// The opcode at the program counter does not decode
    InvalidInstruction,
}

impl ActionResult {
    /// Whether this result is worth flagging to the operator.
    /// Anomalies never halt the session.
    pub fn is_anomaly(self) -> bool {
        matches!(
            self,
            ActionResult::UninitializedAccess | ActionResult::InvalidInstruction
        )
    }
}

/// CPU register file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    pub pc: u16,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    /// Offset into the stack page
    pub sp: u8,
    /// Status flags, NV-BDIZC from bit 7 down
    pub cc: u8,
}

impl Registers {
    /// Absolute address the stack pointer refers to
    pub fn stack_address(&self) -> u16 {
        STACK_PAGE | self.sp as u16
    }
}

/// An assembled program: initial memory image plus symbols
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub memory: Memory,
    pub symbols: FxHashMap<String, u16>,
}

/// Executes instructions against a memory image it owns
pub trait Simulator {
    fn reset(&mut self);
    fn irq(&mut self);
    fn nmi(&mut self);

    /// Run exactly one instruction to completion
    fn execute(&mut self) -> ActionResult;

    fn memory(&self) -> &Memory;

    fn registers(&self) -> Registers;
}

/// Formats the instruction at an address for display
pub trait Disassembler {
    fn disassemble_line(&self, memory: &Memory, address: u16) -> String;
}

/// Translates a source file into an initial [`Program`]
pub trait Assembler {
    fn assemble(&self, source: &str) -> Result<Program, DebuggerError>;
}
