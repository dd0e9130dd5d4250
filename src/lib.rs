//! # Introduction
//!
//! dbg6502 steps a simulated 6502 one instruction at a time in the terminal,
//! showing its registers, an action log and a live view of the full 64KB
//! address space.
//!
//! ## Pipeline
//!
//! ```text
//! Listing → Assembler → Program → Simulator ⇄ DebuggerSession → Compositor → Terminal
//! ```
//!
//! 1. [`machine`]: the memory model and the [`machine::Simulator`],
//!    [`machine::Disassembler`] and [`machine::Assembler`] interfaces, with
//!    stand-in implementations.
//! 2. [`ui`]: off-screen surfaces, the window compositor, pane renderers and
//!    the session loop.
//! 3. [`config`]: session parameters and pane layout.
//! 4. [`cli`]: command-line parsing.
//! 5. [`errors`]: fatal error types.
//!
//! ## Redraw policy
//!
//! The memory view is one 8192-line surface, rendered in full once. After
//! each step the simulator classifies what the instruction did and only the
//! memory lines it could have touched are re-rendered and recomposited.

pub mod cli;
pub mod config;
pub mod errors;
pub mod machine;
pub mod ui;
