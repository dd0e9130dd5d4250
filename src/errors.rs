//! Error types for the debugger
//!
//! [`DebuggerError`] covers everything that stops the program: bad command
//! lines, unreadable sources, listings that fail to load, terminals too small
//! for the layout and terminal I/O failures.
//!
//! Anomalies met while stepping (an invalid opcode, a jump into uninitialized
//! memory) are *not* errors. They come back as
//! [`ActionResult`](crate::machine::ActionResult) values and land in the
//! on-screen action log.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised before or during a session
#[derive(Debug, Error)]
pub enum DebuggerError {
    /// Missing filename or unrecognised flag
    #[error("{0}")]
    Usage(String),

    /// The source file could not be read
    #[error("cannot read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The listing loader rejected a line
    #[error("line {line}: {message}")]
    Assemble { line: usize, message: String },

    /// The physical screen cannot hold the pane layout
    #[error("terminal is {width}x{height}, need at least {min_width}x{min_height}")]
    TerminalTooSmall {
        width: usize,
        height: usize,
        min_width: usize,
        min_height: usize,
    },

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors raised by off-screen surfaces
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// A write whose origin lies outside the surface
    #[error("write at ({x}, {y}) is outside a {width}x{height} surface")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}
