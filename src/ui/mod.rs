//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized in layers, leaves first:
//!
//! - **[`surface`]**: off-screen character buffers
//! - **[`compositor`]**: windows anchored on the screen or nested inside each
//!   other, composited and flushed to the terminal
//! - **[`panes`]**: stateless render functions for each pane (commands,
//!   registers, action log, memory dump)
//! - **[`scroll`]**: line and page movement of the memory view
//! - **[`app`]**: the debugger session, its key table and redraw policy
//! - **[`terminal`]**: raw-mode guard and the input event source
//! - **[`theme`]**: colors applied when surfaces reach the screen
//!
//! The entry point for consumers is [`DebuggerSession`]: construct it with a
//! simulator, a disassembler and a [`CompositeWindowManager`], then call
//! [`DebuggerSession::run`].

pub mod app;
pub mod compositor;
pub mod panes;
pub mod scroll;
pub mod surface;
pub mod terminal;
pub mod theme;

pub use app::{Command, DebuggerSession, Flow, Pane};
pub use compositor::{CompositeWindowManager, WindowId};
pub use surface::VirtualSurface;
