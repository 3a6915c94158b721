//! Interactive console front end.
//!
//! Mirrors a design form over stdin/stdout: editable input fields with
//! defaults, and Calculate, Reset and Export actions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Transport  │───▶│   Console   │───▶│   Session   │
//! │   (lines)   │◀───│  (commands) │◀───│   (state)   │
//! └─────────────┘    └─────────────┘    └─────────────┘
//! ```
//!
//! Each command runs to completion before the next line is read.

pub mod command;
pub mod shell;
pub mod transport;

pub use command::Command;
pub use shell::{Console, ConsoleState};
pub use transport::{LineTransport, StdioTransport};
