// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `line_editor`
//!
//! The editing buffer and incremental renderer at the heart of a readline style line
//! editor. It keeps the text a user is typing, a cursor inside it, and works out the
//! smallest amount of ANSI output needed to keep the terminal in sync after each edit,
//! including when the line wraps across several terminal rows.
//!
//! What this crate does *not* do: decide which key maps to which edit, tokenize the
//! finished line, keep history, or put the terminal in raw mode. Those belong to the
//! caller. The `line_editor_demo` example shows one way to wire them up with
//! [`crossterm`].
//!
//! # Quick start
//!
//! ```
//! use line_editor::{EditMode, LineBuffer, LogicalLine, Prompt, SinkMock};
//!
//! let mut buffer = LineBuffer::new(Prompt::new("$ "));
//! let mut sink = SinkMock::new();
//!
//! buffer.insert_str("git stats");
//! buffer.render(&mut sink, 80);
//!
//! // Fix the typo: move back one, insert, and put the caret back where it belongs.
//! let plan = buffer.move_cursor(-1, 80, EditMode::Emacs);
//! plan.write_to(&mut sink);
//! buffer.insert('u').unwrap();
//! buffer.render(&mut sink, 80);
//! buffer.caret_return_plan(80).write_to(&mut sink);
//!
//! assert_eq!(buffer.as_string(), "git status");
//! assert_eq!(
//!     buffer.commit_or_continue(),
//!     LogicalLine::Complete("git status".to_string())
//! );
//! ```
//!
//! # Modules
//!
//! - [`line_buffer`]: [`LineBuffer`], [`Prompt`], [`Masking`], [`MovementPlan`], and the
//!   redraw engine.
//! - [`core`]: the building blocks. [`CsiSequence`] for the escape sequences,
//!   [`CharWidth`] for width classification, [`OutputSink`] for output, tracing setup
//!   in [`core::log`], and the [`SinkMock`] test fixture.
//!
//! [`crossterm`]: https://docs.rs/crossterm

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod line_buffer;

// Re-export.
pub use core::*;
pub use line_buffer::*;
