// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Line editing buffer and its incremental renderer.
//!
//! [`LineBuffer`] holds the code points a user is typing, a cursor into them, and the
//! [`Prompt`] they are typed after. An input dispatcher (not part of this crate) calls
//! the mutation methods in response to key presses and then asks the buffer to render
//! itself into an [`OutputSink`].
//!
//! # Architecture
//!
//! The module is organized by functional responsibility:
//!
//! | Module          | Responsibility                                              |
//! |-----------------|-------------------------------------------------------------|
//! | `code_points`   | Growable storage with explicit shift helpers                |
//! | `core`          | [`LineBuffer`] struct, cursor relative edits, lengths       |
//! | `cursor_motion` | Clamped cursor moves and the row/column [`MovementPlan`]    |
//! | `render`        | Delta driven redraw, single row and multi row paths         |
//! | `multiline`     | Backslash continued input across several displayed rows     |
//! | `prompt`        | Prompt text, its colored form, and [`Masking`]              |
//!
//! # Delta
//!
//! Every mutation updates a signed delta: the net change in rendered length since the
//! last render. The redraw engine compares it against the terminal width to decide
//! whether a cheap rewrite is enough or whether rows below the new content need to be
//! erased. Rendering resets it to zero.
//!
//! [`OutputSink`]: crate::OutputSink

/// Emit a `debug` event parented to a buffer's log span. Nothing is emitted while the
/// span is disabled, which is always the case for the default [`tracing::Span::none`].
macro_rules! span_debug {
    ($buffer:expr, $($arg:tt)+) => {
        if !$buffer.log_span.is_disabled() {
            tracing::debug!(parent: &$buffer.log_span, $($arg)+);
        }
    };
}

// Private modules organized by functional responsibility.
mod buffer_error;
mod code_points;
mod config;
mod core;
mod cursor_motion;
mod multiline;
mod prompt;
mod render;

// Public re-exports (expose stable API).
pub use buffer_error::*;
pub use code_points::*;
pub use config::*;
pub use core::*;
pub use cursor_motion::*;
pub use multiline::*;
pub use prompt::*;
