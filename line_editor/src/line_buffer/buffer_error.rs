// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::CharWidth;

/// Errors returned by [`crate::LineBuffer`] operations. Both are caller contract
/// violations: nothing in the buffer changes when one is returned, and nothing is
/// retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum LineBufferError {
    /// A `get` or `replace` addressed a position at or past the end of the content.
    #[error("position {pos} is out of bounds for a line of {size} code points")]
    #[diagnostic(
        code(line_editor::index_out_of_bounds),
        help("valid positions start at 0 and stop before the line size")
    )]
    IndexOutOfBounds { pos: usize, size: usize },

    /// Only single column code points can be stored. Control characters, non spacing
    /// marks, and double width characters are rejected.
    #[error("can't insert {ch:?}, {width} characters are not supported")]
    #[diagnostic(
        code(line_editor::unsupported_width),
        help("only characters that occupy exactly one terminal column can be inserted")
    )]
    UnsupportedWidth { ch: char, width: CharWidth },
}
