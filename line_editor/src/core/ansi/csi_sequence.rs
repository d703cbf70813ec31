// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI sequence builder for the cursor motion and erase operations used by the redraw
//! engine.

use super::constants::{CHA_CURSOR_COLUMN, CSI_START, CUB_CURSOR_BACKWARD,
                       CUD_CURSOR_DOWN, CUF_CURSOR_FORWARD, CUU_CURSOR_UP,
                       EL_ERASE_ALL, EL_ERASE_LINE, EL_ERASE_TO_END};
use std::fmt::{Display, Formatter, Result};

/// Which part of the current row an [`CsiSequence::EraseLine`] clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseLineMode {
    /// `ESC [ 0 K`.
    FromCursorToEnd,
    /// `ESC [ 2 K`.
    EntireLine,
}

impl EraseLineMode {
    #[must_use]
    pub fn as_u16(&self) -> u16 {
        match self {
            EraseLineMode::FromCursorToEnd => EL_ERASE_TO_END,
            EraseLineMode::EntireLine => EL_ERASE_ALL,
        }
    }
}

/// Builder for CSI (Control Sequence Introducer) sequences.
///
/// Note that most terminals treat a count of `0` as `1` for the relative motions, so
/// callers must never build a relative motion with a zero count. The
/// [`crate::MovementPlan`] and the redraw engine guard against this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiSequence {
    /// Cursor Up (CUU) - ESC [ n A
    CursorUp(u16),
    /// Cursor Down (CUD) - ESC [ n B
    CursorDown(u16),
    /// Cursor Forward (CUF) - ESC [ n C
    CursorForward(u16),
    /// Cursor Backward (CUB) - ESC [ n D
    CursorBackward(u16),
    /// Cursor Horizontal Absolute (CHA) - ESC [ n G
    CursorHorizontalAbsolute(u16),
    /// Erase Line (EL) - ESC [ n K
    EraseLine(EraseLineMode),
}

impl CsiSequence {
    /// `ESC [ 1 G`, move to the first column of the current row.
    pub const CURSOR_START: CsiSequence = CsiSequence::CursorHorizontalAbsolute(1);

    /// `ESC [ 0 K`.
    pub const ERASE_LINE_FROM_CURSOR: CsiSequence =
        CsiSequence::EraseLine(EraseLineMode::FromCursorToEnd);

    /// `ESC [ 2 K`.
    pub const ERASE_WHOLE_LINE: CsiSequence =
        CsiSequence::EraseLine(EraseLineMode::EntireLine);

    /// `ESC [ 1 A`.
    pub const MOVE_LINE_UP: CsiSequence = CsiSequence::CursorUp(1);

    /// `ESC [ 1 B`.
    pub const MOVE_LINE_DOWN: CsiSequence = CsiSequence::CursorDown(1);
}

impl Display for CsiSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let (param, command) = match self {
            CsiSequence::CursorUp(n) => (*n, CUU_CURSOR_UP),
            CsiSequence::CursorDown(n) => (*n, CUD_CURSOR_DOWN),
            CsiSequence::CursorForward(n) => (*n, CUF_CURSOR_FORWARD),
            CsiSequence::CursorBackward(n) => (*n, CUB_CURSOR_BACKWARD),
            CsiSequence::CursorHorizontalAbsolute(n) => (*n, CHA_CURSOR_COLUMN),
            CsiSequence::EraseLine(mode) => (mode.as_u16(), EL_ERASE_LINE),
        };
        write!(f, "{CSI_START}{param}{command}")
    }
}
