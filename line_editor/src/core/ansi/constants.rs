// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Control Sequence Introducer: `ESC [`.
pub const CSI_START: &str = "\x1b[";

/// Cursor Up (CUU): `ESC [ n A`.
pub const CUU_CURSOR_UP: char = 'A';
/// Cursor Down (CUD): `ESC [ n B`.
pub const CUD_CURSOR_DOWN: char = 'B';
/// Cursor Forward (CUF): `ESC [ n C`.
pub const CUF_CURSOR_FORWARD: char = 'C';
/// Cursor Backward (CUB): `ESC [ n D`.
pub const CUB_CURSOR_BACKWARD: char = 'D';
/// Cursor Horizontal Absolute (CHA): `ESC [ n G`. Columns are 1-based.
pub const CHA_CURSOR_COLUMN: char = 'G';
/// Erase in Line (EL): `ESC [ n K`.
pub const EL_ERASE_LINE: char = 'K';

/// EL parameter: erase from the cursor to the end of the line.
pub const EL_ERASE_TO_END: u16 = 0;
/// EL parameter: erase the whole line.
pub const EL_ERASE_ALL: u16 = 2;
