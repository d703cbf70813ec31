// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};
use unicode_width::UnicodeWidthChar;

/// Display width class of a single code point, as far as the line buffer cares.
///
/// The buffer stores one terminal column per code point, so only [`CharWidth::Normal`]
/// input is accepted. The other classes are reported back to the caller.
///
/// | Class     | Examples                                  | Columns |
/// |-----------|-------------------------------------------|---------|
/// | `Control` | `\t`, `\x1b`, `\u{7f}`, combining marks   | 0       |
/// | `Normal`  | `a`, `é`, `→`                             | 1       |
/// | `Wide`    | `中`, `😀`                                | 2       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharWidth {
    /// Control characters and anything else that does not advance the caret.
    Control,
    /// Occupies exactly one terminal column.
    Normal,
    /// Occupies two terminal columns (CJK, most emoji).
    Wide,
}

impl CharWidth {
    /// Classify `ch` using the Unicode East Asian Width tables.
    #[must_use]
    pub fn of(ch: char) -> Self {
        if ch.is_control() {
            return CharWidth::Control;
        }
        match ch.width() {
            Some(1) => CharWidth::Normal,
            Some(2) => CharWidth::Wide,
            _ => CharWidth::Control,
        }
    }

    /// Number of terminal columns the caret advances by.
    #[must_use]
    pub fn columns(&self) -> usize {
        match self {
            CharWidth::Control => 0,
            CharWidth::Normal => 1,
            CharWidth::Wide => 2,
        }
    }
}

impl Display for CharWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CharWidth::Control => write!(f, "control"),
            CharWidth::Normal => write!(f, "normal"),
            CharWidth::Wide => write!(f, "wide"),
        }
    }
}
