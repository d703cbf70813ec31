// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_width::UnicodeWidthStr;

/// Enum representing different methods for calculating the printable length of a
/// string.
///
/// # Variants
///
/// - `StripAnsi`: Calculates the length of the string after stripping ANSI escape
///   sequences. Use this for colored prompts.
/// - `Unicode`: Calculates the Unicode width of the string as is.
///
/// # Example
/// ```
/// use line_editor::StringLength;
/* cspell:disable-next-line */
/// let input = "\u{1b}[31mfoo\u{1b}[0m";
/// assert_eq!(StringLength::StripAnsi.calculate(input), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringLength {
    StripAnsi,
    Unicode,
}

impl StringLength {
    #[must_use]
    pub fn calculate(&self, input: &str) -> usize {
        match self {
            StringLength::Unicode => input.width(),
            StringLength::StripAnsi => strip_ansi_escapes::strip_str(input).width(),
        }
    }
}
