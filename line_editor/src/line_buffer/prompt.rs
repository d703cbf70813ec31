// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::StringLength;
use std::sync::Arc;

/// How typed content is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Masking {
    /// Content is shown as typed.
    #[default]
    None,
    /// Nothing is shown, and the buffer reports a fixed length so that cursor motion
    /// and redraw never leak how much has been typed.
    Hidden,
    /// Every character is displayed as the given substitute, eg: `*`.
    Substitute(char),
}

impl Masking {
    /// Mask character convention used by prompt configuration: `'\0'` means
    /// [`Masking::Hidden`], anything else is a substitute.
    #[must_use]
    pub fn from_mask_char(mask: char) -> Self {
        if mask == '\0' {
            Masking::Hidden
        } else {
            Masking::Substitute(mask)
        }
    }

    #[must_use]
    pub fn is_masking(&self) -> bool { !matches!(self, Masking::None) }

    #[must_use]
    pub fn is_hidden(&self) -> bool { matches!(self, Masking::Hidden) }
}

/// The text shown before the editable content, plus the [`Masking`] that applies to
/// what is typed after it.
///
/// All string fields are [`Arc<str>`] so cloning a prompt (which the buffer does when
/// it is cloned) does not copy the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    text: Arc<str>,
    ansi: Arc<str>,
    length: usize,
    masking: Masking,
}

impl Default for Prompt {
    fn default() -> Self { Self::new("") }
}

impl Prompt {
    /// Plain prompt, written to the terminal as is.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: Arc::from(text),
            ansi: Arc::from(text),
            length: StringLength::StripAnsi.calculate(text),
            masking: Masking::None,
        }
    }

    /// Prompt with a separately styled form. `ansi` is what gets written, while `text`
    /// is the plain form, and its display width is the printable length.
    #[must_use]
    pub fn with_ansi(text: &str, ansi: &str) -> Self {
        Self {
            text: Arc::from(text),
            ansi: Arc::from(ansi),
            length: StringLength::Unicode.calculate(text),
            masking: Masking::None,
        }
    }

    /// Shorthand for a password style prompt, see [`Masking::from_mask_char`].
    #[must_use]
    pub fn masked(text: &str, mask: char) -> Self {
        Self::new(text).with_masking(Masking::from_mask_char(mask))
    }

    #[must_use]
    pub fn with_masking(mut self, masking: Masking) -> Self {
        self.masking = masking;
        self
    }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn ansi(&self) -> &str { &self.ansi }

    /// Number of terminal columns the prompt occupies.
    #[must_use]
    pub fn length(&self) -> usize { self.length }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.length == 0 }

    #[must_use]
    pub fn masking(&self) -> Masking { self.masking }
}
