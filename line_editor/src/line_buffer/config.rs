// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Number of code points a fresh buffer can hold before its storage has to grow.
pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;

/// Construction time options for [`crate::LineBuffer`].
///
/// ```
/// use line_editor::{LineBuffer, LineBufferConfig, Prompt};
///
/// let config = LineBufferConfig::default().with_initial_capacity(64);
/// let buffer = LineBuffer::with_config(Prompt::new("> "), config);
/// assert_eq!(buffer.capacity(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBufferConfig {
    /// Storage capacity used on construction and restored by `reset`.
    pub initial_capacity: usize,
    /// When `false` the prompt is excluded from all geometry (incremental search).
    pub prompt_enabled: bool,
}

impl Default for LineBufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            prompt_enabled: true,
        }
    }
}

impl LineBufferConfig {
    /// A capacity of zero is bumped to one.
    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity.max(1);
        self
    }

    #[must_use]
    pub fn with_prompt_enabled(mut self, prompt_enabled: bool) -> Self {
        self.prompt_enabled = prompt_enabled;
        self
    }
}

/// Key binding flavor. It changes where the cursor may rest.
///
/// - [`EditMode::Emacs`]: the cursor may sit one past the last character.
/// - [`EditMode::Vi`]: the cursor rests *on* the last character, never past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Emacs,
    Vi,
}
