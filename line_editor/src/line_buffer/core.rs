// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CodePoints, LineBufferConfig, LineBufferError, Masking, Prompt,
            multiline::MultilineAccumulator};
use crate::{CharWidth, ok};
use std::cmp::Ordering;

/// The editable line: code points, a cursor into them, the prompt they follow, and
/// the bookkeeping the redraw engine needs.
///
/// Invariant: `0 <= cursor <= size <= capacity`.
///
/// The `impl` blocks are spread across several files:
/// - This file: construction, accessors, and cursor relative edits.
/// - `cursor_motion.rs`: [`LineBuffer::move_cursor`] and caret planning.
/// - `render.rs`: [`LineBuffer::render`] and [`LineBuffer::render_replacement`].
/// - `multiline.rs`: [`LineBuffer::commit_or_continue`] and friends.
///
/// ```
/// use line_editor::{LineBuffer, Prompt, SinkMock};
///
/// let mut buffer = LineBuffer::new(Prompt::new("> "));
/// buffer.insert_str("hello");
/// let mut sink = SinkMock::new();
/// buffer.render(&mut sink, 80);
/// assert_eq!(sink.get_copy_of_buffer_as_string_strip_ansi(), "> hello");
/// ```
#[derive(Debug, Clone)]
pub struct LineBuffer {
    pub(super) line: CodePoints,
    pub(super) cursor: usize,
    pub(super) prompt: Prompt,
    pub(super) prompt_disabled: bool,
    /// Net change in rendered length since the last render.
    pub(super) delta: isize,
    pub(super) multi_line: MultilineAccumulator,
    pub(super) config: LineBufferConfig,
    pub(super) log_span: tracing::Span,
}

impl Default for LineBuffer {
    fn default() -> Self { Self::new(Prompt::default()) }
}

impl LineBuffer {
    #[must_use]
    pub fn new(prompt: Prompt) -> Self { Self::with_config(prompt, LineBufferConfig::default()) }

    #[must_use]
    pub fn with_config(prompt: Prompt, config: LineBufferConfig) -> Self {
        Self {
            line: CodePoints::with_capacity(config.initial_capacity),
            cursor: 0,
            prompt,
            prompt_disabled: !config.prompt_enabled,
            delta: 0,
            multi_line: MultilineAccumulator::default(),
            config,
            log_span: tracing::Span::none(),
        }
    }

    /// Parent span for the `debug` events this buffer emits. The default
    /// [`tracing::Span::none`] silences them.
    #[must_use]
    pub fn with_log_span(mut self, log_span: tracing::Span) -> Self {
        self.log_span = log_span;
        self
    }
}

/// Accessors.
impl LineBuffer {
    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn size(&self) -> usize { self.line.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.line.is_empty() }

    #[must_use]
    pub fn capacity(&self) -> usize { self.line.capacity() }

    #[must_use]
    pub fn delta(&self) -> isize { self.delta }

    #[must_use]
    pub fn prompt(&self) -> &Prompt { &self.prompt }

    #[must_use]
    pub fn config(&self) -> &LineBufferConfig { &self.config }

    /// Replace the prompt. Geometry is computed from the new prompt from now on.
    pub fn set_prompt(&mut self, prompt: Prompt) { self.prompt = prompt; }

    /// Exclude the prompt from all geometry, used while an incremental search prompt is
    /// shown in its place.
    pub fn set_prompt_disabled(&mut self, disabled: bool) { self.prompt_disabled = disabled; }

    #[must_use]
    pub fn is_prompt_disabled(&self) -> bool { self.prompt_disabled }

    /// Columns taken by the prompt, `0` while it is disabled.
    #[must_use]
    pub fn prompt_length(&self) -> usize {
        if self.prompt_disabled {
            0
        } else {
            self.prompt.length()
        }
    }

    /// Bound for cursor motion. A hidden line always reports `1`.
    #[must_use]
    pub fn length(&self) -> usize {
        if self.is_hidden() { 1 } else { self.line.len() }
    }

    /// Rendered length of prompt and content, plus one for the caret. A hidden line
    /// contributes no content, so this only depends on the prompt.
    #[must_use]
    pub fn total_length(&self) -> usize {
        let content = if self.is_hidden() { 0 } else { self.effective_size() };
        content + self.prompt_length() + 1
    }

    /// Unmasked content of the active line.
    #[must_use]
    pub fn as_string(&self) -> String { self.line.to_string() }

    /// Unmasked content from `pos` to the end. `pos == size()` yields an empty string.
    ///
    /// # Errors
    ///
    /// [`LineBufferError::IndexOutOfBounds`] if `pos > size()`.
    pub fn line_from(&self, pos: usize) -> Result<String, LineBufferError> {
        self.line
            .as_slice()
            .get(pos..)
            .map(|tail| tail.iter().collect())
            .ok_or(LineBufferError::IndexOutOfBounds {
                pos,
                size: self.size(),
            })
    }

    /// What is actually written to the terminal after the prompt: pending continuation
    /// segments followed by the active line, with masking applied.
    #[must_use]
    pub fn displayed_line(&self) -> String {
        match self.prompt.masking() {
            Masking::None => self
                .multi_line
                .as_slice()
                .iter()
                .chain(self.line.as_slice())
                .collect(),
            Masking::Substitute(mask) => {
                std::iter::repeat_n(mask, self.effective_size()).collect()
            }
            Masking::Hidden => String::new(),
        }
    }

    pub(super) fn is_hidden(&self) -> bool { self.prompt.masking().is_hidden() }

    /// Pending continuation segments plus the active line.
    pub(super) fn effective_size(&self) -> usize { self.multi_line.len() + self.line.len() }
}

/// Positional access.
impl LineBuffer {
    /// # Errors
    ///
    /// [`LineBufferError::IndexOutOfBounds`] if `pos >= size()`.
    pub fn get(&self, pos: usize) -> Result<char, LineBufferError> {
        self.line.get(pos).ok_or(LineBufferError::IndexOutOfBounds {
            pos,
            size: self.size(),
        })
    }

    /// Overwrite one code point. Size, cursor, and delta are unchanged.
    ///
    /// # Errors
    ///
    /// [`LineBufferError::IndexOutOfBounds`] if `pos >= size()`.
    pub fn replace(&mut self, pos: usize, ch: char) -> Result<(), LineBufferError> {
        if !self.line.set(pos, ch) {
            return Err(LineBufferError::IndexOutOfBounds {
                pos,
                size: self.size(),
            });
        }
        ok!()
    }

    /// # Errors
    ///
    /// [`LineBufferError::IndexOutOfBounds`] if the cursor is at the end of the line.
    pub fn replace_at_cursor(&mut self, ch: char) -> Result<(), LineBufferError> {
        self.replace(self.cursor, ch)
    }
}

/// Cursor relative edits.
impl LineBuffer {
    /// Insert one code point at the cursor and advance past it.
    ///
    /// # Errors
    ///
    /// [`LineBufferError::UnsupportedWidth`] for anything that is not exactly one
    /// column wide. The buffer is left untouched.
    pub fn insert(&mut self, ch: char) -> Result<(), LineBufferError> {
        self.insert_without_delta(ch)?;
        self.delta += 1;
        ok!()
    }

    /// Insert every supported code point in order. Unsupported ones are skipped.
    /// Returns how many were inserted, which is also what the delta grows by.
    pub fn insert_all(&mut self, chars: impl IntoIterator<Item = char>) -> usize {
        let mut inserted = 0;
        for ch in chars {
            match self.insert_without_delta(ch) {
                Ok(()) => inserted += 1,
                Err(error) => span_debug!(self, %error, "skipping code point"),
            }
        }
        self.delta += as_isize(inserted);
        inserted
    }

    pub fn insert_str(&mut self, text: &str) -> usize { self.insert_all(text.chars()) }

    /// Dispatcher entry point for a single typed character. Unsupported characters are
    /// dropped.
    pub fn write_char(&mut self, ch: char) {
        if let Err(error) = self.insert(ch) {
            span_debug!(self, %error, "dropping typed character");
        }
    }

    /// Dispatcher entry point for pasted text.
    pub fn write_str(&mut self, text: &str) { self.insert_str(text); }

    fn insert_without_delta(&mut self, ch: char) -> Result<(), LineBufferError> {
        match CharWidth::of(ch) {
            CharWidth::Normal => {
                self.line.insert_at(self.cursor, ch);
                self.cursor += 1;
                ok!()
            }
            width => Err(LineBufferError::UnsupportedWidth { ch, width }),
        }
    }

    /// Positive `count` deletes forward from the cursor, negative deletes backward and
    /// moves the cursor back. Both are clamped to what exists. Returns how many code
    /// points were removed.
    pub fn delete(&mut self, count: isize) -> usize {
        let requested = count.unsigned_abs();
        let deleted = match count.cmp(&0) {
            Ordering::Greater => self.line.remove_range(self.cursor, requested),
            Ordering::Less => {
                let deleted = requested.min(self.cursor);
                self.cursor -= deleted;
                self.line.remove_range(self.cursor, deleted)
            }
            Ordering::Equal => 0,
        };
        self.delta -= as_isize(deleted);
        span_debug!(self, count, deleted, cursor = self.cursor, "delete");
        deleted
    }

    /// Swap the case of the letter under the cursor.
    pub fn change_case(&mut self) {
        self.map_letter_at_cursor(|ch| {
            if ch.is_lowercase() {
                single(ch.to_uppercase())
            } else {
                single(ch.to_lowercase())
            }
        });
    }

    pub fn up_case(&mut self) { self.map_letter_at_cursor(|ch| single(ch.to_uppercase())); }

    pub fn low_case(&mut self) { self.map_letter_at_cursor(|ch| single(ch.to_lowercase())); }

    /// Non letters, a cursor at the end, and case mappings that expand to several code
    /// points (eg: `ß` to `SS`) leave the line unchanged.
    fn map_letter_at_cursor(&mut self, map: impl FnOnce(char) -> Option<char>) {
        if let Some(ch) = self.line.get(self.cursor)
            && ch.is_alphabetic()
            && let Some(mapped) = map(ch)
        {
            self.line.set(self.cursor, mapped);
        }
    }

    /// Drop all content, pending continuation segments included, go back to the
    /// configured capacity, and forget the delta.
    pub fn reset(&mut self) {
        self.line = CodePoints::with_capacity(self.config.initial_capacity);
        self.multi_line.clear();
        self.cursor = 0;
        self.delta = 0;
    }

    /// Empty the active line without touching the allocation or the delta.
    pub(super) fn clear_active(&mut self) {
        self.line.clear();
        self.cursor = 0;
    }
}

fn single(mut it: impl Iterator<Item = char>) -> Option<char> {
    let first = it.next()?;
    it.next().is_none().then_some(first)
}

pub(super) fn as_isize(value: usize) -> isize { isize::try_from(value).unwrap_or(isize::MAX) }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    fn buffer_with(text: &str) -> LineBuffer {
        let mut buffer = LineBuffer::new(Prompt::new("$ "));
        buffer.insert_str(text);
        buffer
    }

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = LineBuffer::default();
        assert!(buffer.is_empty());
        assert_eq2!(buffer.cursor(), 0);
        assert_eq2!(buffer.delta(), 0);
        assert_eq2!(buffer.capacity(), crate::DEFAULT_INITIAL_CAPACITY);
        assert_eq2!(buffer.total_length(), 1);
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut buffer = buffer_with("ac");
        buffer.cursor = 1;
        buffer.insert('b').unwrap();
        assert_eq2!(buffer.as_string(), "abc");
        assert_eq2!(buffer.cursor(), 2);
        assert_eq2!(buffer.delta(), 3);
    }

    #[test_case('\t', CharWidth::Control ; "tab")]
    #[test_case('\x1b', CharWidth::Control ; "escape")]
    #[test_case('中', CharWidth::Wide ; "cjk")]
    fn test_insert_rejects_unsupported_width(ch: char, width: CharWidth) {
        let mut buffer = buffer_with("ab");
        let result = buffer.insert(ch);
        assert_eq2!(result, Err(LineBufferError::UnsupportedWidth { ch, width }));
        assert_eq2!(buffer.as_string(), "ab");
        assert_eq2!(buffer.cursor(), 2);
        assert_eq2!(buffer.delta(), 2);
    }

    #[test]
    fn test_insert_all_skips_unsupported() {
        let mut buffer = LineBuffer::default();
        let inserted = buffer.insert_str("a\tb中c");
        assert_eq2!(inserted, 3);
        assert_eq2!(buffer.as_string(), "abc");
        assert_eq2!(buffer.delta(), 3);
    }

    #[test]
    fn test_write_char_drops_control() {
        let mut buffer = LineBuffer::default();
        buffer.write_char('x');
        buffer.write_char('\u{7}');
        buffer.write_str("yz");
        assert_eq2!(buffer.as_string(), "xyz");
    }

    #[test]
    fn test_get_and_replace_bounds() {
        let mut buffer = buffer_with("abc");
        assert_eq2!(buffer.get(2), Ok('c'));
        assert_eq2!(
            buffer.get(3),
            Err(LineBufferError::IndexOutOfBounds { pos: 3, size: 3 })
        );
        assert_eq2!(buffer.replace(0, 'X'), Ok(()));
        assert_eq2!(buffer.get(0), Ok('X'));
        assert_eq2!(
            buffer.replace(3, 'Y'),
            Err(LineBufferError::IndexOutOfBounds { pos: 3, size: 3 })
        );
        assert_eq2!(buffer.as_string(), "Xbc");
        assert_eq2!(buffer.cursor(), 3);
    }

    #[test]
    fn test_replace_at_cursor() {
        let mut buffer = buffer_with("abc");
        assert!(buffer.replace_at_cursor('z').is_err());
        buffer.cursor = 1;
        buffer.replace_at_cursor('z').unwrap();
        assert_eq2!(buffer.as_string(), "azc");
    }

    #[test]
    fn test_delete_forward_is_clamped() {
        let mut buffer = buffer_with("hello");
        buffer.cursor = 3;
        buffer.delta = 0;
        assert_eq2!(buffer.delete(10), 2);
        assert_eq2!(buffer.as_string(), "hel");
        assert_eq2!(buffer.cursor(), 3);
        assert_eq2!(buffer.delta(), -2);
    }

    #[test]
    fn test_delete_backward_is_clamped() {
        let mut buffer = buffer_with("hello");
        buffer.cursor = 2;
        buffer.delta = 0;
        assert_eq2!(buffer.delete(-10), 2);
        assert_eq2!(buffer.as_string(), "llo");
        assert_eq2!(buffer.cursor(), 0);
        assert_eq2!(buffer.delta(), -2);
    }

    #[test]
    fn test_delete_zero_is_noop() {
        let mut buffer = buffer_with("hello");
        assert_eq2!(buffer.delete(0), 0);
        assert_eq2!(buffer.as_string(), "hello");
        assert_eq2!(buffer.delta(), 5);
    }

    #[test]
    fn test_insert_then_forward_delete_restores() {
        let mut buffer = buffer_with("abcdef");
        buffer.cursor = 2;
        buffer.insert_str("XYZ");
        buffer.cursor = 2;
        buffer.delete(3);
        assert_eq2!(buffer.as_string(), "abcdef");
    }

    #[test]
    fn test_case_operations() {
        let mut buffer = buffer_with("aB1ß");
        buffer.cursor = 0;
        buffer.change_case();
        assert_eq2!(buffer.as_string(), "AB1ß");
        buffer.cursor = 1;
        buffer.low_case();
        assert_eq2!(buffer.as_string(), "Ab1ß");
        buffer.cursor = 2;
        buffer.up_case();
        assert_eq2!(buffer.as_string(), "Ab1ß");
        buffer.cursor = 3;
        buffer.up_case();
        assert_eq2!(buffer.as_string(), "Ab1ß");
        buffer.cursor = 4;
        buffer.change_case();
        assert_eq2!(buffer.as_string(), "Ab1ß");
    }

    #[test]
    fn test_lengths_with_masking() {
        let mut buffer = buffer_with("secret");
        assert_eq2!(buffer.length(), 6);
        assert_eq2!(buffer.total_length(), 9);

        buffer.set_prompt(Prompt::masked("$ ", '*'));
        assert_eq2!(buffer.length(), 6);
        assert_eq2!(buffer.displayed_line(), "******");

        buffer.set_prompt(Prompt::masked("$ ", '\0'));
        assert_eq2!(buffer.length(), 1);
        assert_eq2!(buffer.total_length(), 3);
        assert_eq2!(buffer.displayed_line(), "");
        assert_eq2!(buffer.as_string(), "secret");
    }

    #[test]
    fn test_prompt_disabled_geometry() {
        let mut buffer = buffer_with("abc");
        buffer.set_prompt_disabled(true);
        assert_eq2!(buffer.prompt_length(), 0);
        assert_eq2!(buffer.total_length(), 4);
        buffer.set_prompt_disabled(false);
        assert_eq2!(buffer.total_length(), 6);

        let config = LineBufferConfig::default().with_prompt_enabled(false);
        let buffer = LineBuffer::with_config(Prompt::new("$ "), config);
        assert!(buffer.is_prompt_disabled());
    }

    #[test]
    fn test_line_from() {
        let buffer = buffer_with("hello");
        assert_eq2!(buffer.line_from(2).unwrap(), "llo");
        assert_eq2!(buffer.line_from(5).unwrap(), "");
        assert!(buffer.line_from(6).is_err());
    }

    #[test]
    fn test_reset_restores_capacity() {
        let config = LineBufferConfig::default().with_initial_capacity(4);
        let mut buffer = LineBuffer::with_config(Prompt::default(), config);
        buffer.insert_str("more than four");
        assert!(buffer.capacity() > 4);
        buffer.reset();
        assert!(buffer.is_empty());
        assert_eq2!(buffer.cursor(), 0);
        assert_eq2!(buffer.delta(), 0);
        assert_eq2!(buffer.capacity(), 4);
    }

    #[test]
    fn test_reset_drops_pending_segments() {
        let mut buffer = buffer_with("first \\");
        buffer.commit_or_continue();
        buffer.insert_str("second");
        assert!(buffer.is_multi_line());

        buffer.reset();
        assert!(!buffer.is_multi_line());
        assert_eq2!(buffer.multi_cursor(), 0);
        assert_eq2!(buffer.displayed_line(), "");
        assert_eq2!(buffer.total_length(), 3);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = buffer_with("abc");
        let mut copy = original.clone();
        copy.insert('d').unwrap();
        assert_eq2!(original.as_string(), "abc");
        assert_eq2!(copy.as_string(), "abcd");
        assert_eq2!(copy.prompt(), original.prompt());
    }
}
