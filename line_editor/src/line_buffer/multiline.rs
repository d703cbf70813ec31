// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::LineBuffer;

/// Marker that continues a logical line onto the next displayed row: a space followed
/// by a backslash at the very end of the active line.
pub const CONTINUATION_MARKER: [char; 2] = [' ', '\\'];

/// Outcome of [`LineBuffer::commit_or_continue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalLine {
    /// The active line ended with the continuation marker. Its content (marker
    /// included) is now pending and the active line is empty.
    Continued,
    /// The logical line is finished. Holds every pending segment followed by the
    /// active line.
    Complete(String),
}

/// Segments of a logical line that were continued with [`CONTINUATION_MARKER`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct MultilineAccumulator {
    segments: Vec<char>,
}

impl MultilineAccumulator {
    pub(super) fn len(&self) -> usize { self.segments.len() }

    pub(super) fn is_empty(&self) -> bool { self.segments.is_empty() }

    pub(super) fn as_slice(&self) -> &[char] { &self.segments }

    pub(super) fn push_segment(&mut self, segment: &[char]) {
        self.segments.extend_from_slice(segment);
    }

    pub(super) fn clear(&mut self) { self.segments.clear(); }
}

impl LineBuffer {
    /// Called when the user presses enter. Either parks the active line as a pending
    /// segment (it ends with `" \"`) or hands back the whole logical line and starts
    /// over with an empty buffer.
    ///
    /// ```
    /// use line_editor::{LineBuffer, LogicalLine, Prompt};
    ///
    /// let mut buffer = LineBuffer::new(Prompt::new("> "));
    /// buffer.insert_str("echo \\");
    /// assert_eq!(buffer.commit_or_continue(), LogicalLine::Continued);
    /// buffer.insert_str("done");
    /// assert_eq!(
    ///     buffer.commit_or_continue(),
    ///     LogicalLine::Complete("echo \\done".to_string())
    /// );
    /// ```
    pub fn commit_or_continue(&mut self) -> LogicalLine {
        if self.ends_with_continuation() {
            self.multi_line.push_segment(self.line.as_slice());
            self.clear_active();
            span_debug!(self, pending = self.multi_line.len(), "continuing logical line");
            return LogicalLine::Continued;
        }

        let complete: String = self
            .multi_line
            .as_slice()
            .iter()
            .chain(self.line.as_slice())
            .collect();
        self.multi_line.clear();
        self.clear_active();
        self.delta = 0;
        span_debug!(self, len = complete.len(), "logical line complete");
        LogicalLine::Complete(complete)
    }

    /// Whether continuation segments are pending.
    #[must_use]
    pub fn is_multi_line(&self) -> bool { !self.multi_line.is_empty() }

    /// Discard pending continuation segments, eg: when the user cancels with Ctrl+C.
    pub fn flush_multi_line(&mut self) { self.multi_line.clear(); }

    /// Cursor position counting pending segments ahead of the active line.
    #[must_use]
    pub fn multi_cursor(&self) -> usize { self.multi_line.len() + self.cursor }

    fn ends_with_continuation(&self) -> bool {
        self.line.as_slice().ends_with(&CONTINUATION_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Prompt, SinkMock, assert_eq2};

    #[test]
    fn test_continuation_moves_content_to_accumulator() {
        let mut buffer = LineBuffer::new(Prompt::new("> "));
        buffer.insert_str("echo foo \\");
        assert_eq2!(buffer.commit_or_continue(), LogicalLine::Continued);
        assert!(buffer.is_empty());
        assert_eq2!(buffer.cursor(), 0);
        assert!(buffer.is_multi_line());
        assert_eq2!(buffer.multi_cursor(), 10);
        assert_eq2!(buffer.displayed_line(), "echo foo \\");
    }

    #[test]
    fn test_marker_needs_preceding_space() {
        let mut buffer = LineBuffer::default();
        buffer.insert_str("foo\\");
        assert_eq2!(
            buffer.commit_or_continue(),
            LogicalLine::Complete("foo\\".into())
        );

        buffer.insert_str("\\");
        assert_eq2!(buffer.commit_or_continue(), LogicalLine::Complete("\\".into()));
        assert!(!buffer.is_multi_line());
    }

    #[test]
    fn test_complete_joins_segments_and_resets() {
        let mut buffer = LineBuffer::default();
        buffer.insert_str("a \\");
        buffer.commit_or_continue();
        buffer.insert_str("b \\");
        buffer.commit_or_continue();
        buffer.insert_str("c");

        assert_eq2!(buffer.displayed_line(), "a \\b \\c");
        assert_eq2!(buffer.total_length(), 8);
        assert_eq2!(
            buffer.commit_or_continue(),
            LogicalLine::Complete("a \\b \\c".into())
        );
        assert!(!buffer.is_multi_line());
        assert!(buffer.is_empty());
        assert_eq2!(buffer.delta(), 0);
        assert_eq2!(buffer.total_length(), 1);
    }

    #[test]
    fn test_edits_only_touch_active_line() {
        let mut buffer = LineBuffer::default();
        buffer.insert_str("ab \\");
        buffer.commit_or_continue();
        buffer.insert_str("cd");
        assert_eq2!(buffer.delete(-10), 2);
        assert_eq2!(buffer.displayed_line(), "ab \\");
        assert_eq2!(buffer.get(0).ok(), None);
    }

    #[test]
    fn test_render_includes_pending_segments() {
        let mut buffer = LineBuffer::new(Prompt::new("> "));
        buffer.insert_str("ls \\");
        buffer.commit_or_continue();
        buffer.insert_str("-la");

        let mut sink = SinkMock::new();
        buffer.render(&mut sink, 80);
        assert_eq2!(sink.get_copy_of_buffer_as_string(), "\x1b[1G> ls \\-la");
        assert_eq2!(buffer.cursor_with_prompt(), 10);
    }

    #[test]
    fn test_flush_multi_line() {
        let mut buffer = LineBuffer::default();
        buffer.insert_str("x \\");
        buffer.commit_or_continue();
        buffer.flush_multi_line();
        assert!(!buffer.is_multi_line());
        assert_eq2!(buffer.multi_cursor(), 0);
    }
}
