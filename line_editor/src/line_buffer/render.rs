// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{LineBuffer,
            core::as_isize,
            cursor_motion::{row_of, saturating_u16, usize_width}};
use crate::{CsiSequence, OutputSink};

impl LineBuffer {
    /// Bring the terminal in sync with the buffer, using the delta accumulated since the
    /// last render to decide how much of the screen needs erasing:
    ///
    /// - Grew or unchanged: rewrite in place, the new content covers the old.
    /// - Shrank, and the old content fit on one row: erase to the end of the row and
    ///   rewrite.
    /// - Shrank from several rows: erase every row below the first, move back up, then
    ///   rewrite.
    ///
    /// A hidden line always takes the single row path, since nothing but the prompt is
    /// ever on screen.
    ///
    /// Preconditions:
    /// - The caret must be on the first row of the rendered line. After an edit on a
    ///   wrapped line call [`LineBuffer::move_caret_to_first_row`] *before* the edit.
    /// - With an empty (or disabled) prompt a growing line is not repositioned, so the
    ///   caret must already be at column 1 or right after the old content.
    ///
    /// The caret is left after the last written character. The delta is reset to `0`.
    pub fn render(&mut self, sink: &mut dyn OutputSink, term_width: u16) {
        let width = usize_width(term_width);
        let delta = self.delta;

        if delta >= 0 {
            self.move_caret_to_start_and_print(sink, delta, false);
        } else {
            let old_total = self.total_length() + delta.unsigned_abs();
            if self.is_hidden() || old_total <= width {
                self.move_caret_to_start_and_print(sink, delta, true);
            } else {
                let rows = row_of(old_total, width);
                span_debug!(self, old_total, rows, "clearing wrapped rows");
                clear_rows_and_move_back(sink, rows);
                self.move_caret_to_start_and_print(sink, delta, false);
            }
        }

        self.delta = 0;
    }

    /// Swap the whole active line for `new_content` (history recall, completion) and
    /// render the result. The caret is first moved up to the row the prompt is on.
    /// Returns the number of code points inserted.
    pub fn render_replacement(
        &mut self,
        sink: &mut dyn OutputSink,
        new_content: &str,
        term_width: u16,
    ) -> usize {
        let old_row = self.caret_row(term_width);
        let old_size = self.size();
        let pending_delta = self.delta;

        self.clear_active();
        let inserted = self.insert_str(new_content);
        self.delta = pending_delta + as_isize(inserted) - as_isize(old_size);

        span_debug!(self, old_row, old_size, inserted, delta = self.delta, "replace line");

        move_up_rows(sink, old_row);
        self.render(sink, term_width);
        inserted
    }

    /// Zero based row the terminal caret is on when it sits on the cursor. A hidden
    /// line never moves the caret past the prompt.
    #[must_use]
    pub fn caret_row(&self, term_width: u16) -> usize {
        let pos = if self.is_hidden() {
            self.prompt_length() + 1
        } else {
            self.cursor_with_prompt()
        };
        row_of(pos, usize_width(term_width))
    }

    /// Move the caret from the cursor row up to the row the prompt starts on, which is
    /// where [`LineBuffer::render`] expects it.
    pub fn move_caret_to_first_row(&self, sink: &mut dyn OutputSink, term_width: u16) {
        move_up_rows(sink, self.caret_row(term_width));
    }

    fn move_caret_to_start_and_print(
        &self,
        sink: &mut dyn OutputSink,
        delta: isize,
        clear_line: bool,
    ) {
        let show_prompt = !self.prompt_disabled && !self.prompt.is_empty();
        if (show_prompt && self.multi_cursor() != 0) || delta < 0 {
            sink.write_str(&CsiSequence::CURSOR_START.to_string());
            if clear_line {
                sink.write_str(&CsiSequence::ERASE_LINE_FROM_CURSOR.to_string());
            }
        }
        if show_prompt {
            sink.write_str(self.prompt.ansi());
        }
        sink.write_str(&self.displayed_line());
    }
}

fn move_up_rows(sink: &mut dyn OutputSink, rows: usize) {
    for _ in 0..rows {
        sink.write_str(&CsiSequence::MOVE_LINE_UP.to_string());
    }
}

/// Erase `rows` rows below the caret and return to where it started.
fn clear_rows_and_move_back(sink: &mut dyn OutputSink, rows: usize) {
    for _ in 0..rows {
        sink.write_str(&CsiSequence::MOVE_LINE_DOWN.to_string());
        sink.write_str(&CsiSequence::ERASE_WHOLE_LINE.to_string());
    }
    if rows > 0 {
        sink.write_str(&CsiSequence::CursorUp(saturating_u16(rows)).to_string());
    }
}
