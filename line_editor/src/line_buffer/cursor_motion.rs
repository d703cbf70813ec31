// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{EditMode, LineBuffer, core::as_isize};
use crate::{CsiSequence, OutputSink};
use smallvec::SmallVec;
use std::{cmp::Ordering,
          fmt::{Display, Formatter, Result}};

/// Terminal caret movement that keeps the screen in sync with a cursor change. At most
/// two sequences: a row move followed by an absolute column, or a single column move.
///
/// Relative motions with a count of `0` are never stored, since terminals treat them
/// as `1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovementPlan {
    sequences: SmallVec<[CsiSequence; 2]>,
}

impl MovementPlan {
    /// Plan that moves the caret from one absolute position to another, both counted
    /// in columns from the start of the first row (the prompt starts at `1`).
    #[must_use]
    pub fn between(from: usize, to: usize, width: usize) -> Self {
        let mut plan = Self::default();
        let row_delta = as_isize(row_of(to, width)) - as_isize(row_of(from, width));
        let column = CsiSequence::CursorHorizontalAbsolute(saturating_u16(column_of(to, width)));
        match row_delta.cmp(&0) {
            Ordering::Greater => {
                plan.push(CsiSequence::CursorDown(saturating_u16(row_delta.unsigned_abs())));
                plan.push(column);
            }
            Ordering::Less => {
                plan.push(CsiSequence::CursorUp(saturating_u16(row_delta.unsigned_abs())));
                plan.push(column);
            }
            Ordering::Equal => match to.cmp(&from) {
                Ordering::Greater => plan.push(CsiSequence::CursorForward(saturating_u16(to - from))),
                Ordering::Less => plan.push(CsiSequence::CursorBackward(saturating_u16(from - to))),
                Ordering::Equal => {}
            },
        }
        plan
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.sequences.is_empty() }

    #[must_use]
    pub fn len(&self) -> usize { self.sequences.len() }

    #[must_use]
    pub fn sequences(&self) -> &[CsiSequence] { &self.sequences }

    pub fn write_to(&self, sink: &mut dyn OutputSink) {
        if !self.is_empty() {
            sink.write_str(&self.to_string());
        }
    }

    fn push(&mut self, sequence: CsiSequence) {
        let zero_motion = matches!(
            sequence,
            CsiSequence::CursorUp(0)
                | CsiSequence::CursorDown(0)
                | CsiSequence::CursorForward(0)
                | CsiSequence::CursorBackward(0)
        );
        if !zero_motion {
            self.sequences.push(sequence);
        }
    }
}

impl Display for MovementPlan {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for sequence in &self.sequences {
            write!(f, "{sequence}")?;
        }
        Ok(())
    }
}

impl LineBuffer {
    /// Move the cursor by `displacement` code points, clamped to the line, and return
    /// the caret movement that mirrors it on screen.
    ///
    /// [`EditMode::Vi`] keeps the cursor on the last character instead of past it. A
    /// hidden line moves the logical cursor but always returns an empty plan.
    pub fn move_cursor(
        &mut self,
        displacement: isize,
        term_width: u16,
        edit_mode: EditMode,
    ) -> MovementPlan {
        let width = usize_width(term_width);
        let from = self.cursor_with_prompt();

        let upper = match edit_mode {
            EditMode::Emacs => self.length(),
            EditMode::Vi => self.length().saturating_sub(1),
        };
        let target = as_isize(self.cursor)
            .saturating_add(displacement)
            .clamp(0, as_isize(upper));
        self.cursor = usize::try_from(target).unwrap_or_default();

        span_debug!(
            self,
            displacement,
            cursor = self.cursor,
            term_width,
            ?edit_mode,
            "move cursor"
        );

        if self.is_hidden() {
            return MovementPlan::default();
        }
        MovementPlan::between(from, self.cursor_with_prompt(), width)
    }

    /// Caret movement from the end of freshly rendered content back to the cursor.
    /// Nothing in the buffer changes.
    #[must_use]
    pub fn caret_return_plan(&self, term_width: u16) -> MovementPlan {
        if self.is_hidden() {
            return MovementPlan::default();
        }
        MovementPlan::between(
            self.total_length(),
            self.cursor_with_prompt(),
            usize_width(term_width),
        )
    }

    /// Absolute caret position of the cursor: pending continuation segments, the
    /// prompt (unless disabled), and one for the first column.
    #[must_use]
    pub fn cursor_with_prompt(&self) -> usize {
        self.multi_cursor() + self.prompt_length() + 1
    }
}

/// Zero based row that absolute position `pos` lands on. A position that is an exact
/// non zero multiple of `width` is the last column of the previous row.
#[must_use]
pub fn row_of(pos: usize, width: usize) -> usize {
    let width = width.max(1);
    let row = pos / width;
    if row > 0 && pos.is_multiple_of(width) { row - 1 } else { row }
}

/// One based column for absolute position `pos`.
#[must_use]
pub fn column_of(pos: usize, width: usize) -> usize {
    let width = width.max(1);
    match pos % width {
        0 if pos > 0 => width,
        column => column,
    }
}

pub(super) fn usize_width(term_width: u16) -> usize { usize::from(term_width.max(1)) }

pub(super) fn saturating_u16(value: usize) -> u16 { u16::try_from(value).unwrap_or(u16::MAX) }
