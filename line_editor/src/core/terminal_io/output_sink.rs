// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Write};

/// Append only, ordered destination for the bytes produced by the redraw engine.
///
/// Writes are synchronous and assumed to succeed. Back pressure and I/O failures are
/// the concern of whoever owns the sink, see [`IoSink`] for a wrapper that keeps the
/// first failure around for inspection.
pub trait OutputSink {
    fn write(&mut self, bytes: &[u8]);

    fn write_str(&mut self, text: &str) { self.write(text.as_bytes()); }
}

impl OutputSink for Vec<u8> {
    fn write(&mut self, bytes: &[u8]) { self.extend_from_slice(bytes); }
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn write(&mut self, bytes: &[u8]) { (**self).write(bytes); }
}

/// Adapts any [`Write`] into an [`OutputSink`].
///
/// The first error is recorded, and every write after it is skipped until the error is
/// taken with [`IoSink::take_error`]. Nothing is flushed implicitly.
#[derive(Debug)]
pub struct IoSink<W: Write> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W) -> Self { Self { inner, error: None } }

    /// Returns the recorded error, if any, and resumes writing.
    pub fn take_error(&mut self) -> Option<io::Error> { self.error.take() }

    #[must_use]
    pub fn has_error(&self) -> bool { self.error.is_some() }

    /// # Errors
    ///
    /// Returns the recorded write error first, otherwise the result of flushing the
    /// inner writer.
    pub fn flush(&mut self) -> io::Result<()> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.inner.flush()
    }

    pub fn get_mut(&mut self) -> &mut W { &mut self.inner }

    pub fn into_inner(self) -> W { self.inner }
}

impl<W: Write> OutputSink for IoSink<W> {
    fn write(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.inner.write_all(bytes) {
            tracing::warn!(%error, "output sink write failed");
            self.error = Some(error);
        }
    }
}
