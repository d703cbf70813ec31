// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::OutputSink;
use std::{io::{Result, Write},
          sync::{Arc, Mutex, MutexGuard, PoisonError}};

/// You can safely clone this struct, since it only contains an `Arc<Mutex<Vec<u8>>>`.
/// The inner `buffer` will not be cloned, just the [Arc] will be cloned.
///
/// It is both an [`OutputSink`] (for the redraw engine) and a [`Write`] (for anything
/// that wants a terminal).
#[derive(Clone, Debug, Default)]
pub struct SinkMock {
    pub buffer: Arc<Mutex<Vec<u8>>>,
}

impl SinkMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> { self.lock().clone() }

    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        strip_ansi_escapes::strip_str(self.get_copy_of_buffer_as_string())
    }

    /// Drop everything written so far.
    pub fn clear(&self) { self.lock().clear(); }
}

impl OutputSink for SinkMock {
    fn write(&mut self, bytes: &[u8]) { self.lock().extend_from_slice(bytes); }
}

impl Write for SinkMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_sink_mock_no_strip_ansi() {
        let mut sink_mock = SinkMock::default();
        let sink_mock_clone = sink_mock.clone(); // Points to the same inner value.

        let normal_text = "hello world";
        OutputSink::write(&mut sink_mock, normal_text.as_bytes());

        assert_eq2!(sink_mock.get_copy_of_buffer_as_string(), normal_text);
        assert_eq2!(sink_mock_clone.get_copy_of_buffer_as_string(), normal_text);
    }

    #[test]
    fn test_sink_mock_strip_ansi() {
        let mut sink_mock = SinkMock::default();

        let normal_text = "hello world";
        let red_text = format!("\x1b[31m{normal_text}\x1b[0m"); // Resets color after.

        sink_mock.write_all(red_text.as_bytes()).unwrap();
        sink_mock.flush().unwrap();

        assert_eq2!(sink_mock.get_copy_of_buffer_as_string_strip_ansi(), normal_text);
    }

    #[test]
    fn test_sink_mock_clear() {
        let mut sink_mock = SinkMock::default();
        OutputSink::write(&mut sink_mock, b"stale");
        sink_mock.clear();
        assert!(sink_mock.get_copy_of_buffer().is_empty());
    }
}
