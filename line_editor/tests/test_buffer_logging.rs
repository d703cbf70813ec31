// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The buffer only logs through the span it is given. These tests install a file
//! subscriber and check what ends up in the file.

use line_editor::{EditMode, LineBuffer, Prompt, TracingConfig,
                  try_initialize_logging_thread_local};
use serial_test::serial;
use std::path::PathBuf;

fn temp_log_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "line_editor_it_{}_{name}.log",
        std::process::id()
    ))
}

fn file_config(path: &PathBuf) -> TracingConfig {
    TracingConfig::new_file(Some(path.to_str().unwrap().to_string()))
}

#[serial]
#[test]
fn test_events_are_parented_to_injected_span() {
    let path = temp_log_file("injected_span");
    let guard = try_initialize_logging_thread_local(file_config(&path))
        .unwrap()
        .unwrap();

    let span = tracing::debug_span!("line_buffer", session = 7);
    let mut buffer = LineBuffer::new(Prompt::new("$ ")).with_log_span(span);
    buffer.insert_str("a\tb");
    buffer.delete(-1);
    buffer.move_cursor(-1, 80, EditMode::Emacs);
    drop(buffer);
    drop(guard);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("skipping code point"), "{content:?}");
    assert!(content.contains("delete"), "{content:?}");
    assert!(content.contains("move cursor"), "{content:?}");
    assert!(content.contains("line_buffer"), "{content:?}");
    std::fs::remove_file(&path).ok();
}

#[serial]
#[test]
fn test_default_span_stays_silent() {
    let path = temp_log_file("silent");
    let guard = try_initialize_logging_thread_local(file_config(&path))
        .unwrap()
        .unwrap();

    let mut buffer = LineBuffer::new(Prompt::new("$ "));
    buffer.insert_str("a\tb");
    buffer.delete(-1);
    tracing::debug!("marker");
    drop(guard);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("marker"), "{content:?}");
    assert!(!content.contains("skipping code point"), "{content:?}");
    assert!(!content.contains("delete"), "{content:?}");
    std::fs::remove_file(&path).ok();
}

#[serial]
#[test]
fn test_logging_off_installs_nothing() {
    let guard = try_initialize_logging_thread_local(TracingConfig::default()).unwrap();
    assert!(guard.is_none());
}
