// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging is **disabled** by default. The line buffer emits [`tracing`] events parented
//! to an injected [`tracing::Span`], which are dropped unless a subscriber is installed
//! with [`try_initialize_logging_global`] or [`try_initialize_logging_thread_local`].

// Attach sources.
pub mod file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
