// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod output_sink;

// Re-export.
pub use output_sink::*;
