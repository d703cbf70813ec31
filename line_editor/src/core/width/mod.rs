// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod char_width;

// Re-export.
pub use char_width::*;
