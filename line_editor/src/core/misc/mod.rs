// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod calc_str_len;

// Re-export.
pub use calc_str_len::*;
