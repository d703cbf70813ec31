// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The small slice of the VT-100 vocabulary that the line editor emits. Every sequence
//! is a CSI sequence parameterized by a single row, column, or mode number.

// Attach sources.
pub mod constants;
pub mod csi_sequence;

// Re-export.
pub use constants::*;
pub use csi_sequence::*;
