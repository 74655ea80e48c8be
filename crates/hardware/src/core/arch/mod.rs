//! Architectural state components.
//!
//! This module holds the programmer-visible state that outlives any single instruction:
//! the general-purpose register file.

/// General-purpose register file.
pub mod gpr;

pub use gpr::RegisterFile;
