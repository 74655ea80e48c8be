//! Core processor implementation.
//!
//! This module contains the CPU state, the instruction pipeline, the execution units,
//! and the architectural register file.

/// Architectural state (general-purpose register file).
pub mod arch;

/// CPU state container and stage dispatch.
pub mod cpu;

/// Instruction pipeline implementation (scheduler, stages, latches, signals).
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
