//! Execution units.
//!
//! The pipeline has a single functional unit: the integer ALU used by the Execute stage.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
