//! Simulation driver, program loading and reporting.
//!
//! Provides the loader that turns assembly source into a [`Program`], the [`Simulator`]
//! that runs it, and the text/structured reports of the resulting state.

/// Assembly source loader.
pub mod loader;

/// Loaded program image and label tables.
pub mod program;

/// Register, memory and latch reports.
pub mod report;

/// Top-level simulator.
pub mod simulator;

pub use program::{LabelTable, Program};
pub use simulator::Simulator;
