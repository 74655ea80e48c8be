//! System components outside the core.
//!
//! This module holds the storage the pipeline reaches through its Memory-Access stage.

/// Word-addressed main memory.
pub mod memory;

pub use memory::MainMemory;
