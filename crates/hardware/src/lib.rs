//! MIPS32 pipeline simulator library.
//!
//! This crate models an idealized five-stage MIPS32 pipeline cycle by cycle, with the following:
//! 1. **Core:** Pipeline scheduler, stages (fetch, decode, execute, memory, writeback), latches and the ALU.
//! 2. **ISA:** Register names, mnemonics, the operand tokenizer and the decode table.
//! 3. **SoC:** Word-addressed main memory.
//! 4. **Simulation:** Loader, simulator driver, reports, configuration and statistics.
//!
//! The pipeline has no hazard detection, forwarding or stalling, and a taken branch does not
//! flush the instruction already fetched behind it.
//!
//! # Examples
//!
//! ```
//! use mipsim_core::{Config, Program, Simulator};
//! use mipsim_core::isa::abi::REG_T1;
//!
//! let program = Program::from_instructions([
//!     "li $t0, 4",
//!     "nop",
//!     "nop",
//!     "add $t1, $t0, $t0",
//! ]);
//! let mut sim = Simulator::new(program, &Config::default());
//! sim.run(&mut ()).unwrap();
//!
//! assert_eq!(sim.registers().read(REG_T1), 8);
//! assert_eq!(sim.cycles(), 8);
//! ```

/// Common types and constants (errors, sizes, syntax markers).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (pipeline, arch, execution units).
pub mod core;
/// Instruction set (ABI, mnemonics, operands, decode table).
pub mod isa;
/// Loader, simulator driver and reports.
pub mod sim;
/// System-on-chip (main memory).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, latches and stats.
pub use crate::core::Cpu;
/// Error types.
pub use crate::common::error::{LoadError, ParseError, SimError};
/// Loaded program image.
pub use crate::sim::Program;
/// Top-level simulator.
pub use crate::sim::Simulator;
