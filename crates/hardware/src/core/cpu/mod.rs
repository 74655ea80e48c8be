//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It holds:
//! 1. **Architectural State:** Register file, main memory and program counter.
//! 2. **Program:** The instruction stream and both label tables, read-only once loaded.
//! 3. **Pipeline Latches:** IF/ID, ID/EX, EX/MEM and MEM/WB, each overwritten whole.
//! 4. **Statistics:** Counters updated as stages run.

/// Stage dispatch.
pub mod execution;

use crate::core::arch::RegisterFile;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, MemWbEntry};
use crate::sim::program::{LabelTable, Program};
use crate::soc::MainMemory;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Word-addressed data memory.
    pub memory: MainMemory,
    /// Program counter; `-1` before the first fetch.
    pub pc: i64,

    /// Label-free instruction text, indexed by PC.
    pub instructions: Vec<String>,
    /// Data label → memory index.
    pub data_labels: LabelTable,
    /// Text label → instruction index.
    pub text_labels: LabelTable,

    /// IF/ID Latch.
    pub if_id: IfIdEntry,
    /// ID/EX Latch.
    pub id_ex: IdExEntry,
    /// EX/MEM Latch.
    pub ex_mem: ExMemEntry,
    /// MEM/WB Latch.
    pub mem_wb: MemWbEntry,

    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU with zeroed registers and latches, ready to fetch instruction 0.
    pub fn new(program: Program) -> Self {
        let Program {
            instructions,
            memory,
            data_labels,
            text_labels,
        } = program;

        Self {
            regs: RegisterFile::new(),
            memory,
            pc: -1,
            instructions,
            data_labels,
            text_labels,
            if_id: IfIdEntry::default(),
            id_ex: IdExEntry::default(),
            ex_mem: ExMemEntry::default(),
            mem_wb: MemWbEntry::default(),
            stats: SimStats::default(),
        }
    }

    /// Whether a Fetch slot should be admitted this cycle (`pc < N - 1`).
    pub fn has_unfetched(&self) -> bool {
        self.pc < self.instructions.len() as i64 - 1
    }
}
