//! Text and structured state reports.
//!
//! This module renders architectural and pipeline state for people and tools:
//! 1. **Word Tables:** `[index]: value` cells, left-aligned to a fixed width, four per row.
//! 2. **Sections:** Register file, main memory and the four pipeline latches, each under a
//!    dashed banner.
//! 3. **Per-Cycle Printing:** [`ReportPrinter`] writes a full dump after every cycle.
//! 4. **Snapshots:** [`Snapshot`] is a `serde`-serializable copy of the same state.

use std::fmt::Write as _;
use std::io::{self, Write};

use serde::Serialize;

use crate::common::constants::{REPORT_CELLS_PER_ROW, REPORT_CELL_WIDTH};
use crate::core::Cpu;
use crate::core::arch::RegisterFile;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, MemWbEntry};
use crate::core::pipeline::traits::CycleObserver;
use crate::soc::MainMemory;

const BANNER_RULE: &str = "-------------------------";

/// Renders `values` as `[i]: v` cells, four per newline-terminated row.
///
/// # Examples
///
/// ```
/// use mipsim_core::sim::report::format_words;
///
/// let text = format_words(&[7, -1]);
/// assert_eq!(text, format!("{:<20}{:<20}\n", "[0]: 7", "[1]: -1"));
/// assert_eq!(format_words(&[]), "");
/// ```
pub fn format_words(values: &[i32]) -> String {
    let mut out = String::new();
    for (row, chunk) in values.chunks(REPORT_CELLS_PER_ROW).enumerate() {
        for (col, value) in chunk.iter().enumerate() {
            let cell = format!("[{}]: {value}", row * REPORT_CELLS_PER_ROW + col);
            let _ = write!(out, "{cell:<width$}", width = REPORT_CELL_WIDTH);
        }
        out.push('\n');
    }
    out
}

/// A section heading line, newline included.
pub fn banner(title: &str) -> String {
    format!("{BANNER_RULE}{title}{BANNER_RULE}\n")
}

/// Register file section.
pub fn register_report(regs: &RegisterFile) -> String {
    banner("Register File") + &format_words(regs.as_slice())
}

/// Main memory section.
pub fn memory_report(memory: &MainMemory) -> String {
    banner("Main Memory") + &format_words(memory.as_slice())
}

/// All four latch sections, IF/ID first.
pub fn latch_report(cpu: &Cpu) -> String {
    let mut out = banner("IF/ID Registers");
    let _ = writeln!(out, "[0]: {}", cpu.if_id.inst);
    out += &banner("ID/EX Registers");
    out += &format_words(&cpu.id_ex.to_words());
    out += &banner("EX/MEM Registers");
    out += &format_words(&cpu.ex_mem.to_words());
    out += &banner("MEM/WB Registers");
    out += &format_words(&cpu.mem_wb.to_words());
    out
}

/// Full dump for one cycle: cycle header, latches, registers, memory.
pub fn cycle_report(cycle: u64, cpu: &Cpu) -> String {
    format!(
        "-----CYCLE {cycle}-----\n{}{}{}",
        latch_report(cpu),
        register_report(&cpu.regs),
        memory_report(&cpu.memory)
    )
}

/// End-of-run dump: registers, then memory.
pub fn final_report(cpu: &Cpu) -> String {
    register_report(&cpu.regs) + &memory_report(&cpu.memory)
}

/// Observer that writes [`cycle_report`] to `W` after every cycle.
#[derive(Debug)]
pub struct ReportPrinter<W: Write> {
    out: W,
}

impl<W: Write> ReportPrinter<W> {
    /// Wraps a writer.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CycleObserver for ReportPrinter<W> {
    fn on_cycle(&mut self, cycle: u64, cpu: &Cpu) -> io::Result<()> {
        self.out.write_all(cycle_report(cycle, cpu).as_bytes())
    }
}

/// Serializable copy of the simulator state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Cycles completed.
    pub cycle: u64,
    /// Program counter.
    pub pc: i64,
    /// Register file contents, index order.
    pub registers: Vec<i32>,
    /// Main memory contents, index order.
    pub memory: Vec<i32>,
    /// IF/ID latch.
    pub if_id: IfIdEntry,
    /// ID/EX latch.
    pub id_ex: IdExEntry,
    /// EX/MEM latch.
    pub ex_mem: ExMemEntry,
    /// MEM/WB latch.
    pub mem_wb: MemWbEntry,
}

impl Snapshot {
    /// Copies the current state out of `cpu`.
    pub fn capture(cpu: &Cpu) -> Self {
        Self {
            cycle: cpu.stats.cycles,
            pc: cpu.pc,
            registers: cpu.regs.as_slice().to_vec(),
            memory: cpu.memory.as_slice().to_vec(),
            if_id: cpu.if_id.clone(),
            id_ex: cpu.id_ex,
            ex_mem: cpu.ex_mem,
            mem_wb: cpu.mem_wb,
        }
    }
}
