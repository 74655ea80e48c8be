//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the four records carried between the five pipeline stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Fixed Shape:** Each latch is a plain record, replaced wholesale every time its
//!    producing stage runs; no field is ever merged from an older value.
//! 2. **Dump Layout:** Each integer latch can be flattened into the word order used by
//!    the text reports.

use serde::Serialize;

use crate::core::pipeline::signals::{AluOp, ControlSignals};

/// Number of words in a flattened ID/EX latch.
pub const ID_EX_WORDS: usize = 13;

/// Number of words in a flattened EX/MEM latch.
pub const EX_MEM_WORDS: usize = 9;

/// Number of words in a flattened MEM/WB latch.
pub const MEM_WB_WORDS: usize = 5;

/// IF/ID latch (Fetch to Decode stage).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IfIdEntry {
    /// Instruction index the text was fetched from.
    pub pc: i64,
    /// Raw instruction text.
    pub inst: String,
}

/// ID/EX latch (Decode to Execute stage).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IdExEntry {
    /// First ALU operand (register value, `li` immediate, or `la` address).
    pub read_data1: i32,
    /// Second ALU operand, or the store value for `sw`.
    pub read_data2: i32,
    /// Control flag group.
    pub ctrl: ControlSignals,
    /// Destination candidate selected when `reg_dst` is clear (R-type `rt` slot).
    pub write_addr1: i32,
    /// Destination candidate selected when `reg_dst` is set (R-type `rd` slot).
    pub write_addr2: i32,
    /// Memory offset or resolved branch/jump target.
    pub offset: i32,
    /// ALU operation selector.
    pub alu_op: AluOp,
}

impl IdExEntry {
    /// Flattens the latch into report order.
    pub const fn to_words(&self) -> [i32; ID_EX_WORDS] {
        [
            self.read_data1,
            self.read_data2,
            self.ctrl.reg_write as i32,
            self.ctrl.pc_src as i32,
            self.ctrl.mem_to_reg as i32,
            self.ctrl.alu_src as i32,
            self.ctrl.mem_write as i32,
            self.ctrl.mem_read as i32,
            self.ctrl.reg_dst as i32,
            self.write_addr1,
            self.write_addr2,
            self.offset,
            self.alu_op.code(),
        ]
    }
}

/// EX/MEM latch (Execute to Memory stage).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExMemEntry {
    /// Redirect flag, after Execute's branch-equality correction.
    pub pc_src: bool,
    /// Instruction index Fetch jumps to when `pc_src` is set.
    pub branch_target: i32,
    /// ALU result: effective word address for memory ops, plain result otherwise.
    pub alu_result: i32,
    /// Value a store writes (ReadData2 passed through).
    pub write_data: i32,
    /// Enable memory read (load).
    pub mem_read: bool,
    /// Enable memory write (store).
    pub mem_write: bool,
    /// Write-Back source selector.
    pub mem_to_reg: bool,
    /// Enable register write-back.
    pub reg_write: bool,
    /// Destination register resolved through `reg_dst`.
    pub write_reg: i32,
}

impl ExMemEntry {
    /// Flattens the latch into report order.
    pub const fn to_words(&self) -> [i32; EX_MEM_WORDS] {
        [
            self.pc_src as i32,
            self.branch_target,
            self.alu_result,
            self.write_data,
            self.mem_read as i32,
            self.mem_write as i32,
            self.mem_to_reg as i32,
            self.reg_write as i32,
            self.write_reg,
        ]
    }
}

/// MEM/WB latch (Memory to Writeback stage).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemWbEntry {
    /// Word loaded from memory; 0 when the instruction did not read.
    pub memory_data: i32,
    /// ALU result carried through for register-writing instructions.
    pub alu_data: i32,
    /// Destination register.
    pub write_reg: i32,
    /// Write-Back source selector.
    pub mem_to_reg: bool,
    /// Enable register write-back.
    pub reg_write: bool,
}

impl MemWbEntry {
    /// Flattens the latch into report order.
    pub const fn to_words(&self) -> [i32; MEM_WB_WORDS] {
        [
            self.memory_data,
            self.alu_data,
            self.write_reg,
            self.mem_to_reg as i32,
            self.reg_write as i32,
        ]
    }
}
