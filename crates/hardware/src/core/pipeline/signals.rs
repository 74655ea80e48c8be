//! Pipeline control signals and operation types.
//!
//! This module defines the control signals that flow through the pipeline
//! to control instruction execution. It provides:
//! 1. **ALU Operations:** The operator selector consumed by Execute.
//! 2. **Control Classes:** The five instruction classes and the flag group each one sets.
//! 3. **Control Signals:** The seven single-bit multiplexer and enable flags.

use serde::Serialize;

/// ALU operation selector.
///
/// The discriminant is the value shown for the selector in latch dumps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum AluOp {
    /// Two's-complement addition (also the don't-care selector for `j` and `nop`).
    #[default]
    Add = 0,
    /// Two's-complement subtraction; doubles as the `beq` comparator.
    Sub = 1,
    /// Low 32 bits of the signed product.
    Mult = 2,
    /// Shift left logical.
    Sll = 3,
    /// Shift right logical.
    Srl = 4,
    /// Bitwise AND.
    And = 5,
    /// Bitwise OR.
    Or = 6,
}

impl AluOp {
    /// Numeric encoding used in latch dumps.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Instruction class.
///
/// Each class sets all seven control flags as a unit; no instruction mixes flags
/// from two classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ControlClass {
    /// `sw`.
    Store,
    /// `lw`.
    Load,
    /// Register-writing arithmetic and logic, plus `li` and `la`.
    Alu,
    /// `beq` and `j`.
    Branch,
    /// `nop` and every unrecognized mnemonic.
    Nop,
}

impl ControlClass {
    /// Returns the flag group for this class.
    pub const fn signals(self) -> ControlSignals {
        match self {
            Self::Store => ControlSignals {
                reg_write: false,
                pc_src: false,
                mem_to_reg: false,
                alu_src: true,
                mem_write: true,
                mem_read: false,
                reg_dst: true,
            },
            Self::Load => ControlSignals {
                reg_write: true,
                pc_src: false,
                mem_to_reg: false,
                alu_src: true,
                mem_write: false,
                mem_read: true,
                reg_dst: false,
            },
            Self::Alu => ControlSignals {
                reg_write: true,
                pc_src: false,
                mem_to_reg: true,
                alu_src: false,
                mem_write: false,
                mem_read: false,
                reg_dst: true,
            },
            Self::Branch => ControlSignals {
                reg_write: false,
                pc_src: true,
                mem_to_reg: false,
                alu_src: false,
                mem_write: false,
                mem_read: false,
                reg_dst: false,
            },
            Self::Nop => ControlSignals {
                reg_write: false,
                pc_src: false,
                mem_to_reg: false,
                alu_src: false,
                mem_write: false,
                mem_read: false,
                reg_dst: false,
            },
        }
    }
}

/// Control signals generated during decode.
///
/// Note the `mem_to_reg` polarity: 1 selects the ALU result at Write-Back, 0 selects
/// the loaded word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ControlSignals {
    /// Enable write to the destination register at Write-Back.
    pub reg_write: bool,
    /// Redirect the program counter to the branch target at the next Fetch.
    pub pc_src: bool,
    /// Write-Back source: ALU result when set, memory data when clear.
    pub mem_to_reg: bool,
    /// ALU operand 2 source: offset when set, ReadData2 when clear.
    pub alu_src: bool,
    /// Enable memory write (store).
    pub mem_write: bool,
    /// Enable memory read (load).
    pub mem_read: bool,
    /// Destination register: WriteAddr2 when set, WriteAddr1 when clear.
    pub reg_dst: bool,
}
