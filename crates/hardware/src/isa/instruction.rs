//! Supported instruction mnemonics.
//!
//! This module provides the closed set of mnemonics the decoder understands and the
//! static properties each one carries:
//! 1. **Lookup:** Exact, case-sensitive match of the mnemonic token.
//! 2. **Fallback:** Any other token resolves to [`Mnemonic::Nop`].
//! 3. **Classification:** Control class and ALU selector per mnemonic.

use std::fmt;

use crate::core::pipeline::signals::{AluOp, ControlClass};

/// An instruction mnemonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// Store word: `sw $rt, offset($base)`.
    Sw,
    /// Load word: `lw $rt, offset($base)`.
    Lw,
    /// `add $rd, $rs, $rt`.
    Add,
    /// `addi $rt, $rs, imm`.
    Addi,
    /// `sub $rd, $rs, $rt`.
    Sub,
    /// `mult $rd, $rs, $rt` (low word written straight to `$rd`).
    Mult,
    /// `and $rd, $rs, $rt`.
    And,
    /// `or $rd, $rs, $rt`.
    Or,
    /// `sll $rd, $rs, shamt`.
    Sll,
    /// `srl $rd, $rs, shamt`.
    Srl,
    /// Load immediate: `li $rt, imm`.
    Li,
    /// Load address: `la $rt, label`.
    La,
    /// Branch if equal: `beq $rs, $rt, label`.
    Beq,
    /// Jump: `j label`.
    J,
    /// No operation.
    Nop,
}

impl Mnemonic {
    /// Every supported mnemonic, in table order.
    pub const ALL: [Self; 15] = [
        Self::Sw,
        Self::Lw,
        Self::Add,
        Self::Addi,
        Self::Sub,
        Self::Mult,
        Self::And,
        Self::Or,
        Self::Sll,
        Self::Srl,
        Self::Li,
        Self::La,
        Self::Beq,
        Self::J,
        Self::Nop,
    ];

    /// Returns the mnemonic spelled `token`, if it is supported.
    pub fn lookup(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == token)
    }

    /// Returns the mnemonic spelled `token`, or [`Mnemonic::Nop`] for anything else.
    pub fn resolve(token: &str) -> Self {
        Self::lookup(token).unwrap_or(Self::Nop)
    }

    /// Assembly spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sw => "sw",
            Self::Lw => "lw",
            Self::Add => "add",
            Self::Addi => "addi",
            Self::Sub => "sub",
            Self::Mult => "mult",
            Self::And => "and",
            Self::Or => "or",
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Li => "li",
            Self::La => "la",
            Self::Beq => "beq",
            Self::J => "j",
            Self::Nop => "nop",
        }
    }

    /// Control class that decides this mnemonic's flag group.
    pub const fn class(self) -> ControlClass {
        match self {
            Self::Sw => ControlClass::Store,
            Self::Lw => ControlClass::Load,
            Self::Add
            | Self::Addi
            | Self::Sub
            | Self::Mult
            | Self::And
            | Self::Or
            | Self::Sll
            | Self::Srl
            | Self::Li
            | Self::La => ControlClass::Alu,
            Self::Beq | Self::J => ControlClass::Branch,
            Self::Nop => ControlClass::Nop,
        }
    }

    /// ALU selector latched for this mnemonic.
    pub const fn alu_op(self) -> AluOp {
        match self {
            // `j` and `nop` never use the result; ADD is the idle selector.
            Self::Add
            | Self::Addi
            | Self::Lw
            | Self::Sw
            | Self::Li
            | Self::La
            | Self::J
            | Self::Nop => AluOp::Add,
            Self::Sub | Self::Beq => AluOp::Sub,
            Self::Mult => AluOp::Mult,
            Self::Sll => AluOp::Sll,
            Self::Srl => AluOp::Srl,
            Self::And => AluOp::And,
            Self::Or => AluOp::Or,
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
