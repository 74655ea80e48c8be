//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. All operands and
//! results are 32-bit signed words.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mult
//! - [`logic`]:      And, Or
//! - [`shifts`]:     Sll, Srl

/// Integer arithmetic operations (add, subtract, multiply).
pub mod arithmetic;

/// Bitwise logical operations (and, or).
pub mod logic;

/// Shift operations (sll, srl).
pub mod shifts;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (the shift amount for shifts)
    ///
    /// # Returns
    ///
    /// The 32-bit result. Arithmetic wraps on overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), 50);
    /// assert_eq!(Alu::execute(AluOp::Sub, 5, 5), 0);
    /// assert_eq!(Alu::execute(AluOp::Sll, 0x1, 4), 0x10);
    /// assert_eq!(Alu::execute(AluOp::Srl, -1, 28), 0xF);
    /// ```
    pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
        match op {
            AluOp::Add | AluOp::Sub | AluOp::Mult => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or => logic::execute(op, a, b),
            AluOp::Sll | AluOp::Srl => shifts::execute(op, a, b),
        }
    }
}
