//! ALU arithmetic operations.
//!
//! Addition, subtraction and multiplication on 32-bit two's-complement words. Every
//! operation wraps; `mult` keeps only the low word of the product.

use crate::core::pipeline::signals::AluOp;

/// Executes an arithmetic operation.
///
/// # Returns
///
/// The wrapped 32-bit result. Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mult => a.wrapping_mul(b),
        _ => 0,
    }
}
