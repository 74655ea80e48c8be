//! ALU bitwise logical operations.

use crate::core::pipeline::signals::AluOp;

/// Executes a bitwise logical operation.
///
/// Returns `0` for non-logical opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        _ => 0,
    }
}
