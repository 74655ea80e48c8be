//! ALU shift operations.
//!
//! Implements shift-left logical (SLL) and shift-right logical (SRL). Both shifts treat
//! the value as an unsigned 32-bit pattern, so SRL fills with zeros. A shift amount
//! outside `0..32` yields `0`.

use crate::core::pipeline::signals::AluOp;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount.
///
/// # Returns
///
/// The shifted word. Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    let Ok(amount) = u32::try_from(b) else {
        return 0;
    };
    let bits = a as u32;
    let shifted = match op {
        AluOp::Sll => bits.checked_shl(amount),
        AluOp::Srl => bits.checked_shr(amount),
        _ => None,
    };
    shifted.unwrap_or(0) as i32
}
