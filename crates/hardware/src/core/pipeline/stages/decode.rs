//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It hands the IF/ID text to
//! the decode table and wraps any operand error with the offending line. No hazard
//! check is made: registers are sampled as they stand, even if an older instruction
//! still in flight is about to overwrite them.

use tracing::trace;

use crate::common::error::SimError;
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::isa::decode::{DecodeContext, decode_line};
use crate::isa::instruction::Mnemonic;

/// Executes the instruction decode stage.
///
/// # Returns
///
/// The decoded mnemonic (for statistics) and the new ID/EX latch.
///
/// # Errors
///
/// [`SimError::Decode`] if the line's operands are malformed or reference an unknown
/// register or label.
pub fn decode_stage(
    if_id: &IfIdEntry,
    ctx: &DecodeContext<'_>,
) -> Result<(Mnemonic, IdExEntry), SimError> {
    let (mnemonic, entry) = decode_line(&if_id.inst, ctx).map_err(|source| SimError::Decode {
        pc: if_id.pc,
        line: if_id.inst.clone(),
        source,
    })?;

    trace!(pc = if_id.pc, %mnemonic, ctrl = ?entry.ctrl, "ID");
    Ok((mnemonic, entry))
}
