//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It selects the
//! next program counter and copies that instruction's text into the IF/ID latch.
//!
//! The redirect decision reads the EX/MEM latch as Execute left it *this* cycle, so a
//! resolved branch or jump steers the very next fetch with no bubble. Instructions that
//! were already fetched down the old path are not discarded.

use tracing::trace;

use crate::common::error::SimError;
use crate::core::pipeline::latches::{ExMemEntry, IfIdEntry};

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `pc` - Program counter; `-1` before the first fetch. Updated in place.
/// * `ex_mem` - The EX/MEM latch, consulted for `PCSrc` and the branch target.
/// * `instructions` - The label-free instruction stream.
///
/// # Returns
///
/// The new IF/ID latch.
///
/// # Errors
///
/// [`SimError::FetchOutOfRange`] if the selected PC does not index the stream, which
/// happens when a branch target lies outside it.
pub fn fetch_stage(
    pc: &mut i64,
    ex_mem: &ExMemEntry,
    instructions: &[String],
) -> Result<IfIdEntry, SimError> {
    *pc = if ex_mem.pc_src {
        i64::from(ex_mem.branch_target)
    } else {
        *pc + 1
    };

    let inst = usize::try_from(*pc)
        .ok()
        .and_then(|idx| instructions.get(idx))
        .ok_or(SimError::FetchOutOfRange {
            pc: *pc,
            len: instructions.len(),
        })?;

    trace!(pc = *pc, redirect = ex_mem.pc_src, line = %inst, "IF");

    Ok(IfIdEntry {
        pc: *pc,
        inst: inst.clone(),
    })
}
