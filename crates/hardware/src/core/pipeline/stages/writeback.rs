//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It is the only
//! place the register file is written.

use tracing::trace;

use crate::common::error::SimError;
use crate::core::arch::RegisterFile;
use crate::core::pipeline::latches::MemWbEntry;

/// Executes the writeback stage.
///
/// With `RegWrite` clear nothing happens. Otherwise `MemToReg` selects the ALU data
/// (set) or the memory data (clear).
///
/// # Errors
///
/// [`SimError::RegisterOutOfRange`] if the destination index is outside the file.
pub fn wb_stage(mem_wb: &MemWbEntry, regs: &mut RegisterFile) -> Result<(), SimError> {
    if !mem_wb.reg_write {
        return Ok(());
    }

    let value = if mem_wb.mem_to_reg {
        mem_wb.alu_data
    } else {
        mem_wb.memory_data
    };
    regs.write(mem_wb.write_reg, value)?;
    trace!(reg = mem_wb.write_reg, value, "WB");
    Ok(())
}
