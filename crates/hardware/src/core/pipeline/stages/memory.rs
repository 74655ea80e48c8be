//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the pipeline. Stores write `Write Data`
//! at the ALU-result address; loads read from it. The ALU result is always forwarded
//! so register-writing ALU instructions reach Write-Back intact.

use tracing::trace;

use crate::common::error::SimError;
use crate::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use crate::soc::MainMemory;

/// Executes the memory access stage.
///
/// `Memory Data` is 0 unless `MemRead` is set.
///
/// # Errors
///
/// [`SimError::MemoryOutOfRange`] if a load or store addresses a word outside memory.
pub fn mem_stage(ex_mem: &ExMemEntry, memory: &mut MainMemory) -> Result<MemWbEntry, SimError> {
    let addr = ex_mem.alu_result;

    if ex_mem.mem_write {
        memory.write(addr, ex_mem.write_data)?;
        trace!(addr, value = ex_mem.write_data, "MEM store");
    }

    let memory_data = if ex_mem.mem_read {
        let value = memory.read(addr)?;
        trace!(addr, value, "MEM load");
        value
    } else {
        0
    };

    Ok(MemWbEntry {
        memory_data,
        alu_data: ex_mem.alu_result,
        write_reg: ex_mem.write_reg,
        mem_to_reg: ex_mem.mem_to_reg,
        reg_write: ex_mem.reg_write,
    })
}
