//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs the following:
//! 1. **Operand Selection:** `ALUSrc` picks ReadData2 or the offset as the second operand.
//! 2. **Arithmetic Execution:** Runs the latched ALU operation.
//! 3. **Branch Resolution:** A SUB with a non-zero result cancels a pending `PCSrc`, which
//!    is how `beq` falls through. `j` uses ADD and always keeps `PCSrc`.
//! 4. **Destination Selection:** `RegDst` picks WriteAddr2 over WriteAddr1.

use tracing::trace;

use crate::core::pipeline::latches::{ExMemEntry, IdExEntry};
use crate::core::pipeline::signals::AluOp;
use crate::core::units::alu::Alu;

/// Executes the instruction execute stage.
///
/// The ID/EX input is left untouched; the branch correction only affects the output.
///
/// # Returns
///
/// The new EX/MEM latch.
pub fn execute_stage(id_ex: &IdExEntry) -> ExMemEntry {
    let ctrl = id_ex.ctrl;
    let op2 = if ctrl.alu_src {
        id_ex.offset
    } else {
        id_ex.read_data2
    };
    let result = Alu::execute(id_ex.alu_op, id_ex.read_data1, op2);

    let pc_src = ctrl.pc_src && !(id_ex.alu_op == AluOp::Sub && result != 0);
    let write_reg = if ctrl.reg_dst {
        id_ex.write_addr2
    } else {
        id_ex.write_addr1
    };

    trace!(
        op = ?id_ex.alu_op,
        a = id_ex.read_data1,
        b = op2,
        result,
        pc_src,
        "EX"
    );

    ExMemEntry {
        pc_src,
        branch_target: id_ex.offset,
        alu_result: result,
        write_data: id_ex.read_data2,
        mem_read: ctrl.mem_read,
        mem_write: ctrl.mem_write,
        mem_to_reg: ctrl.mem_to_reg,
        reg_write: ctrl.reg_write,
        write_reg,
    }
}
