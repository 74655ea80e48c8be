//! Stage Dispatch.
//!
//! Runs a single pipeline stage against the CPU: the stage function receives exactly
//! the latch and state it reads, and its output replaces the next latch whole.

use super::Cpu;
use crate::common::error::SimError;
use crate::core::pipeline::engine::Stage;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::isa::decode::DecodeContext;

impl Cpu {
    /// Executes one stage.
    ///
    /// # Errors
    ///
    /// Propagates the stage's [`SimError`]; the latch it would have written is left as is.
    pub fn run_stage(&mut self, stage: Stage) -> Result<(), SimError> {
        match stage {
            Stage::Fetch => {
                self.if_id = fetch_stage(&mut self.pc, &self.ex_mem, &self.instructions)?;
            }
            Stage::Decode => {
                let ctx = DecodeContext {
                    regs: &self.regs,
                    data_labels: &self.data_labels,
                    text_labels: &self.text_labels,
                };
                let (mnemonic, entry) = decode_stage(&self.if_id, &ctx)?;
                self.stats.record_decode(mnemonic.class());
                self.id_ex = entry;
            }
            Stage::Execute => {
                self.ex_mem = execute_stage(&self.id_ex);
                if self.ex_mem.pc_src {
                    self.stats.branches_taken += 1;
                }
            }
            Stage::MemoryAccess => {
                self.mem_wb = mem_stage(&self.ex_mem, &mut self.memory)?;
            }
            Stage::WriteBack => {
                wb_stage(&self.mem_wb, &mut self.regs)?;
            }
        }
        Ok(())
    }
}
