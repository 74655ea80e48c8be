//! MIPS32 General-Purpose Register File.
//!
//! This module implements the general-purpose register (GPR) file. It performs the following:
//! 1. **Storage:** Maintains 32 signed 32-bit registers (`$zero`-`$ra`).
//! 2. **Write Checking:** Rejects write-back to indices outside the file.
//! 3. **Debugging:** Exposes the raw contents for reports and snapshots.
//!
//! Register 0 is not hard-wired: a write to `$zero` lands like any other write.

use crate::common::constants::REGISTER_COUNT;
use crate::common::error::SimError;

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i32; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31), as produced by [`crate::isa::abi::register_index`].
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 32 or larger. Decoded register operands never are.
    pub fn read(&self, idx: usize) -> i32 {
        self.regs[idx]
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index as carried in the MEM/WB latch.
    /// * `val` - The 32-bit value to write.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] if `idx` is negative or 32 or larger.
    pub fn write(&mut self, idx: i32, val: i32) -> Result<(), SimError> {
        let slot = usize::try_from(idx)
            .ok()
            .and_then(|i| self.regs.get_mut(i))
            .ok_or(SimError::RegisterOutOfRange(idx))?;
        *slot = val;
        Ok(())
    }

    /// Returns the register contents in index order.
    pub const fn as_slice(&self) -> &[i32] {
        &self.regs
    }
}
