//! Pipeline stage scheduler.
//!
//! This module drives the lock-step cycle of the five-stage pipeline. It provides:
//! 1. **Stage Slots:** One queue entry per in-flight instruction, tagged with its stage.
//! 2. **Admission:** A new Fetch slot joins the back of the queue while instructions remain.
//! 3. **Drain:** Exactly the slots queued after admission run once, oldest first, and
//!    re-enter the queue at their next stage unless they just finished Write-Back.
//!
//! With a full pipeline the drain order is WB, MEM, EX, ID, IF. Every stage therefore
//! reads the latch its predecessor wrote in the previous cycle, except Fetch, which runs
//! after Execute and sees this cycle's EX/MEM redirect.

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::common::constants::PIPELINE_DEPTH;
use crate::common::error::SimError;
use crate::core::Cpu;

/// A pipeline stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Stage {
    /// Instruction fetch.
    Fetch,
    /// Instruction decode and register read.
    Decode,
    /// ALU and branch resolution.
    Execute,
    /// Data memory load/store.
    MemoryAccess,
    /// Register file write.
    WriteBack,
}

impl Stage {
    /// Stage the slot moves to after this one, or `None` once Write-Back is done.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Fetch => Some(Self::Decode),
            Self::Decode => Some(Self::Execute),
            Self::Execute => Some(Self::MemoryAccess),
            Self::MemoryAccess => Some(Self::WriteBack),
            Self::WriteBack => None,
        }
    }

    /// Short conventional name (`IF`, `ID`, `EX`, `MEM`, `WB`).
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Fetch => "IF",
            Self::Decode => "ID",
            Self::Execute => "EX",
            Self::MemoryAccess => "MEM",
            Self::WriteBack => "WB",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// One in-flight instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StageSlot {
    /// Stage the instruction executes next.
    pub stage: Stage,
    /// Admission order, starting at 0. Diagnostic only.
    pub seq: u64,
}

/// The stage scheduler.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    queue: VecDeque<StageSlot>,
    next_seq: u64,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::with_capacity(PIPELINE_DEPTH + 1),
            next_seq: 0,
        }
    }

    /// Runs one cycle against `cpu`.
    ///
    /// # Returns
    ///
    /// The number of instructions that completed Write-Back this cycle (0 or 1).
    ///
    /// # Errors
    ///
    /// The first [`SimError`] raised by a stage. The cycle is abandoned at that point.
    pub fn tick(&mut self, cpu: &mut Cpu) -> Result<u64, SimError> {
        if cpu.has_unfetched() {
            self.queue.push_back(StageSlot {
                stage: Stage::Fetch,
                seq: self.next_seq,
            });
            self.next_seq += 1;
        }

        let mut retired = 0;
        for _ in 0..self.queue.len() {
            let Some(slot) = self.queue.pop_front() else {
                break;
            };
            trace!(seq = slot.seq, stage = %slot.stage, "slot");
            cpu.run_stage(slot.stage)?;

            match slot.stage.next() {
                Some(stage) => self.queue.push_back(StageSlot { stage, ..slot }),
                None => retired += 1,
            }
        }
        Ok(retired)
    }

    /// Whether no instruction is in flight.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of instructions in flight.
    pub fn in_flight(&self) -> usize {
        self.queue.len()
    }

    /// In-flight slots, oldest first.
    pub fn slots(&self) -> impl Iterator<Item = &StageSlot> {
        self.queue.iter()
    }
}
