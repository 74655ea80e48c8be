//! Simulator: owns both the CPU and the pipeline side-by-side.
//!
//! The CPU holds every piece of state a stage reads or writes; the pipeline holds only
//! the stage slots. Keeping them apart lets the scheduler borrow the CPU mutably while
//! it walks its own queue.

use tracing::{debug, info};

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::RegisterFile;
use crate::core::pipeline::engine::Pipeline;
use crate::core::pipeline::traits::CycleObserver;
use crate::sim::program::Program;
use crate::sim::report::Snapshot;
use crate::soc::MainMemory;
use crate::stats::SimStats;

/// Top-level simulator: CPU architectural state + pipeline.
#[derive(Clone, Debug)]
pub struct Simulator {
    cpu: Cpu,
    pipeline: Pipeline,
    debug_mode: bool,
    max_cycles: u64,
}

impl Simulator {
    /// Creates a simulator for `program`.
    ///
    /// `config.memory.reserve_words` zeroed words are appended to the program's memory.
    pub fn new(mut program: Program, config: &Config) -> Self {
        program.memory.reserve_zeroed(config.memory.reserve_words);
        Self {
            cpu: Cpu::new(program),
            pipeline: Pipeline::new(),
            debug_mode: config.general.debug_mode,
            max_cycles: config.general.max_cycles,
        }
    }

    /// Advances the simulator by one clock cycle. Does nothing once finished.
    ///
    /// # Errors
    ///
    /// [`SimError::CycleLimitExceeded`] when the configured budget is spent, otherwise the
    /// first error raised by a stage.
    pub fn step(&mut self) -> Result<(), SimError> {
        if self.is_finished() {
            return Ok(());
        }
        if self.max_cycles != 0 && self.cpu.stats.cycles >= self.max_cycles {
            return Err(SimError::CycleLimitExceeded(self.max_cycles));
        }

        let retired = self.pipeline.tick(&mut self.cpu)?;
        self.cpu.stats.instructions_retired += retired;
        self.cpu.stats.cycles += 1;

        debug!(
            cycle = self.cpu.stats.cycles - 1,
            in_flight = self.pipeline.in_flight(),
            pc = self.cpu.pc,
            "cycle complete"
        );
        Ok(())
    }

    /// Runs until no instruction is in flight.
    ///
    /// At least one cycle runs, even for an empty program. In debug mode `observer` sees
    /// the state after every cycle.
    ///
    /// # Errors
    ///
    /// The first [`SimError`] from [`step`](Self::step) or from the observer.
    pub fn run(&mut self, observer: &mut impl CycleObserver) -> Result<(), SimError> {
        while !self.is_finished() {
            self.step()?;
            if self.debug_mode {
                observer.on_cycle(self.cpu.stats.cycles - 1, &self.cpu)?;
            }
        }

        info!(
            cycles = self.cpu.stats.cycles,
            retired = self.cpu.stats.instructions_retired,
            "run complete"
        );
        Ok(())
    }

    /// Whether at least one cycle has run and the pipeline has drained.
    pub fn is_finished(&self) -> bool {
        self.cpu.stats.cycles > 0 && self.pipeline.is_empty()
    }

    /// CPU state.
    pub const fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// The stage scheduler.
    pub const fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Register file.
    pub const fn registers(&self) -> &RegisterFile {
        &self.cpu.regs
    }

    /// Main memory.
    pub const fn memory(&self) -> &MainMemory {
        &self.cpu.memory
    }

    /// Program counter.
    pub const fn pc(&self) -> i64 {
        self.cpu.pc
    }

    /// Cycles completed so far.
    pub const fn cycles(&self) -> u64 {
        self.cpu.stats.cycles
    }

    /// Run statistics.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Whether per-cycle observation is enabled.
    pub const fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Serializable copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.cpu)
    }
}
