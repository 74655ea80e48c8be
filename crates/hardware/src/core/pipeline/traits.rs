//! Pipeline observation interface.
//!
//! A [`CycleObserver`] is handed read-only access to the CPU after each cycle. Observers
//! cannot feed anything back into scheduling.

use std::io;

use crate::core::Cpu;

/// Receives the CPU state at the end of each cycle.
pub trait CycleObserver {
    /// Called once the cycle numbered `cycle` (0-based) has completed.
    ///
    /// # Errors
    ///
    /// Any I/O failure while recording the state; it aborts the run.
    fn on_cycle(&mut self, cycle: u64, cpu: &Cpu) -> io::Result<()>;
}

/// Observer that ignores every cycle.
impl CycleObserver for () {
    fn on_cycle(&mut self, _cycle: u64, _cpu: &Cpu) -> io::Result<()> {
        Ok(())
    }
}

impl<T: CycleObserver + ?Sized> CycleObserver for &mut T {
    fn on_cycle(&mut self, cycle: u64, cpu: &Cpu) -> io::Result<()> {
        (**self).on_cycle(cycle, cpu)
    }
}
