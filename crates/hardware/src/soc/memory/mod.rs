//! Word-addressed main memory.
//!
//! This module provides the data memory consulted by the Memory-Access stage. It provides:
//! 1. **Storage:** A growable vector of signed 32-bit words, indexed by word (not byte).
//! 2. **Checked Access:** Loads and stores outside the image fail instead of corrupting state.
//! 3. **Image Building:** Append and reserve helpers used by the loader.

use crate::common::error::SimError;

/// Main memory image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MainMemory {
    words: Vec<i32>,
}

impl MainMemory {
    /// Creates an empty memory image.
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Appends one initialized word and returns its index.
    pub fn push(&mut self, value: i32) -> usize {
        self.words.push(value);
        self.words.len() - 1
    }

    /// Appends `count` zero-initialized words.
    pub fn reserve_zeroed(&mut self, count: usize) {
        self.words.resize(self.words.len() + count, 0);
    }

    /// Reads the word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MemoryOutOfRange`] if `addr` is negative or past the end.
    pub fn read(&self, addr: i32) -> Result<i32, SimError> {
        usize::try_from(addr)
            .ok()
            .and_then(|i| self.words.get(i))
            .copied()
            .ok_or(SimError::MemoryOutOfRange {
                addr,
                size: self.words.len(),
            })
    }

    /// Writes `value` to the word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MemoryOutOfRange`] if `addr` is negative or past the end.
    pub fn write(&mut self, addr: i32, value: i32) -> Result<(), SimError> {
        let size = self.words.len();
        let slot = usize::try_from(addr)
            .ok()
            .and_then(|i| self.words.get_mut(i))
            .ok_or(SimError::MemoryOutOfRange { addr, size })?;
        *slot = value;
        Ok(())
    }

    /// Number of words in the image.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the image holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the memory contents in address order.
    pub fn as_slice(&self) -> &[i32] {
        &self.words
    }
}

impl From<Vec<i32>> for MainMemory {
    fn from(words: Vec<i32>) -> Self {
        Self { words }
    }
}
