//! Loaded program image.
//!
//! A [`Program`] is everything the pipeline consumes from the loader: label-free
//! instruction text, the initial memory image, and the two label tables.

use std::collections::HashMap;

use crate::soc::MainMemory;

/// Mapping from label name to a memory or instruction index.
pub type LabelTable = HashMap<String, usize>;

/// Program ready for simulation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Instruction text, labels and comments removed, indexed by program counter.
    pub instructions: Vec<String>,
    /// Initial main-memory image.
    pub memory: MainMemory,
    /// Data label → memory word index (consulted by `la`).
    pub data_labels: LabelTable,
    /// Text label → instruction index (consulted by `beq` and `j`).
    pub text_labels: LabelTable,
}

impl Program {
    /// Builds a program from bare instruction lines with empty memory and no labels.
    pub fn from_instructions<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            instructions: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Replaces the memory image.
    #[must_use]
    pub fn with_memory(mut self, words: Vec<i32>) -> Self {
        self.memory = MainMemory::from(words);
        self
    }

    /// Adds a data label.
    #[must_use]
    pub fn with_data_label(mut self, label: &str, index: usize) -> Self {
        let _ = self.data_labels.insert(label.to_owned(), index);
        self
    }

    /// Adds a text label.
    #[must_use]
    pub fn with_text_label(mut self, label: &str, index: usize) -> Self {
        let _ = self.text_labels.insert(label.to_owned(), index);
        self
    }

    /// Number of instructions in the stream.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the instruction stream is empty.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
