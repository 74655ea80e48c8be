//! Global Simulator Constants.
//!
//! This module defines constants shared across the simulator. It includes:
//! 1. **Architectural Sizes:** Register file width and pipeline depth.
//! 2. **Syntax:** Sigils and delimiters of the instruction text grammar.
//! 3. **Simulation Limits:** Default guards for run length.

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 32;

/// Number of pipeline stages an instruction passes through before retiring.
pub const PIPELINE_DEPTH: usize = 5;

/// Prefix that marks a register operand (`$t0`).
pub const REGISTER_SIGIL: char = '$';

/// Separator between operands.
pub const OPERAND_SEPARATOR: char = ',';

/// Starts a comment that runs to the end of the line.
pub const COMMENT_MARKER: char = '#';

/// Terminates a label definition (`loop:`).
pub const LABEL_TERMINATOR: char = ':';

/// Opens the data segment.
pub const DATA_DIRECTIVE: &str = ".data";

/// Opens the text segment.
pub const TEXT_DIRECTIVE: &str = ".text";

/// Declares initialised data words.
pub const WORD_DIRECTIVE: &str = ".word";

/// Default upper bound on simulated cycles before a run is abandoned.
pub const DEFAULT_MAX_CYCLES: u64 = 1_000_000;

/// Width of one `[index]: value` cell in text reports.
pub const REPORT_CELL_WIDTH: usize = 20;

/// Number of cells per text report row.
pub const REPORT_CELLS_PER_ROW: usize = 4;
