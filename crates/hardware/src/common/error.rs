//! Error definitions.
//!
//! This module defines the failure taxonomy for the simulator. It provides:
//! 1. **Parse Errors:** Operand-level failures raised while decoding instruction text.
//! 2. **Simulation Errors:** Run-terminating failures raised by the pipeline stages.
//! 3. **Load Errors:** Failures raised while turning source text into a [`Program`](crate::sim::Program).
//!
//! An unrecognized mnemonic is deliberately absent from all three: it decodes as `nop`.

use thiserror::Error;

/// Operand-level decode failure.
///
/// Every variant carries the offending token so the fatal message can point at it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The instruction ended before all of its operands were read.
    #[error("missing operand")]
    MissingOperand,

    /// An operand that must be followed by another was not terminated by a comma.
    #[error("expected `,` after operand `{0}`")]
    MissingComma(String),

    /// More operands were supplied than the instruction takes.
    #[error("unexpected operand `{0}`")]
    UnexpectedOperand(String),

    /// A register token did not match any architectural register name.
    #[error("unknown register `{0}`")]
    UnknownRegister(String),

    /// `la` referenced a label that is not defined in the data segment.
    #[error("unknown data label `{0}`")]
    UnknownDataLabel(String),

    /// `beq` or `j` referenced a label that is not defined in the text segment.
    #[error("unknown text label `{0}`")]
    UnknownTextLabel(String),

    /// An immediate, offset or shift amount was not a decimal 32-bit integer.
    #[error("invalid immediate `{0}`")]
    InvalidImmediate(String),

    /// A memory operand did not have the `offset(register)` shape.
    #[error("malformed memory operand `{0}`")]
    MalformedMemoryOperand(String),
}

/// Fatal simulation failure.
///
/// Any of these terminates [`Simulator::run`](crate::sim::Simulator::run); the pipeline
/// performs no recovery.
#[derive(Debug, Error)]
pub enum SimError {
    /// The instruction text in IF/ID could not be decoded.
    #[error("cannot decode `{line}` (instruction {pc}): {source}")]
    Decode {
        /// Instruction index the line was fetched from.
        pc: i64,
        /// The offending instruction text.
        line: String,
        /// Operand-level cause.
        #[source]
        source: ParseError,
    },

    /// A load or store addressed a word outside main memory.
    #[error("memory address {addr} out of range (memory holds {size} words)")]
    MemoryOutOfRange {
        /// Effective word address computed by Execute.
        addr: i32,
        /// Number of words in main memory.
        size: usize,
    },

    /// Write-Back targeted a register index outside the register file.
    #[error("register index {0} out of range")]
    RegisterOutOfRange(i32),

    /// Fetch was asked for an instruction outside the instruction stream.
    #[error("fetch from instruction {pc} outside stream of {len} instructions")]
    FetchOutOfRange {
        /// Program counter after the fetch-time update.
        pc: i64,
        /// Number of instructions in the stream.
        len: usize,
    },

    /// The run did not drain within the configured number of cycles.
    #[error("cycle limit of {0} exceeded")]
    CycleLimitExceeded(u64),

    /// A cycle observer failed to emit its report.
    #[error("observer failed: {0}")]
    Observer(#[from] std::io::Error),
}

/// Failure while loading assembly source into a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be read.
    #[error("cannot read source: {0}")]
    Io(#[from] std::io::Error),

    /// A data-segment line was not of the form `label: .word value[, value...]`.
    #[error("line {line}: malformed data directive `{text}`")]
    MalformedData {
        /// 1-indexed source line.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// A `.word` value was not a decimal 32-bit integer.
    #[error("line {line}: invalid word value `{value}`")]
    InvalidWord {
        /// 1-indexed source line.
        line: usize,
        /// The offending value token.
        value: String,
    },

    /// The same label was defined twice within a segment.
    #[error("line {line}: duplicate label `{label}`")]
    DuplicateLabel {
        /// 1-indexed source line of the second definition.
        line: usize,
        /// The label name.
        label: String,
    },
}
