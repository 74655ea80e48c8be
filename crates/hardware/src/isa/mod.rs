//! Instruction set support.
//!
//! This module covers everything between instruction text and an ID/EX latch:
//! 1. **ABI:** The register name table.
//! 2. **Mnemonics:** The supported instruction set and each mnemonic's class.
//! 3. **Operands:** Tokenizing and converting operand text.
//! 4. **Decode:** The mnemonic → routine table and the per-instruction routines.

/// Register names and indices.
pub mod abi;

/// Decode table and per-instruction decode routines.
pub mod decode;

/// Supported mnemonics.
pub mod instruction;

/// Operand tokenizer.
pub mod operands;

pub use instruction::Mnemonic;
