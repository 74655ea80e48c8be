//! Operand tokenizer.
//!
//! Splits the operand text of one instruction into tokens and converts them into typed
//! values. The grammar is `operand[, operand]*`:
//! 1. **Separators:** Every operand but the last carries a trailing comma; the comma is
//!    stripped before the token is interpreted.
//! 2. **Registers:** `$name`, resolved through [`abi::register_index`].
//! 3. **Immediates:** Signed decimal 32-bit integers.
//! 4. **Memory Operands:** `offset(register)`; an empty offset means 0.

use std::str::SplitWhitespace;

use crate::common::constants::OPERAND_SEPARATOR;
use crate::common::error::ParseError;
use crate::isa::abi;

/// Cursor over the operand tokens of one instruction.
#[derive(Debug, Clone)]
pub struct Operands<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> Operands<'a> {
    /// Creates a cursor over `text`, the instruction with its mnemonic removed.
    pub fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace(),
        }
    }

    /// Takes an operand that must be followed by another one.
    ///
    /// # Errors
    ///
    /// [`ParseError::MissingOperand`] at end of input, [`ParseError::MissingComma`] if the
    /// token is not comma-terminated.
    pub fn separated(&mut self) -> Result<&'a str, ParseError> {
        let token = self.tokens.next().ok_or(ParseError::MissingOperand)?;
        token
            .strip_suffix(OPERAND_SEPARATOR)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ParseError::MissingComma(token.to_owned()))
    }

    /// Takes the final operand and checks that nothing follows it.
    ///
    /// # Errors
    ///
    /// [`ParseError::MissingOperand`] at end of input, [`ParseError::UnexpectedOperand`] if
    /// another token follows.
    pub fn last(&mut self) -> Result<&'a str, ParseError> {
        let token = self.tokens.next().ok_or(ParseError::MissingOperand)?;
        match self.tokens.next() {
            Some(extra) => Err(ParseError::UnexpectedOperand(extra.to_owned())),
            None => Ok(token),
        }
    }
}

/// Resolves a `$name` register token to its index.
///
/// # Errors
///
/// [`ParseError::UnknownRegister`] if the name is not in the register table.
pub fn register(token: &str) -> Result<usize, ParseError> {
    abi::register_index(token).ok_or_else(|| ParseError::UnknownRegister(token.to_owned()))
}

/// Parses a signed decimal immediate.
///
/// # Errors
///
/// [`ParseError::InvalidImmediate`] if the token is not a decimal `i32`.
pub fn immediate(token: &str) -> Result<i32, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidImmediate(token.to_owned()))
}

/// Splits an `offset(register)` token into its offset and base register index.
///
/// # Errors
///
/// [`ParseError::MalformedMemoryOperand`] if the parentheses are missing or misplaced;
/// otherwise the error of the offset or register conversion.
pub fn memory_operand(token: &str) -> Result<(i32, usize), ParseError> {
    let malformed = || ParseError::MalformedMemoryOperand(token.to_owned());
    let (offset, rest) = token.split_once('(').ok_or_else(malformed)?;
    let base = rest.strip_suffix(')').ok_or_else(malformed)?;
    let offset = if offset.is_empty() {
        0
    } else {
        immediate(offset)?
    };
    Ok((offset, register(base)?))
}
