//! Assembly Source Loader.
//!
//! This module turns assembly source text into a [`Program`]. It performs:
//! 1. **Cleanup:** Trims lines, drops blank lines and `#` comments (whole-line and inline).
//! 2. **Segmentation:** `.data` opens the data segment and `.text` the text segment. Lines
//!    before any directive are text, so a file without `.data` is all text.
//! 3. **Data Layout:** `label: .word v1[, v2 ...]` appends each value to memory and binds
//!    the label to its first word.
//! 4. **Text Labels:** A `label:` prefix binds the label to that line's instruction index
//!    and is removed. A line holding only a label stays as an empty slot, which decodes
//!    as a no-op.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::constants::{
    COMMENT_MARKER, DATA_DIRECTIVE, LABEL_TERMINATOR, OPERAND_SEPARATOR, TEXT_DIRECTIVE,
    WORD_DIRECTIVE,
};
use crate::common::error::LoadError;
use crate::sim::program::{LabelTable, Program};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Segment {
    Data,
    Text,
}

/// Reads and parses an assembly source file.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read, otherwise any error of [`parse_source`].
pub fn load_file(path: impl AsRef<Path>) -> Result<Program, LoadError> {
    let source = fs::read_to_string(path.as_ref())?;
    parse_source(&source)
}

/// Parses assembly source text.
///
/// # Errors
///
/// [`LoadError::MalformedData`] or [`LoadError::InvalidWord`] for a bad data line, and
/// [`LoadError::DuplicateLabel`] when a label is defined twice in the same segment.
///
/// # Examples
///
/// ```
/// use mipsim_core::sim::loader::parse_source;
///
/// let program = parse_source(
///     ".data\n\
///      nums: .word 3, 4\n\
///      .text\n\
///      la $t0, nums\n\
///      loop: lw $t1, 0($t0)  # first word\n",
/// )
/// .unwrap();
///
/// assert_eq!(program.instructions, ["la $t0, nums", "lw $t1, 0($t0)"]);
/// assert_eq!(program.memory.as_slice(), &[3, 4]);
/// assert_eq!(program.data_labels["nums"], 0);
/// assert_eq!(program.text_labels["loop"], 1);
/// ```
pub fn parse_source(source: &str) -> Result<Program, LoadError> {
    let mut program = Program::default();
    let mut segment = Segment::Text;

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw);
        if line.is_empty() {
            continue;
        }

        match line {
            DATA_DIRECTIVE => segment = Segment::Data,
            TEXT_DIRECTIVE => segment = Segment::Text,
            _ => match segment {
                Segment::Data => parse_data_line(&mut program, line_no, line)?,
                Segment::Text => parse_text_line(&mut program, line_no, line)?,
            },
        }
    }

    debug!(
        instructions = program.instructions.len(),
        words = program.memory.len(),
        "program loaded"
    );
    Ok(program)
}

fn strip_comment(raw: &str) -> &str {
    raw.split_once(COMMENT_MARKER)
        .map_or(raw, |(code, _)| code)
        .trim()
}

fn parse_data_line(program: &mut Program, line_no: usize, line: &str) -> Result<(), LoadError> {
    let malformed = || LoadError::MalformedData {
        line: line_no,
        text: line.to_owned(),
    };

    let (label, rest) = line.split_once(LABEL_TERMINATOR).ok_or_else(malformed)?;
    let label = label.trim();
    let values = rest
        .trim_start()
        .strip_prefix(WORD_DIRECTIVE)
        .ok_or_else(malformed)?;
    if label.is_empty() || values.trim().is_empty() {
        return Err(malformed());
    }

    let mut first = None;
    for token in values
        .split(|c: char| c == OPERAND_SEPARATOR || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let value: i32 = token.parse().map_err(|_| LoadError::InvalidWord {
            line: line_no,
            value: token.to_owned(),
        })?;
        let addr = program.memory.push(value);
        if first.is_none() {
            first = Some(addr);
        }
    }

    let addr = first.ok_or_else(malformed)?;
    bind_label(&mut program.data_labels, line_no, label, addr)?;
    debug!(label, addr, "data label");
    Ok(())
}

fn parse_text_line(program: &mut Program, line_no: usize, line: &str) -> Result<(), LoadError> {
    let index = program.instructions.len();
    let text = match line.split_once(LABEL_TERMINATOR) {
        Some((label, rest)) => {
            let label = label.trim();
            bind_label(&mut program.text_labels, line_no, label, index)?;
            debug!(label, index, "text label");
            rest.trim()
        }
        None => line,
    };
    program.instructions.push(text.to_owned());
    Ok(())
}

fn bind_label(
    table: &mut LabelTable,
    line_no: usize,
    label: &str,
    index: usize,
) -> Result<(), LoadError> {
    if table.contains_key(label) {
        return Err(LoadError::DuplicateLabel {
            line: line_no,
            label: label.to_owned(),
        });
    }
    let _ = table.insert(label.to_owned(), index);
    Ok(())
}
