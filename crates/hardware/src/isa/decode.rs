//! Instruction decode table.
//!
//! This module turns one line of instruction text into an ID/EX latch. It performs:
//! 1. **Dispatch:** Maps the mnemonic to its decode routine; unknown mnemonics get the
//!    `nop` routine.
//! 2. **Operand Wiring:** Each routine reads its operands, samples the register file,
//!    resolves labels, and places values in the ID/EX fields its class expects.
//! 3. **Control Generation:** Each routine applies its class's flag group as a unit.
//!
//! Routines are pure: they read the register file and label tables but change nothing.

use crate::common::constants::REGISTER_SIGIL;
use crate::common::error::ParseError;
use crate::core::arch::RegisterFile;
use crate::core::pipeline::latches::IdExEntry;
use crate::isa::instruction::Mnemonic;
use crate::isa::operands::{self, Operands};
use crate::sim::program::LabelTable;

/// Read-only state a decode routine may consult.
#[derive(Debug, Clone, Copy)]
pub struct DecodeContext<'a> {
    /// Register file as of this cycle.
    pub regs: &'a RegisterFile,
    /// Data label → memory index.
    pub data_labels: &'a LabelTable,
    /// Text label → instruction index.
    pub text_labels: &'a LabelTable,
}

impl DecodeContext<'_> {
    fn data_label(&self, label: &str) -> Result<i32, ParseError> {
        self.data_labels
            .get(label)
            .map(|&idx| idx as i32)
            .ok_or_else(|| ParseError::UnknownDataLabel(label.to_owned()))
    }

    fn text_label(&self, label: &str) -> Result<i32, ParseError> {
        self.text_labels
            .get(label)
            .map(|&idx| idx as i32)
            .ok_or_else(|| ParseError::UnknownTextLabel(label.to_owned()))
    }
}

/// A decode routine: consumes the operand tokens and produces the ID/EX latch.
pub type DecodeFn = fn(&mut Operands<'_>, &DecodeContext<'_>) -> Result<IdExEntry, ParseError>;

/// Returns the decode routine bound to `mnemonic`.
pub const fn routine(mnemonic: Mnemonic) -> DecodeFn {
    match mnemonic {
        Mnemonic::Sw => decode_sw,
        Mnemonic::Lw => decode_lw,
        Mnemonic::Add => decode_add,
        Mnemonic::Addi => decode_addi,
        Mnemonic::Sub => decode_sub,
        Mnemonic::Mult => decode_mult,
        Mnemonic::And => decode_and,
        Mnemonic::Or => decode_or,
        Mnemonic::Sll => decode_sll,
        Mnemonic::Srl => decode_srl,
        Mnemonic::Li => decode_li,
        Mnemonic::La => decode_la,
        Mnemonic::Beq => decode_beq,
        Mnemonic::J => decode_j,
        Mnemonic::Nop => decode_nop,
    }
}

/// Returns the decode routine for a mnemonic token, falling back to `nop`.
pub fn lookup(token: &str) -> DecodeFn {
    routine(Mnemonic::resolve(token))
}

/// Decodes a full instruction line.
///
/// # Returns
///
/// The resolved mnemonic (`Nop` for unknown tokens and blank lines) and the ID/EX latch.
///
/// # Errors
///
/// Any [`ParseError`] raised by the mnemonic's routine.
pub fn decode_line(
    line: &str,
    ctx: &DecodeContext<'_>,
) -> Result<(Mnemonic, IdExEntry), ParseError> {
    let line = line.trim();
    let (token, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let mnemonic = Mnemonic::resolve(token);
    let entry = routine(mnemonic)(&mut Operands::new(rest), ctx)?;
    Ok((mnemonic, entry))
}

/// Shared wiring for the register-register (and shift) ALU instructions.
///
/// A third operand without the register sigil is a literal shift amount; it then stands
/// in for both ReadData2 and the `rt` slot.
fn r_type(
    mnemonic: Mnemonic,
    ops: &mut Operands<'_>,
    ctx: &DecodeContext<'_>,
) -> Result<IdExEntry, ParseError> {
    let rd = operands::register(ops.separated()?)?;
    let rs = operands::register(ops.separated()?)?;
    let third = ops.last()?;

    let (rt, read_data2) = if third.starts_with(REGISTER_SIGIL) {
        let rt = operands::register(third)?;
        (rt as i32, ctx.regs.read(rt))
    } else {
        let shamt = operands::immediate(third)?;
        (shamt, shamt)
    };

    Ok(IdExEntry {
        read_data1: ctx.regs.read(rs),
        read_data2,
        ctrl: mnemonic.class().signals(),
        write_addr1: rt,
        write_addr2: rd as i32,
        offset: 0,
        alu_op: mnemonic.alu_op(),
    })
}

fn decode_sw(ops: &mut Operands<'_>, ctx: &DecodeContext<'_>) -> Result<IdExEntry, ParseError> {
    let source = operands::register(ops.separated()?)?;
    let (offset, base) = operands::memory_operand(ops.last()?)?;

    Ok(IdExEntry {
        read_data1: ctx.regs.read(base),
        read_data2: ctx.regs.read(source),
        ctrl: Mnemonic::Sw.class().signals(),
        write_addr1: 0,
        write_addr2: 0,
        offset,
        alu_op: Mnemonic::Sw.alu_op(),
    })
}

fn decode_lw(ops: &mut Operands<'_>, ctx: &DecodeContext<'_>) -> Result<IdExEntry, ParseError> {
    let target = operands::register(ops.separated()?)?;
    let (offset, base) = operands::memory_operand(ops.last()?)?;

    Ok(IdExEntry {
        read_data1: ctx.regs.read(base),
        read_data2: 0,
        ctrl: Mnemonic::Lw.class().signals(),
        write_addr1: target as i32,
        write_addr2: 0,
        offset,
        alu_op: Mnemonic::Lw.alu_op(),
    })
}

fn decode_add(ops: &mut Operands<'_>, ctx: &DecodeContext<'_>) -> Result<IdExEntry, ParseError> {
    r_type(Mnemonic::Add, ops, ctx)
}

fn decode_addi(ops: &mut Operands<'_>, ctx: &DecodeContext<'_>) -> Result<IdExEntry, ParseError> {
    let dest = operands::register(ops.separated()?)?;
    let src = operands::register(ops.separated()?)?;
    let imm = operands::immediate(ops.last()?)?;

    Ok(IdExEntry {
        read_data1: ctx.regs.read(src),
        read_data2: imm,
        ctrl: Mnemonic::Addi.class().signals(),
        write_addr1: 0,
        write_addr2: dest as i32,
        offset: 0,
        alu_op: Mnemonic::Addi.alu_op(),
    })
}

fn decode_sub(ops: &mut Operands<'_>, ctx: &DecodeContext<'_>) -> Result<IdExEntry, ParseError> {
    r_type(Mnemonic::Sub, ops, ctx)
}

fn decode_mult(ops: &mut Operands<'_>, ctx: &DecodeContext<'_>) -> Result<IdExEntry, ParseError> {
    r_type(Mnemonic::Mult, ops, ctx)
}

fn decode_and(ops: &mut Operands<'_>, ctx: &DecodeContext<'_>) -> Result<IdExEntry, ParseError> {
    r_type(Mnemonic::And, ops, ctx)
}

fn decode_or(ops: &mut Operands<'_>, ctx: &DecodeContext<'_>) -> Result<IdExEntry, ParseError> {
    r_type(Mnemonic::Or, ops, ctx)
}

fn decode_sll(ops: &mut Operands<'_>, ctx: &DecodeContext<'_>) -> Result<IdExEntry, ParseError> {
    r_type(Mnemonic::Sll, ops, ctx)
}

fn decode_srl(ops: &mut Operands<'_>, ctx: &DecodeContext<'_>) -> Result<IdExEntry, ParseError> {
    r_type(Mnemonic::Srl, ops, ctx)
}

fn decode_li(ops: &mut Operands<'_>, _ctx: &DecodeContext<'_>) -> Result<IdExEntry, ParseError> {
    let dest = operands::register(ops.separated()?)?;
    let imm = operands::immediate(ops.last()?)?;

    Ok(IdExEntry {
        read_data1: imm,
        read_data2: 0,
        ctrl: Mnemonic::Li.class().signals(),
        write_addr1: 0,
        write_addr2: dest as i32,
        offset: 0,
        alu_op: Mnemonic::Li.alu_op(),
    })
}

fn decode_la(ops: &mut Operands<'_>, ctx: &DecodeContext<'_>) -> Result<IdExEntry, ParseError> {
    let dest = operands::register(ops.separated()?)?;
    let addr = ctx.data_label(ops.last()?)?;

    Ok(IdExEntry {
        read_data1: addr,
        read_data2: 0,
        ctrl: Mnemonic::La.class().signals(),
        write_addr1: 0,
        write_addr2: dest as i32,
        offset: 0,
        alu_op: Mnemonic::La.alu_op(),
    })
}

fn decode_beq(ops: &mut Operands<'_>, ctx: &DecodeContext<'_>) -> Result<IdExEntry, ParseError> {
    let src = operands::register(ops.separated()?)?;
    let targ = operands::register(ops.separated()?)?;
    let target = ctx.text_label(ops.last()?)?;

    Ok(IdExEntry {
        read_data1: ctx.regs.read(src),
        read_data2: ctx.regs.read(targ),
        ctrl: Mnemonic::Beq.class().signals(),
        write_addr1: 0,
        write_addr2: 0,
        offset: target,
        alu_op: Mnemonic::Beq.alu_op(),
    })
}

fn decode_j(ops: &mut Operands<'_>, ctx: &DecodeContext<'_>) -> Result<IdExEntry, ParseError> {
    let target = ctx.text_label(ops.last()?)?;

    Ok(IdExEntry {
        ctrl: Mnemonic::J.class().signals(),
        offset: target,
        alu_op: Mnemonic::J.alu_op(),
        ..IdExEntry::default()
    })
}

/// Clears every ID/EX field. Operand text, if any, is ignored.
fn decode_nop(_ops: &mut Operands<'_>, _ctx: &DecodeContext<'_>) -> Result<IdExEntry, ParseError> {
    Ok(IdExEntry {
        ctrl: Mnemonic::Nop.class().signals(),
        ..IdExEntry::default()
    })
}
