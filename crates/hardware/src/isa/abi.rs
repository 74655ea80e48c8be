//! MIPS32 register name table.
//!
//! Maps the conventional `$name` spelling of each general-purpose register to its index.

use crate::common::constants::REGISTER_COUNT;

/// Register names in index order.
pub const REGISTER_NAMES: [&str; REGISTER_COUNT] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Register `$zero`. Writable in this model.
pub const REG_ZERO: usize = 0;
/// Register `$t0`.
pub const REG_T0: usize = 8;
/// Register `$t1`.
pub const REG_T1: usize = 9;
/// Register `$t2`.
pub const REG_T2: usize = 10;
/// Register `$s0`.
pub const REG_S0: usize = 16;
/// Register `$sp`.
pub const REG_SP: usize = 29;
/// Register `$ra`.
pub const REG_RA: usize = 31;

/// Looks up a register by its sigil-prefixed name (`"$t0"` → 8).
pub fn register_index(name: &str) -> Option<usize> {
    REGISTER_NAMES.iter().position(|&n| n == name)
}

/// Returns the name of register `idx`, if it exists.
pub fn register_name(idx: usize) -> Option<&'static str> {
    REGISTER_NAMES.get(idx).copied()
}
