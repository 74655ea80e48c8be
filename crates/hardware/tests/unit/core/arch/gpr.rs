//! # Register File Tests

use mipsim_core::SimError;
use mipsim_core::core::arch::RegisterFile;
use mipsim_core::isa::abi::{REG_RA, REG_T0, REG_ZERO};

#[test]
fn starts_zeroed() {
    let regs = RegisterFile::new();
    assert!(regs.as_slice().iter().all(|&r| r == 0));
    assert_eq!(regs.as_slice().len(), 32);
}

#[test]
fn write_then_read() {
    let mut regs = RegisterFile::new();
    regs.write(REG_T0 as i32, -17).unwrap();
    regs.write(REG_RA as i32, 99).unwrap();
    assert_eq!(regs.read(REG_T0), -17);
    assert_eq!(regs.read(REG_RA), 99);
}

#[test]
fn zero_register_is_writable() {
    let mut regs = RegisterFile::new();
    regs.write(REG_ZERO as i32, 5).unwrap();
    assert_eq!(regs.read(REG_ZERO), 5);
}

#[test]
fn out_of_range_write_is_rejected() {
    let mut regs = RegisterFile::new();
    assert!(matches!(
        regs.write(32, 1),
        Err(SimError::RegisterOutOfRange(32))
    ));
    assert!(matches!(
        regs.write(-1, 1),
        Err(SimError::RegisterOutOfRange(-1))
    ));
    assert_eq!(regs, RegisterFile::new());
}
