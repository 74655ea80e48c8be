//! # Operand Tokenizer Tests

use mipsim_core::ParseError;
use mipsim_core::isa::abi;
use mipsim_core::isa::operands::{self, Operands};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn register_table_covers_all_names() {
    assert_eq!(abi::register_index("$zero"), Some(0));
    assert_eq!(abi::register_index("$t0"), Some(abi::REG_T0));
    assert_eq!(abi::register_index("$t8"), Some(24));
    assert_eq!(abi::register_index("$ra"), Some(abi::REG_RA));
    assert_eq!(abi::register_index("t0"), None);
    assert_eq!(abi::register_index("$32"), None);
    assert_eq!(abi::register_name(29), Some("$sp"));
    assert_eq!(abi::register_name(32), None);
}

#[test]
fn separated_strips_the_comma() {
    let mut ops = Operands::new("$t0, $t1, 4");
    assert_eq!(ops.separated(), Ok("$t0"));
    assert_eq!(ops.separated(), Ok("$t1"));
    assert_eq!(ops.last(), Ok("4"));
}

#[test]
fn separated_requires_the_comma() {
    let mut ops = Operands::new("$t0 $t1");
    assert_eq!(
        ops.separated(),
        Err(ParseError::MissingComma("$t0".into()))
    );
}

#[test]
fn lone_comma_is_not_an_operand() {
    let mut ops = Operands::new(", $t1");
    assert_eq!(ops.separated(), Err(ParseError::MissingComma(",".into())));
}

#[test]
fn last_rejects_trailing_tokens() {
    let mut ops = Operands::new("4 5");
    assert_eq!(ops.last(), Err(ParseError::UnexpectedOperand("5".into())));
}

#[test]
fn exhausted_input() {
    let mut ops = Operands::new("   ");
    assert_eq!(ops.separated(), Err(ParseError::MissingOperand));
    assert_eq!(ops.last(), Err(ParseError::MissingOperand));
}

#[rstest]
#[case("0", 0)]
#[case("-17", -17)]
#[case("2147483647", i32::MAX)]
#[case("-2147483648", i32::MIN)]
fn immediates(#[case] token: &str, #[case] value: i32) {
    assert_eq!(operands::immediate(token), Ok(value));
}

#[rstest]
#[case("0x10")]
#[case("2147483648")]
#[case("four")]
fn invalid_immediates(#[case] token: &str) {
    assert_eq!(
        operands::immediate(token),
        Err(ParseError::InvalidImmediate(token.into()))
    );
}

#[rstest]
#[case("8($sp)", 8, abi::REG_SP)]
#[case("-4($t0)", -4, abi::REG_T0)]
#[case("($t1)", 0, abi::REG_T1)]
fn memory_operands(#[case] token: &str, #[case] offset: i32, #[case] base: usize) {
    assert_eq!(operands::memory_operand(token), Ok((offset, base)));
}

#[rstest]
#[case("8$sp")]
#[case("8($sp")]
fn malformed_memory_operands(#[case] token: &str) {
    assert_eq!(
        operands::memory_operand(token),
        Err(ParseError::MalformedMemoryOperand(token.into()))
    );
}

#[test]
fn memory_operand_base_must_be_a_register() {
    assert_eq!(
        operands::memory_operand("0($q9)"),
        Err(ParseError::UnknownRegister("$q9".into()))
    );
}
