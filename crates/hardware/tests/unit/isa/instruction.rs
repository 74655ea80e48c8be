//! # Mnemonic Table Tests

use mipsim_core::core::pipeline::signals::{AluOp, ControlClass};
use mipsim_core::isa::Mnemonic;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn every_mnemonic_round_trips_through_its_spelling() {
    for m in Mnemonic::ALL {
        assert_eq!(Mnemonic::lookup(m.as_str()), Some(m));
        assert_eq!(m.to_string(), m.as_str());
    }
}

#[rstest]
#[case("ADD")]
#[case("addu")]
#[case("")]
#[case("beq,")]
fn unknown_tokens_resolve_to_nop(#[case] token: &str) {
    assert_eq!(Mnemonic::lookup(token), None);
    assert_eq!(Mnemonic::resolve(token), Mnemonic::Nop);
}

#[rstest]
#[case(Mnemonic::Sw, ControlClass::Store, AluOp::Add)]
#[case(Mnemonic::Lw, ControlClass::Load, AluOp::Add)]
#[case(Mnemonic::Li, ControlClass::Alu, AluOp::Add)]
#[case(Mnemonic::La, ControlClass::Alu, AluOp::Add)]
#[case(Mnemonic::Mult, ControlClass::Alu, AluOp::Mult)]
#[case(Mnemonic::Srl, ControlClass::Alu, AluOp::Srl)]
#[case(Mnemonic::Beq, ControlClass::Branch, AluOp::Sub)]
#[case(Mnemonic::J, ControlClass::Branch, AluOp::Add)]
#[case(Mnemonic::Nop, ControlClass::Nop, AluOp::Add)]
fn class_and_alu_selector(
    #[case] m: Mnemonic,
    #[case] class: ControlClass,
    #[case] op: AluOp,
) {
    assert_eq!(m.class(), class);
    assert_eq!(m.alu_op(), op);
}
