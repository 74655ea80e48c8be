//! # Decode Stage Tests
//!
//! Control-flag groups per mnemonic, operand wiring per instruction form, and the
//! error path that wraps operand failures with the offending line.

use mipsim_core::SimError;
use mipsim_core::core::arch::RegisterFile;
use mipsim_core::core::pipeline::latches::{IdExEntry, IfIdEntry};
use mipsim_core::core::pipeline::signals::{AluOp, ControlSignals};
use mipsim_core::core::pipeline::stages::decode_stage;
use mipsim_core::isa::Mnemonic;
use mipsim_core::isa::abi::{REG_S0, REG_T0, REG_T1, REG_T2};
use mipsim_core::isa::decode::DecodeContext;
use mipsim_core::sim::LabelTable;
use mipsim_core::ParseError;
use pretty_assertions::assert_eq;
use rstest::rstest;

struct Fixture {
    regs: RegisterFile,
    data_labels: LabelTable,
    text_labels: LabelTable,
}

impl Fixture {
    fn new() -> Self {
        let mut regs = RegisterFile::new();
        regs.write(REG_T0 as i32, 7).unwrap();
        regs.write(REG_T1 as i32, 3).unwrap();
        regs.write(REG_T2 as i32, 100).unwrap();

        let data_labels = LabelTable::from([("buf".to_owned(), 4)]);
        let text_labels = LabelTable::from([("loop".to_owned(), 2), ("done".to_owned(), 9)]);
        Self {
            regs,
            data_labels,
            text_labels,
        }
    }

    fn decode(&self, line: &str) -> Result<(Mnemonic, IdExEntry), SimError> {
        let ctx = DecodeContext {
            regs: &self.regs,
            data_labels: &self.data_labels,
            text_labels: &self.text_labels,
        };
        decode_stage(
            &IfIdEntry {
                pc: 5,
                inst: line.to_owned(),
            },
            &ctx,
        )
    }

    fn entry(&self, line: &str) -> IdExEntry {
        self.decode(line).unwrap().1
    }
}

const STORE: ControlSignals = ControlSignals {
    reg_write: false,
    pc_src: false,
    mem_to_reg: false,
    alu_src: true,
    mem_write: true,
    mem_read: false,
    reg_dst: true,
};

const LOAD: ControlSignals = ControlSignals {
    reg_write: true,
    pc_src: false,
    mem_to_reg: false,
    alu_src: true,
    mem_write: false,
    mem_read: true,
    reg_dst: false,
};

const ALU: ControlSignals = ControlSignals {
    reg_write: true,
    pc_src: false,
    mem_to_reg: true,
    alu_src: false,
    mem_write: false,
    mem_read: false,
    reg_dst: true,
};

const BRANCH: ControlSignals = ControlSignals {
    reg_write: false,
    pc_src: true,
    mem_to_reg: false,
    alu_src: false,
    mem_write: false,
    mem_read: false,
    reg_dst: false,
};

const NONE: ControlSignals = ControlSignals {
    reg_write: false,
    pc_src: false,
    mem_to_reg: false,
    alu_src: false,
    mem_write: false,
    mem_read: false,
    reg_dst: false,
};

#[rstest]
#[case::sw("sw $t0, 0($t1)", Mnemonic::Sw, STORE, AluOp::Add)]
#[case::lw("lw $t0, 0($t1)", Mnemonic::Lw, LOAD, AluOp::Add)]
#[case::add("add $s0, $t0, $t1", Mnemonic::Add, ALU, AluOp::Add)]
#[case::addi("addi $s0, $t0, 4", Mnemonic::Addi, ALU, AluOp::Add)]
#[case::sub("sub $s0, $t0, $t1", Mnemonic::Sub, ALU, AluOp::Sub)]
#[case::mult("mult $s0, $t0, $t1", Mnemonic::Mult, ALU, AluOp::Mult)]
#[case::and("and $s0, $t0, $t1", Mnemonic::And, ALU, AluOp::And)]
#[case::or("or $s0, $t0, $t1", Mnemonic::Or, ALU, AluOp::Or)]
#[case::sll("sll $s0, $t0, 2", Mnemonic::Sll, ALU, AluOp::Sll)]
#[case::srl("srl $s0, $t0, 2", Mnemonic::Srl, ALU, AluOp::Srl)]
#[case::li("li $s0, 9", Mnemonic::Li, ALU, AluOp::Add)]
#[case::la("la $s0, buf", Mnemonic::La, ALU, AluOp::Add)]
#[case::beq("beq $t0, $t1, loop", Mnemonic::Beq, BRANCH, AluOp::Sub)]
#[case::j("j loop", Mnemonic::J, BRANCH, AluOp::Add)]
#[case::nop("nop", Mnemonic::Nop, NONE, AluOp::Add)]
#[case::unknown("frobnicate $t0, $t1", Mnemonic::Nop, NONE, AluOp::Add)]
#[case::blank("", Mnemonic::Nop, NONE, AluOp::Add)]
fn flag_group_per_mnemonic(
    #[case] line: &str,
    #[case] mnemonic: Mnemonic,
    #[case] ctrl: ControlSignals,
    #[case] alu_op: AluOp,
) {
    let (decoded, entry) = Fixture::new().decode(line).unwrap();
    assert_eq!(decoded, mnemonic);
    assert_eq!(entry.ctrl, ctrl);
    assert_eq!(entry.alu_op, alu_op);
}

#[test]
fn r_type_reads_rs_and_rt() {
    let entry = Fixture::new().entry("sub $s0, $t0, $t1");
    assert_eq!(
        entry,
        IdExEntry {
            read_data1: 7,
            read_data2: 3,
            ctrl: ALU,
            write_addr1: REG_T1 as i32,
            write_addr2: REG_S0 as i32,
            offset: 0,
            alu_op: AluOp::Sub,
        }
    );
}

#[test]
fn shift_amount_fills_read_data2_and_rt_slot() {
    let entry = Fixture::new().entry("sll $s0, $t0, 3");
    assert_eq!(entry.read_data1, 7);
    assert_eq!(entry.read_data2, 3);
    assert_eq!(entry.write_addr1, 3);
    assert_eq!(entry.write_addr2, REG_S0 as i32);
}

#[test]
fn addi_places_immediate_in_read_data2() {
    let entry = Fixture::new().entry("addi $s0, $t2, -40");
    assert_eq!(entry.read_data1, 100);
    assert_eq!(entry.read_data2, -40);
    assert_eq!(entry.write_addr1, 0);
    assert_eq!(entry.write_addr2, REG_S0 as i32);
    assert_eq!(entry.offset, 0);
}

#[test]
fn lw_targets_write_addr1() {
    let entry = Fixture::new().entry("lw $s0, 8($t2)");
    assert_eq!(entry.read_data1, 100);
    assert_eq!(entry.read_data2, 0);
    assert_eq!(entry.write_addr1, REG_S0 as i32);
    assert_eq!(entry.write_addr2, 0);
    assert_eq!(entry.offset, 8);
}

#[test]
fn sw_reads_base_and_source() {
    let entry = Fixture::new().entry("sw $t0, -2($t2)");
    assert_eq!(entry.read_data1, 100);
    assert_eq!(entry.read_data2, 7);
    assert_eq!(entry.write_addr1, 0);
    assert_eq!(entry.write_addr2, 0);
    assert_eq!(entry.offset, -2);
}

#[test]
fn empty_memory_offset_is_zero() {
    let entry = Fixture::new().entry("lw $s0, ($t1)");
    assert_eq!(entry.offset, 0);
    assert_eq!(entry.read_data1, 3);
}

#[test]
fn li_and_la_load_read_data1() {
    let fx = Fixture::new();
    assert_eq!(fx.entry("li $s0, -12").read_data1, -12);
    let la = fx.entry("la $s0, buf");
    assert_eq!(la.read_data1, 4);
    assert_eq!(la.write_addr2, REG_S0 as i32);
}

#[test]
fn branch_and_jump_resolve_text_labels() {
    let fx = Fixture::new();
    let beq = fx.entry("beq $t0, $t1, done");
    assert_eq!((beq.read_data1, beq.read_data2, beq.offset), (7, 3, 9));

    let j = fx.entry("j loop");
    assert_eq!(
        j,
        IdExEntry {
            ctrl: BRANCH,
            offset: 2,
            ..IdExEntry::default()
        }
    );
}

#[test]
fn nop_clears_every_field_and_ignores_operands() {
    let fx = Fixture::new();
    assert_eq!(fx.entry("nop"), IdExEntry::default());
    assert_eq!(fx.entry("nop $t0, garbage"), IdExEntry::default());
}

#[rstest]
#[case::missing_comma("add $s0 $t0, $t1", ParseError::MissingComma("$s0".into()))]
#[case::extra_operand("li $s0, 1, 2", ParseError::UnexpectedOperand("2".into()))]
#[case::trailing_token("j loop loop", ParseError::UnexpectedOperand("loop".into()))]
#[case::missing_operand("add $s0, $t0,", ParseError::MissingOperand)]
#[case::unknown_register("add $s0, $t0, $t9x", ParseError::UnknownRegister("$t9x".into()))]
#[case::unknown_data_label("la $s0, nowhere", ParseError::UnknownDataLabel("nowhere".into()))]
#[case::unknown_text_label("beq $t0, $t1, nowhere", ParseError::UnknownTextLabel("nowhere".into()))]
#[case::bad_immediate("addi $s0, $t0, ten", ParseError::InvalidImmediate("ten".into()))]
#[case::bad_memory_operand("lw $s0, 4$t0", ParseError::MalformedMemoryOperand("4$t0".into()))]
fn malformed_operands_are_fatal(#[case] line: &str, #[case] expected: ParseError) {
    match Fixture::new().decode(line) {
        Err(SimError::Decode {
            pc,
            line: text,
            source,
        }) => {
            assert_eq!(pc, 5);
            assert_eq!(text, line);
            assert_eq!(source, expected);
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}
