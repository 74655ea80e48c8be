//! # Report Rendering Tests

use mipsim_core::Program;
use mipsim_core::config::Config;
use mipsim_core::sim::Simulator;
use mipsim_core::sim::report::{
    ReportPrinter, banner, cycle_report, final_report, format_words, latch_report,
};
use pretty_assertions::assert_eq;

#[test]
fn words_wrap_after_four_cells() {
    let text = format_words(&[1, 2, 3, 4, 5]);
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), 80);
    assert!(rows[0].starts_with("[0]: 1"));
    assert!(rows[0][60..].starts_with("[3]: 4"));
    assert_eq!(rows[1].trim_end(), "[4]: 5");
    assert!(text.ends_with('\n'));
}

#[test]
fn cells_pad_to_fixed_width() {
    let text = format_words(&[i32::MIN]);
    assert_eq!(text, "[0]: -2147483648    \n");
}

#[test]
fn banner_shape() {
    assert_eq!(
        banner("Main Memory"),
        "-------------------------Main Memory-------------------------\n"
    );
}

#[test]
fn final_report_lists_registers_then_memory() {
    let sim = Simulator::new(
        Program::from_instructions(["nop"]).with_memory(vec![5, 6]),
        &Config::default(),
    );
    let text = final_report(sim.cpu());
    let regs = text.find("Register File").unwrap();
    let mem = text.find("Main Memory").unwrap();
    assert!(regs < mem);
    assert!(text.ends_with(&format!("{:<20}{:<20}\n", "[0]: 5", "[1]: 6")));
    // 32 registers in eight rows.
    assert!(text.contains("[31]: 0"));
}

#[test]
fn latch_sections_in_pipeline_order() {
    let mut sim = Simulator::new(
        Program::from_instructions(["li $t0, 3", "nop"]),
        &Config::default(),
    );
    sim.step().unwrap();

    let text = latch_report(sim.cpu());
    let order = ["IF/ID", "ID/EX", "EX/MEM", "MEM/WB"]
        .map(|name| text.find(&format!("{name} Registers")).unwrap());
    assert!(order.is_sorted());
    assert!(text.contains("[0]: li $t0, 3\n"));
}

#[test]
fn cycle_report_header() {
    let sim = Simulator::new(Program::default(), &Config::default());
    assert!(cycle_report(4, sim.cpu()).starts_with("-----CYCLE 4-----\n"));
}

#[test]
fn printer_emits_one_dump_per_cycle_in_debug_mode() {
    let mut config = Config::default();
    config.general.debug_mode = true;
    let mut sim = Simulator::new(Program::from_instructions(["nop", "nop"]), &config);

    let mut printer = ReportPrinter::new(Vec::new());
    sim.run(&mut printer).unwrap();
    let text = String::from_utf8(printer.into_inner()).unwrap();

    assert_eq!(text.matches("-----CYCLE").count(), 6);
    assert!(text.starts_with("-----CYCLE 0-----\n"));
    assert!(text.contains("-----CYCLE 5-----\n"));
}

#[test]
fn printer_is_silent_without_debug_mode() {
    let mut sim = Simulator::new(Program::from_instructions(["nop"]), &Config::default());
    let mut printer = ReportPrinter::new(Vec::new());
    sim.run(&mut printer).unwrap();
    assert!(printer.into_inner().is_empty());
}
