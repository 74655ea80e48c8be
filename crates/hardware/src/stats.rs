//! Simulation statistics collection and reporting.
//!
//! This module tracks pipeline activity for the simulator. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived CPI/IPC.
//! 2. **Instruction mix:** Decoded instructions by control class.
//! 3. **Branches:** How many branch/jump resolutions actually redirected fetch.
//!
//! Every counter is a pure function of the program, so two runs of the same input
//! produce identical statistics.

use std::fmt::Write as _;

use serde::Serialize;

use crate::core::pipeline::signals::ControlClass;

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"branch"`.
/// Pass an empty slice to `render_sections` to render all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "branch"];

const RULE: &str = "==========================================================";
const THIN_RULE: &str = "----------------------------------------------------------";

/// Simulation statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of Write-Back completions.
    pub instructions_retired: u64,

    /// Decoded `lw` instructions.
    pub inst_load: u64,
    /// Decoded `sw` instructions.
    pub inst_store: u64,
    /// Decoded register-writing ALU instructions (including `li` and `la`).
    pub inst_alu: u64,
    /// Decoded `beq` and `j` instructions.
    pub inst_branch: u64,
    /// Decoded no-ops, including unknown mnemonics and label-only lines.
    pub inst_nop: u64,

    /// Executions that left `PCSrc` set in EX/MEM.
    pub branches_taken: u64,
}

impl SimStats {
    /// Counts one decoded instruction of the given class.
    pub const fn record_decode(&mut self, class: ControlClass) {
        match class {
            ControlClass::Load => self.inst_load += 1,
            ControlClass::Store => self.inst_store += 1,
            ControlClass::Alu => self.inst_alu += 1,
            ControlClass::Branch => self.inst_branch += 1,
            ControlClass::Nop => self.inst_nop += 1,
        }
    }

    /// Total decoded instructions across every class.
    pub const fn decoded(&self) -> u64 {
        self.inst_load + self.inst_store + self.inst_alu + self.inst_branch + self.inst_nop
    }

    /// Renders only the requested statistics sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an empty
    /// slice to render all sections.
    pub fn render_sections(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let cyc = self.cycles.max(1);
        let retired = self.instructions_retired.max(1);
        let decoded = self.decoded().max(1);
        let pct = |n: u64, of: u64| (n as f64 / of as f64) * 100.0;

        let mut out = String::new();
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "MIPS PIPELINE SIMULATION STATISTICS");
        let _ = writeln!(out, "{RULE}");

        if want("summary") {
            let _ = writeln!(out, "sim_cycles               {}", self.cycles);
            let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
            let _ = writeln!(
                out,
                "sim_ipc                  {:.4}",
                self.instructions_retired as f64 / cyc as f64
            );
            let _ = writeln!(
                out,
                "sim_cpi                  {:.4}",
                self.cycles as f64 / retired as f64
            );
            let _ = writeln!(out, "{THIN_RULE}");
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            for (name, count) in [
                ("op.alu", self.inst_alu),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
                ("op.nop", self.inst_nop),
            ] {
                let _ = writeln!(
                    out,
                    "  {name:<21}{count} ({:.2}%)",
                    pct(count, decoded)
                );
            }
            let _ = writeln!(out, "{THIN_RULE}");
        }
        if want("branch") {
            let _ = writeln!(out, "BRANCHES");
            let _ = writeln!(out, "  branch.decoded       {}", self.inst_branch);
            let _ = writeln!(out, "  branch.taken         {}", self.branches_taken);
            let _ = writeln!(out, "{THIN_RULE}");
        }
        let _ = writeln!(out, "{RULE}");
        out
    }

    /// Prints only the requested statistics sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.render_sections(sections));
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
