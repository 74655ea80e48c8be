//! MIPS32 pipeline simulator CLI.
//!
//! This binary loads an assembly source file and runs it through the pipeline. It performs:
//! 1. **Configuration:** Defaults, an optional JSON config file, then flag overrides.
//! 2. **Execution:** Runs to completion, dumping every cycle in debug mode.
//! 3. **Reporting:** Final register and memory report as text or JSON, with optional stats.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mipsim_core::config::Config;
use mipsim_core::core::Cpu;
use mipsim_core::core::pipeline::CycleObserver;
use mipsim_core::sim::loader;
use mipsim_core::sim::report::{self, ReportPrinter, Snapshot};
use mipsim_core::stats::SimStats;
use mipsim_core::Simulator;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "Cycle-by-cycle MIPS32 five-stage pipeline simulator",
    long_about = "Run an assembly program through an idealized five-stage MIPS32 pipeline.\n\nExamples:\n  mipsim run program.asm\n  mipsim run program.asm --debug\n  mipsim run program.asm --format json --stats"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an assembly source file.
    Run(RunArgs),
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Assembly source file.
    file: PathBuf,

    /// Dump latches, registers and memory after every cycle.
    #[arg(short, long)]
    debug: bool,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Abort after this many cycles (0 disables the limit).
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Output format for the reports.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print run statistics after the final report.
    #[arg(long)]
    stats: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable `[index]: value` tables.
    Text,
    /// A single JSON document.
    Json,
}

/// JSON document written by `--format json`.
#[derive(Serialize)]
struct JsonReport {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    cycles: Vec<Snapshot>,
    state: Snapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<SimStats>,
}

/// Collects a [`Snapshot`] per cycle for JSON debug output.
#[derive(Debug, Default)]
struct SnapshotRecorder {
    snapshots: Vec<Snapshot>,
}

impl CycleObserver for SnapshotRecorder {
    fn on_cycle(&mut self, _cycle: u64, cpu: &Cpu) -> io::Result<()> {
        self.snapshots.push(Snapshot::capture(cpu));
        Ok(())
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run(args) => cmd_run(&args),
    };
    if let Err(e) = result {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Installs the stderr `tracing` subscriber.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Builds the run configuration: file (if any), then flag overrides.
fn resolve_config(args: &RunArgs) -> CliResult<Config> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if args.debug {
        config.general.debug_mode = true;
    }
    if let Some(max) = args.max_cycles {
        config.general.max_cycles = max;
    }
    Ok(config)
}

fn load_config(path: &Path) -> CliResult<Config> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read config '{}': {e}", path.display()))?;
    Ok(Config::from_json_str(&text)?)
}

/// Loads the program, runs it and writes the reports.
fn cmd_run(args: &RunArgs) -> CliResult<()> {
    let config = resolve_config(args)?;
    let program = loader::load_file(&args.file)
        .map_err(|e| format!("'{}': {e}", args.file.display()))?;
    info!(
        file = %args.file.display(),
        instructions = program.len(),
        "loaded program"
    );

    let mut sim = Simulator::new(program, &config);
    let stdout = io::stdout();

    match args.format {
        OutputFormat::Text => {
            let mut out = stdout.lock();
            if config.general.debug_mode {
                writeln!(out, "Debug Mode enabled")?;
            }
            let mut printer = ReportPrinter::new(&mut out);
            sim.run(&mut printer)?;
            write!(out, "{}", report::final_report(sim.cpu()))?;
            if args.stats {
                write!(out, "{}", sim.stats().render_sections(&[]))?;
            }
            out.flush()?;
        }
        OutputFormat::Json => {
            let mut recorder = SnapshotRecorder::default();
            sim.run(&mut recorder)?;
            let doc = JsonReport {
                cycles: recorder.snapshots,
                state: sim.snapshot(),
                stats: args.stats.then_some(*sim.stats()),
            };
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &doc)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
