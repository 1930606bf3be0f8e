use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use unionfind::StructureKind;

use unionfind_bench::experiment::{self, ExperimentConfig};
use unionfind_bench::report::{self, WorkloadReport};
use unionfind_bench::results::{self, RunRecord};
use unionfind_bench::workload::Workload;

#[derive(Parser)]
#[command(
    name = "unionfind-bench",
    version,
    about = "Compare list-based and tree-based union-find"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the experiment grid and write a results file.
    Run {
        /// Element counts to test.
        #[arg(long, num_args = 1.., default_values_t = [10_000usize, 50_000, 100_000])]
        ns: Vec<usize>,
        /// Operation-count multipliers; m = multiplier * n.
        #[arg(long, num_args = 1.., default_values_t = [1usize, 5, 10])]
        ms: Vec<usize>,
        /// Workloads to run.
        #[arg(
            long,
            num_args = 1..,
            value_parser = parse_workload,
            default_values = ["random_50_50", "adversarial", "batched_finds", "gnp"]
        )]
        workloads: Vec<Workload>,
        /// Structures to measure: list, tree-size, tree-rank.
        #[arg(
            long,
            num_args = 1..,
            value_parser = parse_structure,
            default_values = ["list", "tree-size", "tree-rank"]
        )]
        structures: Vec<StructureKind>,
        /// Trials per configuration.
        #[arg(long, default_value_t = 3)]
        trials: u32,
        /// Random seed.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Output file.
        #[arg(long, default_value = "results.csv")]
        output: PathBuf,
        /// Output format: csv, json (json also records the grid).
        #[arg(long, default_value = "csv")]
        format: String,
    },
    /// Summarize a results file for one workload.
    Report {
        /// Input file; `.json` files are read as JSON records, others as CSV.
        #[arg(long, default_value = "results.csv")]
        input: PathBuf,
        /// Workload to summarize.
        #[arg(long, value_parser = parse_workload, default_value = "random_50_50")]
        workload: Workload,
        /// Output format: terminal, json.
        #[arg(long, default_value = "terminal")]
        format: String,
    },
    /// List available workloads and structures.
    List,
}

fn parse_workload(name: &str) -> Result<Workload, String> {
    Workload::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = Workload::all().iter().map(|w| w.name()).collect();
        format!("unknown workload `{name}` (expected one of: {})", known.join(", "))
    })
}

fn parse_structure(name: &str) -> Result<StructureKind, String> {
    StructureKind::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = StructureKind::all().iter().map(|k| k.name()).collect();
        format!("unknown structure `{name}` (expected one of: {})", known.join(", "))
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            ns,
            ms,
            workloads,
            structures,
            trials,
            seed,
            output,
            format,
        } => cmd_run(
            ExperimentConfig {
                ns,
                multipliers: ms,
                workloads,
                kinds: structures,
                trials,
                seed,
            },
            &output,
            &format,
        ),
        Command::Report {
            input,
            workload,
            format,
        } => cmd_report(&input, workload, &format),
        Command::List => {
            cmd_list();
            Ok(())
        }
    }
}

fn cmd_run(config: ExperimentConfig, output: &Path, format: &str) -> Result<()> {
    config.validate().context("invalid experiment grid")?;
    tracing::info!(
        trials = config.trial_count().unwrap_or(0),
        seed = config.seed,
        "starting experiments"
    );
    let rows = experiment::run_all(&config).context("experiment failed")?;

    let row_count = rows.len();
    let file = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let out = BufWriter::new(file);
    let written = match format {
        "json" => results::write_json(out, &RunRecord { config, rows }),
        _ => results::write_csv(out, &rows),
    };
    written.with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(path = %output.display(), rows = row_count, "saved results");
    Ok(())
}

fn cmd_report(input: &Path, workload: Workload, format: &str) -> Result<()> {
    let file =
        File::open(input).with_context(|| format!("failed to open {}", input.display()))?;
    let reader = BufReader::new(file);
    let rows = if input.extension().is_some_and(|ext| ext == "json") {
        results::read_json(reader).map(|record| record.rows)
    } else {
        results::read_csv(reader)
    }
    .with_context(|| format!("failed to read {}", input.display()))?;

    let report = WorkloadReport::from_rows(&rows, workload);
    if report.rows == 0 {
        tracing::warn!(workload = workload.name(), "no rows for workload");
    }

    match format {
        "json" => println!("{}", report::to_json(&report)),
        _ => report::print_terminal(&report),
    }
    Ok(())
}

fn cmd_list() {
    println!("{:<15} Description", "Workload");
    println!("{}", "-".repeat(70));
    for w in Workload::all() {
        println!("{:<15} {}", w.name(), w.description());
    }
    println!();
    println!("{:<15} Description", "Structure");
    println!("{}", "-".repeat(70));
    for k in StructureKind::all() {
        println!("{:<15} {}", k.name(), k.label());
    }
}
