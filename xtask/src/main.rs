use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "halo-visit workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the traversal benchmarks and compare against petgraph
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Run a single bench target instead of all of them
        #[arg(long)]
        bench: Option<String>,

        /// Build the crate with `tracing` enabled while benchmarking
        #[arg(long, default_value_t = false)]
        tracing: bool,
    },
    /// Render benchmark_results/report.md from existing criterion output
    Report,
}

const BENCHES: &[&str] = &["traversal_benchmark", "adaptor_benchmark"];

/// Benchmark ids for the reference implementation carry this prefix.
const PETGRAPH_PREFIX: &str = "petgraph_";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            bench,
            tracing,
        } => {
            if !report_only {
                let targets: Vec<&str> = match bench.as_deref() {
                    Some(name) if BENCHES.contains(&name) => vec![name],
                    Some(name) => bail!("unknown bench target `{name}` (expected one of {BENCHES:?})"),
                    None => BENCHES.to_vec(),
                };
                run_benchmarks(&targets, quick, tracing)?;
            }
            generate_report()?;
        }
        Commands::Report => generate_report()?,
    }

    Ok(())
}

fn run_benchmarks(targets: &[&str], quick: bool, tracing: bool) -> Result<()> {
    for target in targets {
        println!("\n>>> Benchmarking {target}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.arg("bench").arg("--bench").arg(target);
        if tracing {
            cmd.arg("--features").arg("tracing");
        }

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("failed to spawn cargo bench for {target}"))?;
        if !status.success() {
            bail!("benchmark {target} failed with {status}");
        }
        println!("Finished {target} in {:.2?}", start.elapsed());
    }

    Ok(())
}

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = BTreeMap::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("cannot create {}", report_path.display()))?;

    writeln!(file, "# Traversal Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | halo-visit | petgraph | petgraph / halo-visit |")?;
    writeln!(file, "|---|---|---|---|")?;

    for (workload, &ns) in &results {
        if is_reference(workload) {
            continue;
        }
        let reference = results.get(&reference_id(workload));
        match reference {
            Some(&ref_ns) => writeln!(
                file,
                "| {} | {} | {} | **{:.2}x** |",
                workload,
                format_time(ns),
                format_time(ref_ns),
                ref_ns / ns
            )?,
            None => writeln!(file, "| {} | {} | - | - |", workload, format_time(ns))?,
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Maps a benchmark id to the id of its petgraph counterpart.
///
/// `walkers/bfs/1000` pairs with `walkers/petgraph_bfs/1000`, and a top-level
/// `depth_first_search_x` pairs with `petgraph_depth_first_search_x`.
fn reference_id(workload: &str) -> String {
    let mut parts: Vec<&str> = workload.split('/').collect();
    let slot = if parts.len() > 1 { 1 } else { 0 };
    let renamed = format!("{PETGRAPH_PREFIX}{}", parts[slot]);
    parts[slot] = &renamed;
    parts.join("/")
}

fn is_reference(workload: &str) -> bool {
    workload.split('/').any(|p| p.starts_with(PETGRAPH_PREFIX))
}

fn format_time(ns: f64) -> String {
    if ns >= 1e9 {
        format!("{:.2} s", ns / 1e9)
    } else if ns >= 1e6 {
        format!("{:.2} ms", ns / 1e6)
    } else if ns >= 1e3 {
        format!("{:.2} µs", ns / 1e3)
    } else {
        format!("{ns:.0} ns")
    }
}

/// Finds every `<id>/new/estimates.json` below `dir` and records its mean
/// time in nanoseconds under `<id>`.
fn collect_results(root: &Path, dir: &Path, results: &mut BTreeMap<String, f64>) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Ok(()),
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) == Some("report") {
            continue;
        }
        let estimates: PathBuf = path.join("new").join("estimates.json");
        if estimates.is_file() {
            let content = fs::read_to_string(&estimates)
                .with_context(|| format!("cannot read {}", estimates.display()))?;
            let parsed: Estimates = serde_json::from_str(&content)
                .with_context(|| format!("malformed {}", estimates.display()))?;
            let id = path
                .strip_prefix(root)
                .with_context(|| format!("{} is outside {}", path.display(), root.display()))?
                .to_string_lossy()
                .replace('\\', "/");
            results.insert(id, parsed.mean.point_estimate);
        } else {
            collect_results(root, &path, results)?;
        }
    }

    Ok(())
}
