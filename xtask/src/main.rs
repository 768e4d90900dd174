use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "lazydfs workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the traversal benchmarks under each feature set and write a report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

/// Baseline name and the `--features` value it is built with.
/// The first entry is the reference column in the report.
const FEATURE_SETS: &[(&str, &str)] = &[
    ("plain", ""),
    ("tracing", "tracing"),
    ("parallel", "parallel"),
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running traversal benchmarks...");

    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", "dfs_benchmark", "--release"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    for (baseline, features) in FEATURE_SETS {
        println!("\n>>> Benchmarking feature set: {}", baseline);
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");

        cmd.arg("bench")
            .arg("--bench")
            .arg("dfs_benchmark")
            .arg("--no-default-features");
        if !features.is_empty() {
            cmd.arg("--features").arg(features);
        }

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        cmd.arg("--save-baseline").arg(baseline);

        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench for {}", baseline))?;

        if !status.success() {
            eprintln!("Warning: Benchmark failed for {}", baseline);
        } else {
            println!("Finished {} in {:.2?}", baseline, start.elapsed());
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let mut results: HashMap<String, HashMap<String, f64>> = HashMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Traversal Benchmark Report")?;

    let mut workloads: Vec<_> = results.keys().collect();
    workloads.sort();

    let (reference, _) = FEATURE_SETS[0];

    write!(file, "| Workload |")?;
    for (baseline, _) in FEATURE_SETS {
        write!(file, " {} (Elem/s) | vs {} |", baseline, reference)?;
    }
    writeln!(file)?;

    write!(file, "|---|")?;
    for _ in FEATURE_SETS {
        write!(file, "---|---|")?;
    }
    writeln!(file)?;

    for workload in workloads {
        write!(file, "| {} |", workload)?;

        let reference_ops = results
            .get(workload)
            .and_then(|m| m.get(reference))
            .copied()
            .unwrap_or(0.0);

        for (baseline, _) in FEATURE_SETS {
            if let Some(ops) = results.get(workload).and_then(|m| m.get(*baseline)) {
                let rel = if reference_ops > 0.0 { ops / reference_ops } else { 0.0 };
                write!(file, " {} | **{:.2}x** |", format_rate(*ops), rel)?;
            } else {
                write!(file, " N/A | - |")?;
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_rate(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{:.0}", ops)
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|s| s.to_str()).map(str::to_string)
}

/// Reads the mean time of one criterion run, scaled by its throughput when present.
fn read_rate(workload_dir: &Path, estimates: &Path) -> Option<f64> {
    let mut elements = 1.0;
    let bench_json = workload_dir.join("benchmark.json");
    if let Ok(content) = fs::read_to_string(&bench_json) {
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&content) {
            if let Some(t) = json.get("throughput").and_then(|t| t.get("Elements")) {
                elements = t.as_f64().unwrap_or(1.0);
            }
        }
    }

    let content = fs::read_to_string(estimates).ok()?;
    let json = serde_json::from_str::<serde_json::Value>(&content).ok()?;
    let time_ns = json.get("mean")?.get("point_estimate")?.as_f64()?;
    (time_ns > 0.0).then(|| (elements * 1e9) / time_ns)
}

fn collect_results(dir: &Path, results: &mut HashMap<String, HashMap<String, f64>>) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results);
            continue;
        }
        if file_name(&path).as_deref() != Some("estimates.json") {
            continue;
        }

        // Structure: .../group/workload/baseline/estimates.json
        let Some(baseline_dir) = path.parent() else { continue };
        let Some(workload_dir) = baseline_dir.parent() else { continue };
        let (Some(baseline), Some(workload)) =
            (file_name(baseline_dir), file_name(workload_dir))
        else {
            continue;
        };
        if baseline == "report" || workload == "report" {
            continue;
        }
        if !FEATURE_SETS.iter().any(|(name, _)| *name == baseline) {
            continue;
        }

        if let Some(rate) = read_rate(workload_dir, &path) {
            results.entry(workload).or_default().insert(baseline, rate);
        }
    }
}
