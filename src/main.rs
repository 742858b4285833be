// =============================================================================
// bizpulse — Daily Business-Metrics Analysis — Main Entry Point
// =============================================================================
//
// Runs the four-stage analysis pipeline over a single day's figures and
// prints / persists the resulting report. Without arguments a built-in
// sample record is analysed; `--scenarios` runs the three canned demo
// scenarios and writes one file per scenario plus a combined summary.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod metrics;
mod pipeline;
mod report;
mod rules;
mod scenarios;
mod storage;
mod types;
mod validate;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::pipeline::Pipeline;
use crate::report::Report;
use crate::rules::Thresholds;
use crate::scenarios::{CombinedReport, ScenarioResult};

#[derive(Debug, Parser)]
#[command(name = "bizpulse", version, about = "Daily business-metrics analysis")]
struct Args {
    /// Analyse a JSON input record from this file instead of the built-in
    /// sample.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Run the three built-in demo scenarios and write a combined summary.
    #[arg(long, conflicts_with = "input")]
    scenarios: bool,

    /// Threshold configuration file (falls back to defaults when absent).
    #[arg(long, default_value = "thresholds.json")]
    thresholds: PathBuf,

    /// Directory reports are written to.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Print reports without writing any files.
    #[arg(long)]
    no_save: bool,

    /// Emit the detailed report variant (echoed input, previous-day CAC,
    /// generation timestamp).
    #[arg(long)]
    detailed: bool,
}

fn main() -> Result<()> {
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let thresholds = Thresholds::load(&args.thresholds).unwrap_or_else(|e| {
        warn!(error = %e, "failed to load thresholds, using defaults");
        Thresholds::default()
    });
    let pipeline = Pipeline::new(thresholds);

    if args.scenarios {
        run_scenarios(&pipeline, &args)
    } else {
        run_single(&pipeline, &args)
    }
}

/// Analyse one record: the `--input` file if given, the built-in sample
/// otherwise.
fn run_single(pipeline: &Pipeline, args: &Args) -> Result<()> {
    let raw = match &args.input {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read input from {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("failed to parse input from {}", path.display()))?
        }
        None => {
            info!("no input file given, analysing the built-in sample");
            scenarios::sample_input()
        }
    };

    let report = analyse(pipeline, &raw, args.detailed)?;
    print_report(&report)?;

    if !args.no_save {
        let path = args.out.join("report.json");
        // A failed write is logged but the computed report stands.
        if let Err(e) = storage::save_report(&report, &path) {
            error!(error = %e, "failed to persist report");
        }
    }

    Ok(())
}

/// Analyse every built-in scenario, persisting one report per scenario plus
/// the combined summary document.
fn run_scenarios(pipeline: &Pipeline, args: &Args) -> Result<()> {
    let mut results = Vec::new();

    for (name, raw) in scenarios::all() {
        info!(scenario = name, "analysing scenario");
        let report = analyse(pipeline, &raw, args.detailed)?;

        if !args.no_save {
            let path = args.out.join(format!("report_{name}.json"));
            if let Err(e) = storage::save_report(&report, &path) {
                error!(scenario = name, error = %e, "failed to persist scenario report");
            }
        }

        results.push(ScenarioResult {
            scenario: name.to_string(),
            report,
        });
    }

    let combined = CombinedReport::new(results);
    println!("{}", serde_json::to_string_pretty(&combined)?);

    if !args.no_save {
        let path = args.out.join("report_combined.json");
        if let Err(e) = storage::save_combined(&combined, &path) {
            error!(error = %e, "failed to persist combined report");
        }
    }

    Ok(())
}

fn analyse(pipeline: &Pipeline, raw: &serde_json::Value, detailed: bool) -> Result<Report> {
    let report = if detailed {
        pipeline.run_detailed(raw)
    } else {
        pipeline.run(raw)
    };
    report.context("input record failed validation")
}

fn print_report(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
