//! Staffing planner CLI.
//!
//! **Usage:**
//! ```bash
//! u-staffing <INPUT> [-o output.txt] [--config staffing.toml] [--horizon N] [--report report.json]
//! ```
//!
//! Logging goes to stderr and honors `RUST_LOG` (default `info`).

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use u_staffing::io::{parse_file, write_plan_file};
use u_staffing::models::StaffingPlan;
use u_staffing::scheduler::{PlanKpi, StaffingScheduler};
use u_staffing::SchedulerConfig;

/// Day-by-day contributor staffing planner
#[derive(Parser, Debug)]
#[clap(name = "u-staffing")]
#[clap(about = "Assign contributors to projects day by day, maximizing earned score")]
struct Args {
    /// Input file (contributors and projects)
    input: PathBuf,

    /// Output file for the plan
    #[clap(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// TOML configuration file
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of days to simulate (overrides the config file)
    #[clap(long)]
    horizon: Option<u32>,

    /// Write a JSON summary of the plan and its KPIs
    #[clap(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

#[derive(Serialize)]
struct Report<'a> {
    config: &'a SchedulerConfig,
    kpi: &'a PlanKpi,
    plan: &'a StaffingPlan,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SchedulerConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SchedulerConfig::default(),
    };
    if let Some(days) = args.horizon {
        config = config.with_horizon(days);
    }

    let repository = parse_file(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    info!(
        contributors = repository.contributors.len(),
        projects = repository.projects.len(),
        horizon = config.horizon_days,
        "starting run"
    );

    let plan = StaffingScheduler::new()
        .with_config(config.clone())
        .run(&repository)
        .context("scheduling failed")?;

    write_plan_file(&plan, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    let kpi = PlanKpi::calculate(&plan, &repository);
    info!(
        committed = kpi.projects_completed,
        unscheduled = kpi.projects_unscheduled,
        score = kpi.total_score,
        output = %args.output.display(),
        "plan written"
    );

    if let Some(path) = &args.report {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let report = Report {
            config: &config,
            kpi: &kpi,
            plan: &plan,
        };
        serde_json::to_writer_pretty(BufWriter::new(file), &report)
            .with_context(|| format!("writing report {}", path.display()))?;
    }

    Ok(())
}
