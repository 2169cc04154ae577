use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gist_bench::bench::BenchmarkOrchestrator;
use gist_bench::config::{self, RunSettings};

/// Spatial-index benchmark: times GiST index builds and spatial-join
/// queries against each configured database target.
#[derive(Parser, Debug)]
#[command(name = "gist-bench", version)]
struct Args {
    /// Path to the JSON config with the `connections` array
    #[arg(long)]
    config: PathBuf,

    /// Path to the SQL script that populates the working table
    #[arg(long)]
    data: PathBuf,

    /// Working table name
    #[arg(long, default_value = "roads_rdr")]
    table: String,

    /// Number of CREATE INDEX / SELECT trials per target
    #[arg(long, default_value_t = 10)]
    times: usize,

    /// Log phase-level detail
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "gist_bench=debug"
    } else {
        "gist_bench=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let targets = config::load_targets(&args.config)?;
    let import_sql = fs::read_to_string(&args.data)?;

    let settings = RunSettings::default()
        .with_table(args.table)
        .with_trials(args.times);
    info!(
        "Benchmarking {} target(s), table {}, {} trials each",
        targets.len(),
        settings.table,
        settings.trials
    );

    let orchestrator = BenchmarkOrchestrator::new(settings, import_sql);
    if let Err(e) = orchestrator.run_all(&targets).await {
        error!("Benchmark aborted: {}", e);
        return Err(e.into());
    }

    Ok(())
}
