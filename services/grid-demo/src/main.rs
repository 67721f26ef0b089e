//! Grid layout demo.
//!
//! Builds the regular, irregular and bounded datasets and prints a JSON
//! summary of each to stdout. Logs go to stderr.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use grid_layouts::{build_all, build_grid, DatasetSummary, GridKind, GridLayoutConfig};

#[derive(Parser, Debug)]
#[command(name = "grid-demo")]
#[command(about = "Build example lat/lon grid datasets and summarize them")]
struct Args {
    /// Which layout to build: regular, irregular, bounded, or all
    #[arg(short, long, default_value = "all")]
    grid: String,

    /// Rows of the bounded grid
    #[arg(long, env = "GRID_BOUNDED_ROWS")]
    rows: Option<usize>,

    /// Columns of the bounded grid
    #[arg(long, env = "GRID_BOUNDED_COLS")]
    cols: Option<usize>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if args.json_logs {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    let mut config = GridLayoutConfig::from_env();
    if let Some(rows) = args.rows {
        config.bounded_rows = rows;
    }
    if let Some(cols) = args.cols {
        config.bounded_cols = cols;
    }
    info!(
        rows = config.bounded_rows,
        cols = config.bounded_cols,
        step = config.step,
        "Loaded configuration"
    );

    let datasets = if args.grid.eq_ignore_ascii_case("all") {
        build_all(&config)?
    } else {
        let kind: GridKind = args.grid.parse()?;
        vec![(kind, build_grid(kind, &config)?)]
    };

    let summaries: BTreeMap<String, DatasetSummary> = datasets
        .iter()
        .map(|(kind, ds)| {
            info!(grid = %kind, dims = ?ds.dims(), "Built dataset");
            (kind.to_string(), ds.summary())
        })
        .collect();

    let json = if args.pretty {
        serde_json::to_string_pretty(&summaries)
    } else {
        serde_json::to_string(&summaries)
    }
    .context("failed to serialize dataset summaries")?;

    println!("{}", json);
    Ok(())
}
