/// Modified Zobler export tool: reads contizob.half (continent + soil code per
/// 0.5° cell), attaches lat/lon and labels, writes one flat CSV.
///
/// Data reference: Post, W.M., and L. Zobler. 2000. Global Soil Types,
/// 0.5-Degree Grid (Modified Zobler). ORNL DAAC, Oak Ridge, Tennessee, USA.
/// https://doi.org/10.3334/ORNLDAAC/540
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use zobler_core::export::{CellRecord, HEADER};
use zobler_core::grid::GridParams;
use zobler_core::pipeline::{preview_tail, run_with_records, PipelineConfig};

// ── CLI ──────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "contizob",
    about = "Export the Modified Zobler 0.5° soil grid to CSV with coordinates and labels"
)]
struct Args {
    /// contizob.half input (two integers per line: continent_code soil_code)
    #[arg(short, long, default_value = "contizob.half")]
    input: PathBuf,

    /// CSV output path (replaced if present)
    #[arg(short, long, default_value = "soil_data_with_names.csv")]
    output: PathBuf,

    /// JSON file with grid parameters {rows, cols, xllcorner, yllcorner, cellsize}
    #[arg(long)]
    grid_config: Option<PathBuf>,

    /// Number of grid rows (latitude bands)
    #[arg(long)]
    rows: Option<usize>,

    /// Number of grid columns (longitude bands)
    #[arg(long)]
    cols: Option<usize>,

    /// Lower-left corner longitude
    #[arg(long, allow_negative_numbers = true)]
    xllcorner: Option<f64>,

    /// Lower-left corner latitude
    #[arg(long, allow_negative_numbers = true)]
    yllcorner: Option<f64>,

    /// Cell size in degrees
    #[arg(long)]
    cellsize: Option<f64>,

    /// Print the last N records to stdout after export
    #[arg(long, default_value = "0")]
    preview: usize,

    /// Debug-level logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

// ── Setup ────────────────────────────────────────────────────────────────────

/// Logs go to stderr so `--preview` output on stdout stays clean.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Defaults, then the JSON file, then individual flags.
fn resolve_grid(args: &Args) -> Result<GridParams> {
    let mut grid = match &args.grid_config {
        Some(path) => read_grid_config(path)?,
        None => GridParams::default(),
    };
    if let Some(v) = args.rows {
        grid.rows = v;
    }
    if let Some(v) = args.cols {
        grid.cols = v;
    }
    if let Some(v) = args.xllcorner {
        grid.xllcorner = v;
    }
    if let Some(v) = args.yllcorner {
        grid.yllcorner = v;
    }
    if let Some(v) = args.cellsize {
        grid.cellsize = v;
    }
    grid.validate().context("Invalid grid configuration")?;
    Ok(grid)
}

fn read_grid_config(path: &Path) -> Result<GridParams> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

// ── Preview ──────────────────────────────────────────────────────────────────

fn label(v: Option<&str>) -> &str {
    v.unwrap_or("")
}

fn print_preview(out: &mut impl Write, records: &[CellRecord]) -> io::Result<()> {
    writeln!(
        out,
        "{:>9} {:>10} {:>14} {:>9}  {:<28} {}",
        HEADER[0], HEADER[1], HEADER[2], HEADER[3], HEADER[4], HEADER[5]
    )?;
    for r in records {
        writeln!(
            out,
            "{:>9.2} {:>10.2} {:>14} {:>9}  {:<28} {}",
            r.latitude,
            r.longitude,
            r.continent_code,
            r.soil_type,
            label(r.soil_type_name),
            label(r.continent_name),
        )?;
    }
    writeln!(out, "[{} rows]", records.len())
}

// ── Main ─────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let grid = resolve_grid(&args)?;
    let config = PipelineConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        grid,
    };

    let (records, summary) = run_with_records(&config).with_context(|| {
        format!("Export failed: {} -> {}", config.input.display(), config.output.display())
    })?;

    if args.preview > 0 {
        let stdout = io::stdout();
        print_preview(&mut stdout.lock(), preview_tail(&records, args.preview))?;
    }

    info!(
        records = summary.records,
        unmapped_soil = summary.unmapped_soil,
        unmapped_continent = summary.unmapped_continent,
        "done: {}",
        summary.output.display()
    );
    Ok(())
}
