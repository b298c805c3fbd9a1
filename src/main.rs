use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use lunch_stats::chart;
use lunch_stats::config::DEFAULT_TOP_N;
use lunch_stats::table;
use lunch_stats::{AnalysisConfig, LunchStatistics, LUNCH_MARKER};

#[derive(Parser)]
#[command(name = "lunch-stats")]
#[command(about = "Chart where weekday lunches were taken from a benefit transaction CSV", long_about = None)]
struct Cli {
    /// Path of the input CSV file
    csv_path: PathBuf,

    /// Path for the output figure (.png, or .svg for vector output)
    output_path: PathBuf,

    /// Number of places shown individually; the rest are grouped as "Other"
    #[arg(long, env = "LUNCH_STATS_TOP_N", default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Benefit type value that marks a lunch transaction
    #[arg(long, env = "LUNCH_STATS_MARKER", default_value = LUNCH_MARKER)]
    lunch_marker: String,

    /// Resolution multiplier for raster output
    #[arg(long, default_value_t = 2.0)]
    scale: f32,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AnalysisConfig::new(&cli.lunch_marker, cli.top_n);

    analyze(&cli.csv_path, &cli.output_path, &config, cli.scale)
}

fn analyze(csv_path: &Path, output_path: &Path, config: &AnalysisConfig, scale: f32) -> Result<()> {
    println!("Reading CSV file: {}", csv_path.display());
    let table = table::read_table_file(csv_path).map_err(|e| {
        let context = e.input_context();
        anyhow::Error::new(e).context(context)
    })?;
    println!("Found {} transactions", table.len());

    let stats = LunchStatistics::from_table(table, config);
    println!("Found {} weekday lunches", stats.total_visits());
    println!("Found {} places", stats.ranking.len());
    for place in stats.ranking.iter().take(config.top_n) {
        println!("  {:>4}  {:5.1}%  {}", place.count, place.percentage, place.place);
    }
    if stats.ranking.len() > config.top_n {
        println!("  ... and {} more", stats.ranking.len() - config.top_n);
    }

    println!("Writing figure: {}", output_path.display());
    chart::save_figure(&stats, output_path, scale).context("Failed to write figure")?;

    println!("Done!");
    Ok(())
}
