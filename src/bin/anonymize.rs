//! Lunch place anonymizer
//!
//! Keeps weekday lunch rows of a benefit transaction CSV and replaces place
//! names with "Lunch place A" .. "Lunch place L" so the data can be shared.
//! Rows of places beyond the twelfth are left out.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use lunch_stats::anonymize::anonymize_table;
use lunch_stats::table;
use lunch_stats::LUNCH_MARKER;

const DEFAULT_INPUT: &str = "tmp/data/epassi_statistics.csv";
const DEFAULT_OUTPUT_NAME: &str = "anonymous_version.csv";

#[derive(Parser)]
#[command(name = "lunch-anonymize")]
#[command(about = "Anonymize lunch place names in a benefit transaction CSV")]
struct Cli {
    /// Input CSV file
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output CSV file (default: anonymous_version.csv next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Benefit type value that marks a lunch transaction
    #[arg(long, env = "LUNCH_STATS_MARKER", default_value = LUNCH_MARKER)]
    lunch_marker: String,
}

fn default_output(input: &Path) -> PathBuf {
    input
        .parent()
        .map(|dir| dir.join(DEFAULT_OUTPUT_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_NAME))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let output = cli.output.unwrap_or_else(|| default_output(&cli.input));

    println!("Reading CSV file: {}", cli.input.display());
    let mut table = table::read_table_file(&cli.input).map_err(|e| {
        let context = e.input_context();
        anyhow::Error::new(e).context(context)
    })?;
    println!("Found {} transactions", table.len());

    let summary = anonymize_table(&mut table, &cli.lunch_marker);
    let csv = table::table_to_quoted_csv(&table).context("Failed to build output CSV")?;

    println!("Writing CSV file: {}", output.display());
    table::write_output(&output, &csv).context("Failed to write output CSV")?;

    eprintln!("\nAnonymization complete:");
    eprintln!("  Labeled places: {}", summary.mapped_places);
    eprintln!("  Places left out: {}", summary.dropped_places);
    eprintln!("  Rows written: {}", summary.kept_rows);
    eprintln!("  Rows left out: {}", summary.dropped_rows);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_next_to_input() {
        assert_eq!(
            default_output(Path::new("tmp/data/epassi_statistics.csv")),
            PathBuf::from("tmp/data/anonymous_version.csv")
        );
        assert_eq!(
            default_output(Path::new("input.csv")),
            PathBuf::from("anonymous_version.csv")
        );
    }
}
