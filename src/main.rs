//! CLI for the fixture generator.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mtxgen::{FixtureConfig, generate_with_progress};

#[derive(Parser)]
#[command(
    name = "mtxgen",
    about = "Generate matrix-multiplication test fixtures (.mtx triples)"
)]
struct Args {
    /// Dimension of the square matrices
    #[arg(long, default_value_t = 100)]
    size: usize,

    /// Number of (left, right, result) fixture sets
    #[arg(long, default_value_t = 9)]
    trials: usize,

    /// Inclusive lower bound for sampled entries
    #[arg(long, default_value_t = -2000, allow_hyphen_values = true)]
    low: i64,

    /// Exclusive upper bound for sampled entries
    #[arg(long, default_value_t = 2000, allow_hyphen_values = true)]
    high: i64,

    /// Destination directory (must already exist)
    #[arg(long, default_value = "tests")]
    out_dir: PathBuf,

    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = FixtureConfig {
        output_dir: args.out_dir,
        trial_count: args.trials,
        matrix_size: args.size,
        value_low: args.low,
        value_high: args.high,
        seed: args.seed,
    };

    println!(
        "Generating {} fixture sets ({}x{}, entries in [{}, {})) under {}:",
        config.trial_count,
        config.matrix_size,
        config.matrix_size,
        config.value_low,
        config.value_high,
        config.output_dir.display()
    );

    let total = config.trial_count;
    generate_with_progress(&config, |trial| {
        println!("  [{trial}/{total}] left{trial}.mtx right{trial}.mtx result{trial}.mtx");
    })
    .context("fixture generation failed")?;

    println!("Test fixtures generated!");
    Ok(())
}
