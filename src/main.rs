//! Command-line entry point.
//!
//! ```bash
//! # print the payloads without sending anything
//! review-seeder --file TestReviews.csv --url http://localhost:8000/reviews --dry-run
//!
//! # send the first 50 reviews, 200ms apart
//! review-seeder --file TestReviews.csv --limit 50 --delay 0.2
//! ```
//!
//! Exits with code 2 when the CSV file cannot be opened, lacks the `review`
//! or `class` column, or the options are inconsistent.

use std::{io, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use review_seeder::{
    config::{SeedArgs, SeedConfig},
    seed,
};

const SETUP_FAILURE: u8 = 2;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = SeedArgs::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::from(SETUP_FAILURE)
        }
    }
}

fn run(args: SeedArgs) -> anyhow::Result<()> {
    let config = SeedConfig::try_from(args)?;

    let mut stdout = io::stdout().lock();
    seed::run(&config, &mut stdout)
        .with_context(|| format!("Seeding from '{}' aborted", config.file.display()))?;

    Ok(())
}
