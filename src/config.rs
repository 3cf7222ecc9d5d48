//! Command-line arguments and the validated configuration built from them.

use std::{ops::RangeInclusive, path::PathBuf, time::Duration};

use clap::Parser;

use crate::{error::SeedError, review::title::DEFAULT_TITLE_MAX_LEN};

pub const DEFAULT_FILE: &str = "TestReviews.csv";
pub const DEFAULT_URL: &str = "http://localhost:8000/reviews";

/// Seed reviews from a labelled CSV file to a backend `/reviews` endpoint.
///
/// Class `0` rows get a rating of 1-2, every other row a rating of 3-5.
#[derive(Parser, Clone, Debug)]
#[command(name = "review-seeder", version, about)]
pub struct SeedArgs {
    /// CSV file path, with at least `review` and `class` columns
    #[arg(long, short = 'f', env = "SEED_FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Target POST URL
    #[arg(long, short = 'u', env = "SEED_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Number of rows to send (0 = all)
    #[arg(long, short = 'n', env = "SEED_LIMIT", default_value = "0")]
    pub limit: usize,

    /// Delay between requests in seconds
    #[arg(long, short = 'd', env = "SEED_DELAY", default_value = "0.0", allow_negative_numbers = true)]
    pub delay: f64,

    /// Print payloads instead of sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Min product_id (inclusive)
    #[arg(long, env = "SEED_PRODUCT_MIN", default_value = "1", allow_negative_numbers = true)]
    pub product_min: i64,

    /// Max product_id (inclusive)
    #[arg(long, env = "SEED_PRODUCT_MAX", default_value = "10", allow_negative_numbers = true)]
    pub product_max: i64,

    /// Request timeout in seconds
    #[arg(long, env = "SEED_TIMEOUT", default_value = "10.0", allow_negative_numbers = true)]
    pub timeout: f64,

    /// Maximum title length before the ellipsis
    #[arg(long, env = "SEED_TITLE_MAX_LEN", default_value_t = DEFAULT_TITLE_MAX_LEN)]
    pub title_max_len: usize,

    /// Random seed for reproducible ratings and product ids
    #[arg(long, env = "SEED_RANDOM_SEED")]
    pub seed: Option<u64>,
}

/// Validated settings of a seeding run.
#[derive(Clone, Debug, PartialEq)]
pub struct SeedConfig {
    pub file: PathBuf,
    pub url: String,
    /// 0 means no limit
    pub limit: usize,
    pub delay: Duration,
    pub dry_run: bool,
    pub product_ids: RangeInclusive<i64>,
    pub timeout: Duration,
    pub title_max_len: usize,
    pub seed: Option<u64>,
}

impl TryFrom<SeedArgs> for SeedConfig {
    type Error = SeedError;

    fn try_from(args: SeedArgs) -> Result<Self, Self::Error> {
        if args.product_min > args.product_max {
            return Err(SeedError::Config(format!(
                "--product-min ({}) must not be greater than --product-max ({})",
                args.product_min, args.product_max
            )));
        }

        let timeout = Duration::try_from_secs_f64(args.timeout)
            .ok()
            .filter(|timeout| !timeout.is_zero())
            .ok_or_else(|| {
                SeedError::Config(format!(
                    "--timeout must be a positive number of seconds, got {}",
                    args.timeout
                ))
            })?;

        if !args.delay.is_finite() {
            return Err(SeedError::Config(format!(
                "--delay must be a finite number of seconds, got {}",
                args.delay
            )));
        }
        // a negative delay means no delay
        let delay = Duration::try_from_secs_f64(args.delay.max(0.0)).map_err(|_| {
            SeedError::Config(format!("--delay is out of range, got {}", args.delay))
        })?;

        Ok(Self {
            file: args.file,
            url: args.url,
            limit: args.limit,
            delay,
            dry_run: args.dry_run,
            product_ids: args.product_min..=args.product_max,
            timeout,
            title_max_len: args.title_max_len,
            seed: args.seed,
        })
    }
}
