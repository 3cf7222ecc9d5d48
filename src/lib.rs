#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # Review seeder

 Seeds a reviews backend with test data. Each row of a labelled CSV file
 (`review` text and a `class` sentiment label) becomes a review record with a
 synthesized title, rating and product id, and is submitted with a JSON
 `POST` to the backend's `/reviews` endpoint.

 ## Core Concepts

- **ItemReader:** retrieves the input one item at a time. Here, the
  [`CsvReviewReader`](item::csv::review_reader::CsvReviewReader) yields review rows.
- **ItemProcessor:** turns an input item into an output item, or filters it.
  The [`ReviewProcessor`](review::processor::ReviewProcessor) builds the
  payload and skips rows without review text.
- **ItemWriter:** outputs the items, one at a time. Records are either posted
  by the [`HttpReviewWriter`](item::http::writer::HttpReviewWriter) or printed
  by the [`DryRunWriter`](item::console::DryRunWriter).
- **Step:** drives reader, processor and writer over the whole file and
  counts what was sent, filtered and failed.

 ## Record mapping

| Field           | Value                                                         |
|-----------------|---------------------------------------------------------------|
| `review_title`  | the body with whitespace collapsed, cut to 60 characters + `...` |
| `review_body`   | the trimmed `review` column                                   |
| `product_id`    | a random integer in `[product-min, product-max]`, as a string |
| `review_rating` | 1-2 when `class` is `0`, 3-5 otherwise (unparseable classes included) |

 ## Features

| **Feature** | **Description**                                            |
|-------------|------------------------------------------------------------|
| http        | Enables the HTTP transport and writer (enabled by default) |

 ## Getting Started

```no_run
use std::io;

use clap::Parser;
use review_seeder::{
    config::{SeedArgs, SeedConfig},
    seed,
};

fn main() -> Result<(), review_seeder::SeedError> {
    let args = SeedArgs::parse_from(["review-seeder", "--file", "TestReviews.csv", "--dry-run"]);
    let config = SeedConfig::try_from(args)?;

    let execution = seed::run(&config, &mut io::stdout())?;
    assert_eq!(execution.failed_count(), 0);

    Ok(())
}
```
 */

/// Core module for the read-process-write step
pub mod core;

/// Error types for seeding
pub mod error;

#[doc(inline)]
pub use error::*;

/// Command-line arguments and validated configuration
pub mod config;

/// Readers and writers (CSV reader, dry-run and HTTP writers)
pub mod item;

/// Review titles, ratings and payloads
pub mod review;

/// A complete seeding run
pub mod seed;
