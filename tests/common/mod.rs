#![allow(dead_code)]

pub mod mocks;

use std::{io::Write, path::Path, time::Duration};

use review_seeder::{config::SeedConfig, review::title::DEFAULT_TITLE_MAX_LEN};
use tempfile::NamedTempFile;

/// Three rows: an empty review, a class 0 review and a class 1 review.
pub const THREE_ROWS: &str = "review,class\n\
                              ,1\n\
                              \"Cheap plastic, broke on day two\",0\n\
                              Exactly what I needed,1\n";

pub fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Unable to create temp file");
    file.write_all(content.as_bytes())
        .expect("Unable to write temp file");
    file
}

pub fn config(path: &Path, dry_run: bool) -> SeedConfig {
    SeedConfig {
        file: path.to_path_buf(),
        url: "http://localhost:8000/reviews".to_string(),
        limit: 0,
        delay: Duration::ZERO,
        dry_run,
        product_ids: 1..=10,
        timeout: Duration::from_secs(2),
        title_max_len: DEFAULT_TITLE_MAX_LEN,
        seed: Some(42),
    }
}

/// Parses the `DRY RUN payload #<row>: <json>` lines of a run output.
pub fn dry_run_payloads(output: &str) -> Vec<(usize, serde_json::Value)> {
    output
        .lines()
        .filter_map(|line| line.strip_prefix("DRY RUN payload #"))
        .map(|line| {
            let (row, json) = line.split_once(": ").expect("Malformed dry run line");
            (
                row.parse().expect("Malformed row number"),
                serde_json::from_str(json).expect("Malformed payload"),
            )
        })
        .collect()
}
