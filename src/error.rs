use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
/// Seed error
pub enum SeedError {
    #[error("Failed to open CSV file '{}': {source}", path.display())]
    FileOpen { path: PathBuf, source: io::Error },

    #[error("CSV must contain 'review' and 'class' columns. Found: {found:?}")]
    MissingColumns { found: Vec<String> },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("ItemReader from: {0}")]
    ItemReader(String),

    #[error("ItemProcessor from: {0}")]
    ItemProcessor(String),

    #[error("ItemWriter from: {0}")]
    ItemWriter(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}
