//! Wiring of a complete seeding run.

use std::io::Write;

use log::info;

use crate::{
    config::SeedConfig,
    core::{
        item::{ItemReader, ItemWriter},
        step::{Step, StepBuilder, StepExecution},
    },
    error::SeedError,
    item::{
        console::DryRunWriter,
        csv::review_reader::{CsvReviewReaderBuilder, ReviewRow},
    },
    review::{
        payload::SeedRecord,
        processor::{ReviewProcessor, ReviewProcessorBuilder},
    },
};

pub const STEP_NAME: &str = "seed-reviews";

/// Runs one seeding pass as described by `config`.
///
/// Per-row status lines and the final `Summary: sent=<n>, failed=<m>` line
/// are written to `out`. Only setup failures are returned as errors: an
/// unreadable file, missing columns or an unusable configuration. Failed
/// rows are counted in the returned [`StepExecution`].
pub fn run<W: Write>(config: &SeedConfig, out: &mut W) -> Result<StepExecution, SeedError> {
    let reader = CsvReviewReaderBuilder::new().from_path(&config.file)?;

    let processor = ReviewProcessorBuilder::new()
        .product_ids(config.product_ids.clone())
        .title_max_len(config.title_max_len)
        .seed(config.seed)
        .build()?;

    info!(
        "Seeding reviews from '{}' {}",
        config.file.display(),
        if config.dry_run {
            "(dry run)".to_string()
        } else {
            format!("to {}", config.url)
        }
    );

    let execution = if config.dry_run {
        let writer = DryRunWriter::new(&mut *out);
        execute(config, &reader, &processor, &writer)?
    } else {
        submit(config, &reader, &processor, &mut *out)?
    };

    writeln!(
        out,
        "\nSummary: sent={}, failed={}",
        execution.write_count,
        execution.failed_count()
    )
    .map_err(|error| SeedError::ItemWriter(error.to_string()))?;

    Ok(execution)
}

#[cfg(feature = "http")]
fn submit<W: Write>(
    config: &SeedConfig,
    reader: &dyn ItemReader<ReviewRow>,
    processor: &ReviewProcessor,
    out: W,
) -> Result<StepExecution, SeedError> {
    use crate::item::http::{transport::HttpTransport, writer::HttpReviewWriter};

    let transport = HttpTransport::new(&config.url, config.timeout)?;
    let writer = HttpReviewWriter::new(transport, out);
    execute(config, reader, processor, &writer)
}

#[cfg(not(feature = "http"))]
fn submit<W: Write>(
    _config: &SeedConfig,
    _reader: &dyn ItemReader<ReviewRow>,
    _processor: &ReviewProcessor,
    _out: W,
) -> Result<StepExecution, SeedError> {
    Err(SeedError::Config(
        "built without the `http` feature, only --dry-run is available".to_string(),
    ))
}

fn execute(
    config: &SeedConfig,
    reader: &dyn ItemReader<ReviewRow>,
    processor: &ReviewProcessor,
    writer: &dyn ItemWriter<SeedRecord>,
) -> Result<StepExecution, SeedError> {
    let step = StepBuilder::new(STEP_NAME)
        .reader(reader)
        .processor(processor)
        .writer(writer)
        .limit(config.limit)
        .delay(config.delay)
        .build()?;

    let mut execution = StepExecution::new(step.name());
    step.execute(&mut execution)?;

    Ok(execution)
}
