use std::{cell::RefCell, io::Write};

use log::debug;

use crate::{
    core::item::{ItemWriter, ItemWriterResult},
    error::SeedError,
    review::payload::SeedRecord,
};

/// Prints every record as JSON instead of submitting it.
///
/// Each record is written on its own line as
/// `DRY RUN payload #<row>: <json>`.
pub struct DryRunWriter<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> DryRunWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }
}

impl<W: Write> ItemWriter<SeedRecord> for DryRunWriter<W> {
    fn write(&self, item: &SeedRecord) -> ItemWriterResult {
        let json = serde_json::to_string(&item.payload)
            .map_err(|error| SeedError::ItemWriter(error.to_string()))?;

        debug!("Dry run, not sending row #{}", item.row);

        writeln!(self.out.borrow_mut(), "DRY RUN payload #{}: {}", item.row, json)
            .map_err(|error| SeedError::ItemWriter(error.to_string()))
    }

    fn close(&self) -> ItemWriterResult {
        self.out
            .borrow_mut()
            .flush()
            .map_err(|error| SeedError::ItemWriter(error.to_string()))
    }
}
