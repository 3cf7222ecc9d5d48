use std::{cell::RefCell, ops::RangeInclusive};

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    core::item::{ItemProcessor, ItemProcessorResult},
    error::SeedError,
    item::csv::review_reader::ReviewRow,
};

use super::{
    payload::{DEFAULT_PRODUCT_IDS, SeedRecord, make_payload},
    title::DEFAULT_TITLE_MAX_LEN,
};

/// Turns CSV review rows into payloads ready to be submitted.
///
/// Rows with an absent or blank review are filtered out.
pub struct ReviewProcessor {
    product_ids: RangeInclusive<i64>,
    title_max_len: usize,
    rng: RefCell<StdRng>,
}

impl ItemProcessor<ReviewRow, SeedRecord> for ReviewProcessor {
    fn process(&self, item: &ReviewRow) -> ItemProcessorResult<SeedRecord> {
        let review = match item.review.as_deref() {
            Some(review) if !review.trim().is_empty() => review,
            _ => return Ok(None),
        };

        let payload = make_payload(
            review,
            item.class.as_deref(),
            &self.product_ids,
            self.title_max_len,
            &mut *self.rng.borrow_mut(),
        );

        Ok(Some(SeedRecord {
            row: item.row,
            payload,
        }))
    }
}

pub struct ReviewProcessorBuilder {
    product_ids: RangeInclusive<i64>,
    title_max_len: usize,
    seed: Option<u64>,
}

impl Default for ReviewProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewProcessorBuilder {
    pub fn new() -> Self {
        Self {
            product_ids: DEFAULT_PRODUCT_IDS,
            title_max_len: DEFAULT_TITLE_MAX_LEN,
            seed: None,
        }
    }

    /// Inclusive range the synthetic product ids are drawn from.
    pub fn product_ids(mut self, product_ids: RangeInclusive<i64>) -> Self {
        self.product_ids = product_ids;
        self
    }

    pub fn title_max_len(mut self, title_max_len: usize) -> Self {
        self.title_max_len = title_max_len;
        self
    }

    /// Seeds the random generator; OS entropy is used otherwise.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<ReviewProcessor, SeedError> {
        if self.product_ids.is_empty() {
            return Err(SeedError::Config(format!(
                "product id range {}..={} is empty",
                self.product_ids.start(),
                self.product_ids.end()
            )));
        }

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(ReviewProcessor {
            product_ids: self.product_ids,
            title_max_len: self.title_max_len,
            rng: RefCell::new(rng),
        })
    }
}
