use crate::error::SeedError;

/// Result of a read: `Ok(None)` once the source is exhausted.
pub type ItemReaderResult<I> = Result<Option<I>, SeedError>;

/// Result of a process call: `Ok(None)` filters the item out of the step.
pub type ItemProcessorResult<O> = Result<Option<O>, SeedError>;

pub type ItemWriterResult = Result<(), SeedError>;

/// Retrieval of the step input, one item at a time.
pub trait ItemReader<I> {
    fn read(&self) -> ItemReaderResult<I>;
}

/// Business logic applied to every item read.
///
/// Returning `Ok(None)` tells the step to skip the item: it is counted as
/// filtered, neither written nor failed.
pub trait ItemProcessor<I, O> {
    fn process(&self, item: &I) -> ItemProcessorResult<O>;
}

/// Output of the step, one item at a time.
///
/// A failed write is counted by the step and never interrupts it.
pub trait ItemWriter<O> {
    fn write(&self, item: &O) -> ItemWriterResult;

    fn open(&self) -> ItemWriterResult {
        Ok(())
    }

    fn close(&self) -> ItemWriterResult {
        Ok(())
    }
}
