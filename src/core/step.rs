use std::{
    thread,
    time::{Duration, Instant},
};

use log::{debug, info, warn};
use uuid::Uuid;

use crate::error::SeedError;

use super::item::{ItemProcessor, ItemReader, ItemWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The step has been created but not executed yet.
    Starting,
    /// Every item of the reader has been consumed.
    Completed,
    /// The step stopped early because the write limit was reached.
    LimitReached,
}

/// Counters and timings of one step execution.
///
/// `write_count` is the number of items successfully sent, and
/// [`StepExecution::failed_count`] aggregates every per-item failure.
#[derive(Debug)]
pub struct StepExecution {
    /// Unique identifier for this execution
    pub id: Uuid,
    /// Human-readable name for the step
    pub name: String,
    pub status: StepStatus,
    pub start_time: Instant,
    pub end_time: Instant,
    pub duration: Duration,
    /// Number of items successfully read
    pub read_count: usize,
    /// Number of items the processor chose to skip
    pub filter_count: usize,
    /// Number of items successfully written
    pub write_count: usize,
    /// Number of errors encountered during reading
    pub read_error_count: usize,
    /// Number of errors encountered during processing
    pub process_error_count: usize,
    /// Number of errors encountered during writing
    pub write_error_count: usize,
}

impl StepExecution {
    pub fn new(name: &str) -> Self {
        let now = Instant::now();
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            status: StepStatus::Starting,
            start_time: now,
            end_time: now,
            duration: Duration::ZERO,
            read_count: 0,
            filter_count: 0,
            write_count: 0,
            read_error_count: 0,
            process_error_count: 0,
            write_error_count: 0,
        }
    }

    pub fn failed_count(&self) -> usize {
        self.read_error_count + self.process_error_count + self.write_error_count
    }
}

pub trait Step {
    /// Runs the step to completion, updating `step_execution` as it goes.
    ///
    /// Per-item failures are counted, never returned.
    fn execute(&self, step_execution: &mut StepExecution) -> Result<(), SeedError>;
}

/// Reads, processes and writes items one at a time.
///
/// The step stops once `limit` items have been written (0 means no limit)
/// and pauses for `delay` after every item that reached the writer.
pub struct SeedStep<'a, I, O> {
    name: String,
    reader: &'a dyn ItemReader<I>,
    processor: &'a dyn ItemProcessor<I, O>,
    writer: &'a dyn ItemWriter<O>,
    limit: usize,
    delay: Duration,
}

impl<I, O> SeedStep<'_, I, O> {
    pub fn name(&self) -> &str {
        &self.name
    }

    fn is_limit_reached(&self, step_execution: &StepExecution) -> bool {
        self.limit > 0 && step_execution.write_count >= self.limit
    }

    fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn manage_error(result: Result<(), SeedError>) {
        if let Err(error) = result {
            warn!("Non-fatal error: {}", error);
        }
    }
}

impl<I, O> Step for SeedStep<'_, I, O> {
    fn execute(&self, step_execution: &mut StepExecution) -> Result<(), SeedError> {
        let start_time = Instant::now();

        info!(
            "Start of step: {}, id: {}",
            step_execution.name, step_execution.id
        );

        Self::manage_error(self.writer.open());

        step_execution.status = loop {
            if self.is_limit_reached(step_execution) {
                debug!("Write limit of {} items reached", self.limit);
                break StepStatus::LimitReached;
            }

            let item = match self.reader.read() {
                Ok(Some(item)) => {
                    step_execution.read_count += 1;
                    item
                }
                Ok(None) => break StepStatus::Completed,
                Err(error) => {
                    warn!("Error reading item: {}", error);
                    step_execution.read_error_count += 1;
                    continue;
                }
            };

            match self.processor.process(&item) {
                Ok(Some(processed)) => match self.writer.write(&processed) {
                    Ok(()) => step_execution.write_count += 1,
                    Err(error) => {
                        debug!("Error writing item: {}", error);
                        step_execution.write_error_count += 1;
                    }
                },
                Ok(None) => {
                    debug!("Item filtered by processor");
                    step_execution.filter_count += 1;
                    continue;
                }
                Err(error) => {
                    warn!("Error processing item: {}", error);
                    step_execution.process_error_count += 1;
                }
            }

            self.pause();
        };

        Self::manage_error(self.writer.close());

        step_execution.start_time = start_time;
        step_execution.end_time = Instant::now();
        step_execution.duration = start_time.elapsed();

        info!(
            "End of step: {}, id: {}, written: {}, failed: {}, filtered: {}, duration: {:?}",
            step_execution.name,
            step_execution.id,
            step_execution.write_count,
            step_execution.failed_count(),
            step_execution.filter_count,
            step_execution.duration
        );

        Ok(())
    }
}

pub struct StepBuilder<'a, I, O> {
    name: String,
    reader: Option<&'a dyn ItemReader<I>>,
    processor: Option<&'a dyn ItemProcessor<I, O>>,
    writer: Option<&'a dyn ItemWriter<O>>,
    limit: usize,
    delay: Duration,
}

impl<'a, I, O> StepBuilder<'a, I, O> {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            reader: None,
            processor: None,
            writer: None,
            limit: 0,
            delay: Duration::ZERO,
        }
    }

    pub fn reader(mut self, reader: &'a dyn ItemReader<I>) -> Self {
        self.reader = Some(reader);
        self
    }

    pub fn processor(mut self, processor: &'a dyn ItemProcessor<I, O>) -> Self {
        self.processor = Some(processor);
        self
    }

    pub fn writer(mut self, writer: &'a dyn ItemWriter<O>) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Maximum number of items to write, 0 for no limit.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn build(self) -> Result<SeedStep<'a, I, O>, SeedError> {
        let missing = |part: &str| SeedError::Config(format!("{part} is required for building a step"));

        Ok(SeedStep {
            reader: self.reader.ok_or_else(|| missing("Reader"))?,
            processor: self.processor.ok_or_else(|| missing("Processor"))?,
            writer: self.writer.ok_or_else(|| missing("Writer"))?,
            name: self.name,
            limit: self.limit,
            delay: self.delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::core::item::{ItemProcessorResult, ItemReaderResult, ItemWriterResult};

    struct VecReader {
        items: RefCell<Vec<Result<String, SeedError>>>,
    }

    impl VecReader {
        fn new(items: Vec<Result<&str, &str>>) -> Self {
            let mut items: Vec<Result<String, SeedError>> = items
                .into_iter()
                .map(|item| {
                    item.map(str::to_string)
                        .map_err(|e| SeedError::ItemReader(e.to_string()))
                })
                .collect();
            items.reverse();
            Self {
                items: RefCell::new(items),
            }
        }
    }

    impl ItemReader<String> for VecReader {
        fn read(&self) -> ItemReaderResult<String> {
            self.items.borrow_mut().pop().transpose()
        }
    }

    /// Filters blank items and fails on items equal to "boom".
    struct TrimProcessor;

    impl ItemProcessor<String, String> for TrimProcessor {
        fn process(&self, item: &String) -> ItemProcessorResult<String> {
            match item.trim() {
                "" => Ok(None),
                "boom" => Err(SeedError::ItemProcessor("boom".to_string())),
                trimmed => Ok(Some(trimmed.to_string())),
            }
        }
    }

    /// Rejects items starting with "bad".
    #[derive(Default)]
    struct RecordingWriter {
        written: RefCell<Vec<String>>,
        opened: Cell<bool>,
        closed: Cell<bool>,
    }

    impl ItemWriter<String> for RecordingWriter {
        fn write(&self, item: &String) -> ItemWriterResult {
            if item.starts_with("bad") {
                return Err(SeedError::Rejected {
                    status: 500,
                    body: item.clone(),
                });
            }
            self.written.borrow_mut().push(item.clone());
            Ok(())
        }

        fn open(&self) -> ItemWriterResult {
            self.opened.set(true);
            Ok(())
        }

        fn close(&self) -> ItemWriterResult {
            self.closed.set(true);
            Ok(())
        }
    }

    fn run(reader: &VecReader, writer: &RecordingWriter, limit: usize) -> StepExecution {
        let step = StepBuilder::new("test")
            .reader(reader)
            .processor(&TrimProcessor)
            .writer(writer)
            .limit(limit)
            .build()
            .unwrap();
        let mut execution = StepExecution::new(step.name());
        step.execute(&mut execution).unwrap();
        execution
    }

    #[test]
    fn counts_written_filtered_and_failed_items() {
        let reader = VecReader::new(vec![
            Ok("a"),
            Ok("   "),
            Ok("bad one"),
            Err("broken record"),
            Ok("boom"),
            Ok("b"),
        ]);
        let writer = RecordingWriter::default();

        let execution = run(&reader, &writer, 0);

        assert_eq!(execution.status, StepStatus::Completed);
        assert_eq!(*writer.written.borrow(), vec!["a", "b"]);
        assert_eq!(execution.read_count, 5);
        assert_eq!(execution.write_count, 2);
        assert_eq!(execution.filter_count, 1);
        assert_eq!(execution.read_error_count, 1);
        assert_eq!(execution.process_error_count, 1);
        assert_eq!(execution.write_error_count, 1);
        assert_eq!(execution.failed_count(), 3);
        assert!(writer.opened.get());
        assert!(writer.closed.get());
    }

    #[test]
    fn stops_once_limit_of_written_items_is_reached() {
        let reader = VecReader::new(vec![Ok("a"), Ok("bad"), Ok(""), Ok("b"), Ok("c")]);
        let writer = RecordingWriter::default();

        let execution = run(&reader, &writer, 2);

        assert_eq!(execution.status, StepStatus::LimitReached);
        assert_eq!(*writer.written.borrow(), vec!["a", "b"]);
        assert_eq!(execution.write_error_count, 1);
        assert_eq!(execution.filter_count, 1);
        // "c" is left unread
        assert_eq!(reader.items.borrow().len(), 1);
    }

    #[test]
    fn empty_reader_completes_without_writes() {
        let reader = VecReader::new(vec![]);
        let writer = RecordingWriter::default();

        let execution = run(&reader, &writer, 0);

        assert_eq!(execution.status, StepStatus::Completed);
        assert_eq!(execution.read_count, 0);
        assert_eq!(execution.write_count, 0);
        assert!(writer.closed.get());
    }

    #[test]
    fn pauses_after_each_unfiltered_item() {
        let delay = Duration::from_millis(50);
        let reader = VecReader::new(vec![Ok("a"), Ok(""), Ok(" "), Ok("  "), Ok("b")]);
        let writer = RecordingWriter::default();
        let step = StepBuilder::new("test")
            .reader(&reader)
            .processor(&TrimProcessor)
            .writer(&writer)
            .delay(delay)
            .build()
            .unwrap();
        let mut execution = StepExecution::new(step.name());

        let started = Instant::now();
        step.execute(&mut execution).unwrap();
        let elapsed = started.elapsed();

        assert_eq!(execution.write_count, 2);
        assert_eq!(execution.filter_count, 3);
        assert!(elapsed >= delay * 2, "elapsed {elapsed:?}");
        // five pauses would take 250ms
        assert!(elapsed < delay * 4, "elapsed {elapsed:?}");
    }

    #[test]
    fn build_requires_a_writer() {
        let reader = VecReader::new(vec![]);

        let result = StepBuilder::<String, String>::new("test")
            .reader(&reader)
            .processor(&TrimProcessor)
            .build();

        assert!(matches!(result, Err(SeedError::Config(_))));
    }
}
