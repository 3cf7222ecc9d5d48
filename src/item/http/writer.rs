use std::{cell::RefCell, io::Write};

use log::{debug, warn};

use crate::{
    core::item::{ItemWriter, ItemWriterResult},
    error::SeedError,
    review::payload::SeedRecord,
};

use super::transport::ReviewTransport;

/// Submits records through a [`ReviewTransport`] and reports each outcome.
///
/// One line is printed per record:
/// - `OK #<row> -> <status>` for a 2xx answer,
/// - `FAILED #<row> -> <status>: <body>` for any other status,
/// - `EXCEPTION #<row>: <error>` when the request itself failed.
///
/// The two failure cases are also returned as errors so the step counts them.
pub struct HttpReviewWriter<T, W: Write> {
    transport: T,
    out: RefCell<W>,
}

impl<T: ReviewTransport, W: Write> HttpReviewWriter<T, W> {
    pub fn new(transport: T, out: W) -> Self {
        Self {
            transport,
            out: RefCell::new(out),
        }
    }

    fn report(&self, line: std::fmt::Arguments) -> ItemWriterResult {
        writeln!(self.out.borrow_mut(), "{line}")
            .map_err(|error| SeedError::ItemWriter(error.to_string()))
    }
}

impl<T: ReviewTransport, W: Write> ItemWriter<SeedRecord> for HttpReviewWriter<T, W> {
    fn write(&self, item: &SeedRecord) -> ItemWriterResult {
        let row = item.row;

        match self.transport.send(&item.payload) {
            Ok(response) if response.is_success() => {
                debug!("Row #{} accepted with status {}", row, response.status);
                // the row is stored even when its report line is lost
                if let Err(error) = self.report(format_args!("OK #{row} -> {}", response.status)) {
                    warn!("Unable to report row #{}: {}", row, error);
                }
                Ok(())
            }
            Ok(response) => {
                self.report(format_args!(
                    "FAILED #{row} -> {}: {}",
                    response.status, response.body
                ))?;
                Err(SeedError::Rejected {
                    status: response.status,
                    body: response.body,
                })
            }
            Err(error) => {
                self.report(format_args!("EXCEPTION #{row}: {error}"))?;
                Err(error)
            }
        }
    }

    fn close(&self) -> ItemWriterResult {
        self.out
            .borrow_mut()
            .flush()
            .map_err(|error| SeedError::ItemWriter(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{item::http::transport::TransportResponse, review::payload::ReviewPayload};

    /// Answers with the queued results, in order.
    struct ScriptedTransport {
        answers: RefCell<Vec<Result<TransportResponse, SeedError>>>,
        calls: Cell<usize>,
    }

    impl ScriptedTransport {
        fn new(mut answers: Vec<Result<TransportResponse, SeedError>>) -> Self {
            answers.reverse();
            Self {
                answers: RefCell::new(answers),
                calls: Cell::new(0),
            }
        }
    }

    impl ReviewTransport for ScriptedTransport {
        fn send(&self, _payload: &ReviewPayload) -> Result<TransportResponse, SeedError> {
            self.calls.set(self.calls.get() + 1);
            self.answers
                .borrow_mut()
                .pop()
                .unwrap_or_else(|| Err(SeedError::Transport("no answer queued".to_string())))
        }
    }

    fn record(row: usize) -> SeedRecord {
        SeedRecord {
            row,
            payload: ReviewPayload {
                review_title: "Great".to_string(),
                review_body: "Great".to_string(),
                product_id: "1".to_string(),
                review_rating: 5,
            },
        }
    }

    fn status(status: u16, body: &str) -> Result<TransportResponse, SeedError> {
        Ok(TransportResponse {
            status,
            body: body.to_string(),
        })
    }

    #[test]
    fn reports_each_outcome() {
        let transport = ScriptedTransport::new(vec![
            status(201, "{\"id\":1}"),
            status(422, "{\"detail\":\"invalid product\"}"),
            Err(SeedError::Transport("operation timed out".to_string())),
        ]);
        let mut buffer = Vec::new();
        {
            let writer = HttpReviewWriter::new(&transport, &mut buffer);

            assert!(writer.write(&record(1)).is_ok());
            assert!(matches!(
                writer.write(&record(2)),
                Err(SeedError::Rejected { status: 422, .. })
            ));
            assert!(matches!(writer.write(&record(5)), Err(SeedError::Transport(_))));
            writer.close().unwrap();
        }

        assert_eq!(transport.calls.get(), 3);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "OK #1 -> 201\n\
             FAILED #2 -> 422: {\"detail\":\"invalid product\"}\n\
             EXCEPTION #5: Request failed: operation timed out\n"
        );
    }

    /// Output that refuses every write.
    struct BrokenOutput;

    impl Write for BrokenOutput {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn accepted_row_stays_sent_when_report_fails() {
        let transport = ScriptedTransport::new(vec![
            status(201, ""),
            status(500, "boom"),
        ]);
        let writer = HttpReviewWriter::new(&transport, BrokenOutput);

        assert!(writer.write(&record(1)).is_ok());
        assert!(matches!(writer.write(&record(2)), Err(SeedError::ItemWriter(_))));
        assert_eq!(transport.calls.get(), 2);
    }
}
