/// HTTP submission of review payloads.
///
/// [`transport::ReviewTransport`] is the seam between the writer and the
/// network: [`transport::HttpTransport`] posts JSON with a blocking
/// `reqwest` client, and tests substitute their own implementation.
///
/// ```no_run
/// use std::{io, time::Duration};
///
/// use review_seeder::item::http::{transport::HttpTransport, writer::HttpReviewWriter};
///
/// let transport = HttpTransport::new("http://localhost:8000/reviews", Duration::from_secs(10))?;
/// let writer = HttpReviewWriter::new(transport, io::stdout());
/// # Ok::<(), review_seeder::SeedError>(())
/// ```
pub mod transport;

pub mod writer;
