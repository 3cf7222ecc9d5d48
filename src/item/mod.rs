/// This module provides the CSV reader of labelled reviews.
pub mod csv;

/// This module provides a writer printing payloads instead of sending them.
pub mod console;

#[cfg(feature = "http")]
/// This module provides the HTTP transport and the writer submitting payloads with it.
pub mod http;
