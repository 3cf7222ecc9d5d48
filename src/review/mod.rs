//! Review-specific logic: titles, ratings and the payload processor.

pub mod payload;

pub mod processor;

pub mod title;
