/// CSV support for reading labelled reviews.
///
/// The reader checks the header once, when it is built, so a file without
/// the `review` and `class` columns is rejected before any row is read.
/// Rows are then streamed one at a time without loading the whole file.
///
/// # Examples
///
/// ```
/// use review_seeder::core::item::ItemReader;
/// use review_seeder::item::csv::review_reader::CsvReviewReaderBuilder;
///
/// let csv_data = "\
/// review,class
/// \"Fast shipping, works great\",1
/// ,0
/// Stopped charging after two days,0
/// ";
///
/// let reader = CsvReviewReaderBuilder::new()
///     .from_reader(csv_data.as_bytes())
///     .unwrap();
///
/// let mut rows = Vec::new();
/// while let Some(row) = reader.read().unwrap() {
///     rows.push(row);
/// }
///
/// assert_eq!(rows.len(), 3);
/// assert_eq!(rows[1].review.as_deref(), Some(""));
/// assert_eq!(rows[2].row, 3);
/// ```
///
/// A header without the required columns is reported with the columns found:
///
/// ```
/// use review_seeder::SeedError;
/// use review_seeder::item::csv::review_reader::CsvReviewReaderBuilder;
///
/// let result = CsvReviewReaderBuilder::new().from_reader("text,label\nok,1\n".as_bytes());
///
/// assert!(matches!(result, Err(SeedError::MissingColumns { .. })));
/// ```
pub mod review_reader;
