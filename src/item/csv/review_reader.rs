use csv::{ByteRecord, ByteRecordsIntoIter, ReaderBuilder};
use std::{
    cell::{Cell, RefCell},
    fs::File,
    io::Read,
    path::Path,
};

use crate::{
    core::item::{ItemReader, ItemReaderResult},
    error::SeedError,
};

pub const REVIEW_COLUMN: &str = "review";
pub const CLASS_COLUMN: &str = "class";

const UTF8_BOM: &str = "\u{feff}";

/// One data row of the reviews CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    /// 1-based position of the row, header excluded
    pub row: usize,
    /// `None` when the row is too short to hold the column
    pub review: Option<String>,
    pub class: Option<String>,
}

/// Reads [`ReviewRow`]s from CSV data with a header row.
///
/// The header is checked when the reader is built: both the `review` and
/// `class` columns must be present, other columns are ignored. Field bytes
/// that are not valid UTF-8 are replaced with `U+FFFD`, and rows shorter
/// than the header are accepted with their missing fields set to `None`.
///
/// # Examples
///
/// ```
/// use review_seeder::core::item::ItemReader;
/// use review_seeder::item::csv::review_reader::CsvReviewReaderBuilder;
///
/// let data = "id,review,class\n1,Loved it,1\n2,Broke after a week,0\n";
/// let reader = CsvReviewReaderBuilder::new().from_reader(data.as_bytes()).unwrap();
///
/// let row = reader.read().unwrap().unwrap();
/// assert_eq!(row.row, 1);
/// assert_eq!(row.review.as_deref(), Some("Loved it"));
/// assert_eq!(row.class.as_deref(), Some("1"));
/// ```
pub struct CsvReviewReader<R> {
    records: RefCell<ByteRecordsIntoIter<R>>,
    review_index: usize,
    class_index: usize,
    position: Cell<usize>,
}

impl<R: Read> CsvReviewReader<R> {
    fn field(record: &ByteRecord, index: usize) -> Option<String> {
        record
            .get(index)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl<R: Read> ItemReader<ReviewRow> for CsvReviewReader<R> {
    fn read(&self) -> ItemReaderResult<ReviewRow> {
        let Some(result) = self.records.borrow_mut().next() else {
            return Ok(None);
        };

        let row = self.position.get() + 1;
        self.position.set(row);

        match result {
            Ok(record) => Ok(Some(ReviewRow {
                row,
                review: Self::field(&record, self.review_index),
                class: Self::field(&record, self.class_index),
            })),
            Err(error) => Err(SeedError::ItemReader(format!("row #{row}: {error}"))),
        }
    }
}

/// A builder for [`CsvReviewReader`].
///
/// Default configuration: comma delimiter, header row required.
pub struct CsvReviewReaderBuilder {
    delimiter: u8,
}

impl Default for CsvReviewReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvReviewReaderBuilder {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Creates a reader over any CSV source and validates its header.
    ///
    /// # Errors
    /// [`SeedError::MissingColumns`] when `review` or `class` is not in the
    /// header, [`SeedError::ItemReader`] when the header cannot be read.
    pub fn from_reader<R: Read>(self, rdr: R) -> Result<CsvReviewReader<R>, SeedError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true) // short rows leave the missing fields absent
            .from_reader(rdr);

        let headers: Vec<String> = rdr
            .byte_headers()
            .map_err(|error| SeedError::ItemReader(error.to_string()))?
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let name = String::from_utf8_lossy(name);
                match index {
                    0 => name.strip_prefix(UTF8_BOM).unwrap_or(&name).to_string(),
                    _ => name.into_owned(),
                }
            })
            .collect();

        let column = |name: &str| headers.iter().position(|header| header == name);
        let (Some(review_index), Some(class_index)) = (column(REVIEW_COLUMN), column(CLASS_COLUMN))
        else {
            return Err(SeedError::MissingColumns { found: headers });
        };

        Ok(CsvReviewReader {
            records: RefCell::new(rdr.into_byte_records()),
            review_index,
            class_index,
            position: Cell::new(0),
        })
    }

    /// Opens the CSV file at `path` and validates its header.
    ///
    /// # Errors
    /// [`SeedError::FileOpen`] when the file cannot be opened, plus the
    /// errors of [`CsvReviewReaderBuilder::from_reader`].
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<CsvReviewReader<File>, SeedError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SeedError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        self.from_reader(file)
    }
}
