// Dataset reading — delimited files of news articles.
//
// Each record is one article; the first record is a header and is skipped.
// Only the headline field is extracted, everything else is ignored.

pub mod reader;

pub use reader::{headlines_from_reader, read_headlines};

/// Headline field position in the standard news dataset layout.
pub const HEADLINE_INDEX: usize = 4;

/// How to locate headlines inside a delimited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetOptions {
    /// Zero-based field index of the headline
    pub headline_column: usize,
    /// Field delimiter byte
    pub delimiter: u8,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self {
            headline_column: HEADLINE_INDEX,
            delimiter: b',',
        }
    }
}
