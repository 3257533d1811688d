//! Error types for basefreq-core.

use thiserror::Error;

/// Errors that can occur while ingesting a frequency list.
///
/// Line numbers are 0-based, matching the position in the input stream.
#[derive(Error, Debug)]
pub enum FilterError {
    /// A line did not split into exactly two tab-separated fields.
    #[error("malformed line {line}: expected `word<TAB>frequency`, got {content:?}")]
    MalformedLine {
        /// 0-based index of the offending line.
        line: usize,
        /// The offending line, after trimming.
        content: String,
    },

    /// The frequency field could not be parsed as a number.
    #[error("invalid frequency on line {line}: {content:?}")]
    InvalidFrequency {
        /// 0-based index of the offending line.
        line: usize,
        /// The offending line, after trimming.
        content: String,
    },

    /// The underlying reader failed.
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`FilterError`].
pub type FilterResult<T> = Result<T, FilterError>;
