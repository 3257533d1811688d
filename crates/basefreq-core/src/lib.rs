//! Core library for basefreq.
//!
//! Takes a word-frequency list (one `word<TAB>frequency` pair per line) and
//! reduces it to 5-letter base words. A 5-letter word that is just a 4-letter
//! word plus `s` ("fours") is dropped; frequency mass from longer plural
//! spellings ("chairs", "patches") is folded back into the base word's total.
//!
//! # Pipeline
//!
//! - [`record`] - Line parsing and validation
//! - [`buckets`] - Single-pass classification by length and suffix
//! - [`aggregate`] - Exclusion, frequency folding, and ranking
//! - [`error`] - Error types and result alias
//!
//! # Quick Start
//!
//! ```
//! use basefreq_core::{WordBuckets, aggregate};
//!
//! let input = "chair\t10\nchairs\t5\n";
//! let buckets = WordBuckets::from_reader(input.as_bytes()).unwrap();
//! let words = aggregate::rank(&buckets);
//! assert_eq!(words[0].word, "chair");
//! assert_eq!(words[0].frequency, 15.0);
//! ```
//!
//! # Known gap
//!
//! The ingestion pass has no branch for 8-letter words ending in `ies`, so
//! the `y` -> `ies` fold in [`aggregate`] always contributes zero. See the
//! notes on [`WordBuckets`].
#![deny(unsafe_code)]

pub mod aggregate;
pub mod buckets;
pub mod error;
pub mod record;

pub use aggregate::BaseWord;
pub use buckets::WordBuckets;
pub use error::{FilterError, FilterResult};
pub use record::Record;
