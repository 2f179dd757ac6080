//! `book-stats` loads a delimited book dataset into memory and computes a few descriptive
//! statistics over it: how many books are in English, which author wrote the most of them, and
//! which books and authors rate highest.
//!
//! The primary entrypoint is [`BookStats::load`], which reads a file through
//! [`ingestion::load_books_from_path`] and keeps the decoded [`types::Book`]s in file order.
//!
//! ## Input format
//!
//! Line 1 is a comma-separated header; every following line is one record. Lines are split on
//! every `,` (there is no quoting). The decoder needs these columns:
//!
//! `bookID, title, authors, average_rating, isbn, isbn13, language_code, # num_pages,
//! ratings_count, text_reviews_count`
//!
//! - A line with a different number of fields than the header is skipped silently.
//! - A record whose numeric field does not parse is skipped and reported once to the
//!   [`ingestion::LoadObserver`] (stderr by default).
//! - A file that cannot be opened fails the load with [`BookStatsError::Io`].
//!
//! ## Quick example
//!
//! ```rust
//! use book_stats::BookStats;
//! use book_stats::ingestion::LoadOptions;
//!
//! # fn main() -> Result<(), book_stats::BookStatsError> {
//! let input = "\
//! bookID,title,authors,average_rating,isbn,isbn13,language_code,# num_pages,ratings_count,text_reviews_count
//! 14428,The Inheritors,William Golding,3.53,0156443791,9780156443791,en-US,240,2681,257
//! 2386,Moby Dick,Herman Melville-William Hootkins,3.49,9626343583,9789626343586,eng,25,66,17
//! ";
//! let stats = BookStats::load_from_reader(input.as_bytes(), &LoadOptions::silent())?;
//! assert_eq!(stats.len(), 2);
//!
//! let best = stats.highest_rated_book().unwrap();
//! assert_eq!(best.title(), "The Inheritors");
//!
//! let index = stats.index_by_author();
//! assert_eq!(index["William Hootkins"].len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: header/line parsing, record decoding and load entrypoints
//! - [`types`]: the book record and derived result types
//! - [`processing`]: pure filter/group/search functions over book slices
//! - [`stats`]: the loaded collection and its whole-collection queries
//! - [`report`]: the printed summary
//! - [`error`]: error type used across the crate

pub mod error;
pub mod ingestion;
pub mod processing;
pub mod report;
pub mod stats;
pub mod types;

pub use error::{BookStatsError, BookStatsResult};
pub use stats::BookStats;
