//! In-memory aggregations over book collections.
//!
//! The processing layer operates on `&[Book]` slices produced by ingestion (or built by hand) and
//! never mutates its input. All functions are pure.
//!
//! Currently implemented:
//!
//! - [`filter_to_known_languages()`]: keep English-language books
//! - [`index_by_author()`]: group books by individual author
//! - [`author_with_most_books()`], [`author_with_highest_average_rating()`]: searches over an index
//! - [`highest_rated_book()`], [`highest_ratio_book()`]: searches over books
//!
//! ## Example: filter → group → reduce
//!
//! ```rust
//! use book_stats::processing::{author_with_most_books, filter_to_known_languages, index_by_author};
//! use book_stats::types::{Book, BookFields};
//!
//! let book = |authors: &str, language: &str| {
//!     Book::new(BookFields {
//!         authors: authors.to_string(),
//!         language: language.to_string(),
//!         ..Default::default()
//!     })
//! };
//! let books = vec![
//!     book("Gene Wolfe", "eng"),
//!     book("Gene Wolfe-Neil Gaiman", "en-US"),
//!     book("Stanislaw Lem", "pol"),
//! ];
//!
//! let english = filter_to_known_languages(&books);
//! let index = index_by_author(&english);
//! let top = author_with_most_books(&index).unwrap();
//! assert_eq!(top.author, "Gene Wolfe");
//! assert_eq!(top.books, 2);
//! ```

pub mod filter;
pub mod group;
pub mod reduce;

pub use filter::{filter_to_known_languages, filter_to_languages, KNOWN_LANGUAGE_CODES};
pub use group::{index_by_author, AUTHOR_DELIMITER};
pub use reduce::{
    author_with_highest_average_rating, author_with_most_books, highest_rated_book,
    highest_ratio_book, MIN_COUNT_THRESHOLD,
};
