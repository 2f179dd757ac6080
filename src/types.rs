//! Core data model types.
//!
//! Loading turns each input line into a [`FieldMap`] and then into an immutable [`Book`]. The
//! aggregation functions in [`crate::processing`] work on slices of books and produce the
//! derived values defined here.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

/// Column holding [`Book::id`].
pub const COL_BOOK_ID: &str = "bookID";
/// Column holding [`Book::title`].
pub const COL_TITLE: &str = "title";
/// Column holding [`Book::authors`].
pub const COL_AUTHORS: &str = "authors";
/// Column holding [`Book::average_rating`].
pub const COL_AVERAGE_RATING: &str = "average_rating";
/// Column holding [`Book::isbn`].
pub const COL_ISBN: &str = "isbn";
/// Column holding [`Book::isbn13`].
pub const COL_ISBN13: &str = "isbn13";
/// Column holding [`Book::language`].
pub const COL_LANGUAGE_CODE: &str = "language_code";
/// Column holding [`Book::num_pages`]. The leading `# ` is part of the dataset's header.
pub const COL_NUM_PAGES: &str = "# num_pages";
/// Column holding [`Book::rating_count`].
pub const COL_RATINGS_COUNT: &str = "ratings_count";
/// Column holding [`Book::text_reviews_count`].
pub const COL_TEXT_REVIEWS_COUNT: &str = "text_reviews_count";

/// Column name to raw text value for one parsed line.
///
/// An empty map means the line did not have as many fields as the header has columns.
pub type FieldMap = HashMap<String, String>;

/// Books grouped by individual author name.
///
/// Keys iterate in lexicographic order, which makes "first encountered" tie-breaks in the
/// author searches reproducible.
pub type AuthorIndex = BTreeMap<String, Vec<Book>>;

/// Named field values used to construct a [`Book`].
///
/// Use struct update syntax with [`Default`] to set only the fields you care about:
///
/// ```rust
/// use book_stats::types::{Book, BookFields};
///
/// let book = Book::new(BookFields {
///     title: "Rendezvous with Rama".to_string(),
///     rating_count: 99,
///     ..Default::default()
/// });
/// assert_eq!(book.title(), "Rendezvous with Rama");
/// assert_eq!(book.num_pages(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFields {
    pub id: i64,
    pub title: String,
    pub authors: String,
    pub average_rating: f64,
    pub isbn: String,
    pub isbn13: String,
    pub language: String,
    pub num_pages: i64,
    pub rating_count: i64,
    pub text_reviews_count: i64,
}

/// One decoded book record. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    id: i64,
    title: String,
    authors: String,
    average_rating: f64,
    isbn: String,
    isbn13: String,
    language: String,
    num_pages: i64,
    rating_count: i64,
    text_reviews_count: i64,
}

impl Book {
    /// Create a book from its field values.
    pub fn new(fields: BookFields) -> Self {
        let BookFields {
            id,
            title,
            authors,
            average_rating,
            isbn,
            isbn13,
            language,
            num_pages,
            rating_count,
            text_reviews_count,
        } = fields;

        Self {
            id,
            title,
            authors,
            average_rating,
            isbn,
            isbn13,
            language,
            num_pages,
            rating_count,
            text_reviews_count,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Raw authors field; multiple names are joined with `-`.
    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn average_rating(&self) -> f64 {
        self.average_rating
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn isbn13(&self) -> &str {
        &self.isbn13
    }

    /// Language code as it appears in the dataset (e.g. `eng`, `en-US`).
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn num_pages(&self) -> i64 {
        self.num_pages
    }

    pub fn rating_count(&self) -> i64 {
        self.rating_count
    }

    pub fn text_reviews_count(&self) -> i64 {
        self.text_reviews_count
    }

    /// `rating_count / text_reviews_count`.
    ///
    /// Not finite when `text_reviews_count` is zero (infinity, or NaN if both counts are zero).
    pub fn ratings_reviews_ratio(&self) -> f64 {
        self.rating_count as f64 / self.text_reviews_count as f64
    }
}

/// Result of [`crate::processing::author_with_most_books`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBookCount {
    pub author: String,
    pub books: usize,
}

/// Result of [`crate::processing::author_with_highest_average_rating`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorAverageRating {
    pub author: String,
    pub average: f64,
}
