//! The loaded book collection and its statistics.

use std::io::Read;
use std::path::Path;

use crate::error::BookStatsResult;
use crate::ingestion::{load_books, load_books_from_path, LoadOptions};
use crate::processing;
use crate::types::{AuthorAverageRating, AuthorBookCount, AuthorIndex, Book};

/// Owns a loaded book collection (in file order) and answers aggregation queries over it.
///
/// Each query has a free-function counterpart in [`crate::processing`] that takes any subset;
/// the methods here run it over the whole collection.
///
/// ```no_run
/// use book_stats::BookStats;
/// use book_stats::ingestion::LoadOptions;
///
/// # fn main() -> Result<(), book_stats::BookStatsError> {
/// let stats = BookStats::load("books.csv", &LoadOptions::default())?;
/// if let Some(book) = stats.highest_rated_book() {
///     println!("{} ({:.2})", book.title(), book.average_rating());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookStats {
    books: Vec<Book>,
}

impl BookStats {
    /// Wrap an already-built collection.
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Load the collection from a file. See [`load_books_from_path`].
    pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> BookStatsResult<Self> {
        load_books_from_path(path, options).map(Self::new)
    }

    /// Load the collection from a byte stream. See [`load_books`].
    pub fn load_from_reader<R: Read>(input: R, options: &LoadOptions) -> BookStatsResult<Self> {
        load_books(input, options).map(Self::new)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn filter_to_known_languages(&self) -> Vec<Book> {
        processing::filter_to_known_languages(&self.books)
    }

    pub fn index_by_author(&self) -> AuthorIndex {
        processing::index_by_author(&self.books)
    }

    /// Author with the most books across the whole collection.
    pub fn author_with_most_books(&self) -> Option<AuthorBookCount> {
        processing::author_with_most_books(&self.index_by_author())
    }

    /// Author with the most books among English-language books only.
    pub fn author_with_most_known_language_books(&self) -> Option<AuthorBookCount> {
        let english = self.filter_to_known_languages();
        processing::author_with_most_books(&processing::index_by_author(&english))
    }

    /// Author with the highest mean rating across the whole collection.
    pub fn author_with_highest_average_rating(
        &self,
    ) -> BookStatsResult<Option<AuthorAverageRating>> {
        processing::author_with_highest_average_rating(&self.index_by_author())
    }

    pub fn highest_rated_book(&self) -> Option<&Book> {
        processing::highest_rated_book(&self.books)
    }

    pub fn highest_ratio_book(&self) -> Option<&Book> {
        processing::highest_ratio_book(&self.books)
    }
}
