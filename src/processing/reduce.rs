//! Extremal searches over books and author indexes.
//!
//! Every search keeps the first candidate with the largest key: a later candidate only takes the
//! lead with a strictly greater key. Author indexes iterate in lexicographic key order, so author
//! ties go to the name that sorts first. NaN keys never lead.

use crate::error::{BookStatsError, BookStatsResult};
use crate::types::{AuthorAverageRating, AuthorBookCount, AuthorIndex, Book};

/// Minimum `rating_count` (or, for the ratio search, `text_reviews_count`) a book needs to be
/// considered by the rating searches.
pub const MIN_COUNT_THRESHOLD: i64 = 25;

/// The author with the most books in `index`.
///
/// Returns `None` for an empty index.
pub fn author_with_most_books(index: &AuthorIndex) -> Option<AuthorBookCount> {
    first_max(index.iter().map(|(author, books)| (author, books.len()))).map(
        |(author, books)| AuthorBookCount {
            author: author.clone(),
            books,
        },
    )
}

/// The author whose books have the highest mean `average_rating`.
///
/// Returns `Ok(None)` for an empty index, and [`BookStatsError::EmptyAuthorEntry`] if an author
/// maps to no books (an index built by [`super::index_by_author`] never does).
pub fn author_with_highest_average_rating(
    index: &AuthorIndex,
) -> BookStatsResult<Option<AuthorAverageRating>> {
    let means = index
        .iter()
        .map(|(author, books)| mean_rating(author, books).map(|avg| (author, avg)))
        .collect::<BookStatsResult<Vec<_>>>()?;

    Ok(first_max(means).map(|(author, average)| AuthorAverageRating {
        author: author.clone(),
        average,
    }))
}

/// The book with the highest `average_rating` among books with at least
/// [`MIN_COUNT_THRESHOLD`] ratings.
///
/// Returns `None` if no book qualifies.
pub fn highest_rated_book(books: &[Book]) -> Option<&Book> {
    first_max(
        books
            .iter()
            .filter(|b| b.rating_count() >= MIN_COUNT_THRESHOLD)
            .map(|b| (b, b.average_rating())),
    )
    .map(|(book, _)| book)
}

/// The book with the highest [`Book::ratings_reviews_ratio`].
///
/// A book qualifies when it has at least [`MIN_COUNT_THRESHOLD`] ratings or text reviews, and
/// any text reviews at all. Returns `None` if no book qualifies.
pub fn highest_ratio_book(books: &[Book]) -> Option<&Book> {
    first_max(
        books
            .iter()
            .filter(|b| {
                (b.rating_count() >= MIN_COUNT_THRESHOLD
                    || b.text_reviews_count() >= MIN_COUNT_THRESHOLD)
                    && b.text_reviews_count() != 0
            })
            .map(|b| (b, b.ratings_reviews_ratio())),
    )
    .map(|(book, _)| book)
}

fn mean_rating(author: &str, books: &[Book]) -> BookStatsResult<f64> {
    if books.is_empty() {
        return Err(BookStatsError::EmptyAuthorEntry {
            author: author.to_owned(),
        });
    }
    let sum: f64 = books.iter().map(Book::average_rating).sum();
    Ok(sum / books.len() as f64)
}

fn first_max<T, K, I>(candidates: I) -> Option<(T, K)>
where
    K: PartialOrd,
    I: IntoIterator<Item = (T, K)>,
{
    let mut best: Option<(T, K)> = None;
    for (item, key) in candidates {
        // A NaN key never takes the lead and never blocks a later candidate.
        if key.partial_cmp(&key).is_none() {
            continue;
        }
        let leads = match &best {
            Some((_, top)) => key > *top,
            None => true,
        };
        if leads {
            best = Some((item, key));
        }
    }
    best
}
