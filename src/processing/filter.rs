//! Language filtering for book collections.

use crate::types::Book;

/// Language codes counted as English.
pub const KNOWN_LANGUAGE_CODES: [&str; 3] = ["eng", "en-US", "en-GB"];

/// Returns the books whose language is one of [`KNOWN_LANGUAGE_CODES`], in input order.
///
/// Matching is exact: `EN-us` or `en` do not match.
pub fn filter_to_known_languages(books: &[Book]) -> Vec<Book> {
    filter_to_languages(books, &KNOWN_LANGUAGE_CODES)
}

/// Returns the books whose language exactly matches one of `codes`, in input order.
pub fn filter_to_languages(books: &[Book], codes: &[&str]) -> Vec<Book> {
    books
        .iter()
        .filter(|b| codes.iter().any(|code| *code == b.language()))
        .cloned()
        .collect()
}
