//! Record decoder: [`FieldMap`] to typed [`Book`].

use std::str::FromStr;

use crate::error::{BookStatsError, BookStatsResult};
use crate::types::{
    Book, BookFields, FieldMap, COL_AUTHORS, COL_AVERAGE_RATING, COL_BOOK_ID, COL_ISBN,
    COL_ISBN13, COL_LANGUAGE_CODE, COL_NUM_PAGES, COL_RATINGS_COUNT, COL_TEXT_REVIEWS_COUNT,
    COL_TITLE,
};

/// Decode one non-empty field map into a [`Book`].
///
/// `line` is the 1-based input line the map came from and is only used in error values.
/// Text fields are taken as-is; `bookID`, `# num_pages`, `ratings_count` and
/// `text_reviews_count` must parse as integers and `average_rating` as a float.
pub fn decode_book(fields: &FieldMap, line: usize) -> BookStatsResult<Book> {
    Ok(Book::new(BookFields {
        id: number(fields, line, COL_BOOK_ID)?,
        title: text(fields, line, COL_TITLE)?,
        authors: text(fields, line, COL_AUTHORS)?,
        average_rating: number(fields, line, COL_AVERAGE_RATING)?,
        isbn: text(fields, line, COL_ISBN)?,
        isbn13: text(fields, line, COL_ISBN13)?,
        language: text(fields, line, COL_LANGUAGE_CODE)?,
        num_pages: number(fields, line, COL_NUM_PAGES)?,
        rating_count: number(fields, line, COL_RATINGS_COUNT)?,
        text_reviews_count: number(fields, line, COL_TEXT_REVIEWS_COUNT)?,
    }))
}

fn raw<'a>(fields: &'a FieldMap, line: usize, column: &str) -> BookStatsResult<&'a str> {
    fields
        .get(column)
        .map(String::as_str)
        .ok_or_else(|| BookStatsError::MissingField {
            line,
            column: column.to_owned(),
        })
}

fn text(fields: &FieldMap, line: usize, column: &str) -> BookStatsResult<String> {
    raw(fields, line, column).map(str::to_owned)
}

fn number<T>(fields: &FieldMap, line: usize, column: &str) -> BookStatsResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = raw(fields, line, column)?;
    raw.parse::<T>().map_err(|e| BookStatsError::ParseError {
        line,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message: e.to_string(),
    })
}
