//! Summary report over a [`BookStats`] collection.
//!
//! [`StatsReport::from_stats`] runs every query once; the result renders as fixed-format text
//! lines or as JSON. Absent results render no text line and `null` in JSON.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::error::BookStatsResult;
use crate::stats::BookStats;
use crate::types::{AuthorAverageRating, AuthorBookCount, Book};

/// A single book picked by a rating search, with the value it won on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookHighlight {
    pub title: String,
    pub authors: String,
    pub value: f64,
}

impl BookHighlight {
    fn new(book: &Book, value: f64) -> Self {
        Self {
            title: book.title().to_owned(),
            authors: book.authors().to_owned(),
            value,
        }
    }
}

/// Every statistic the `book-stats` binary prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub books_loaded: usize,
    pub english_books: usize,
    /// Computed over English-language books only.
    pub most_english_books: Option<AuthorBookCount>,
    /// Value is the book's average rating.
    pub highest_rated: Option<BookHighlight>,
    /// Value is the ratings to text reviews ratio.
    pub highest_ratio: Option<BookHighlight>,
    /// Computed over all books.
    pub highest_average_rating: Option<AuthorAverageRating>,
}

impl StatsReport {
    pub fn from_stats(stats: &BookStats) -> BookStatsResult<Self> {
        Ok(Self {
            books_loaded: stats.len(),
            english_books: stats.filter_to_known_languages().len(),
            most_english_books: stats.author_with_most_known_language_books(),
            highest_rated: stats
                .highest_rated_book()
                .map(|b| BookHighlight::new(b, b.average_rating())),
            highest_ratio: stats
                .highest_ratio_book()
                .map(|b| BookHighlight::new(b, b.ratings_reviews_ratio())),
            highest_average_rating: stats.author_with_highest_average_rating()?,
        })
    }

    /// Write the report as text, one statistic per line.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> BookStatsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Loaded {} books", self.books_loaded)?;
        writeln!(f, "{} Books in English", self.english_books)?;
        if let Some(most) = &self.most_english_books {
            writeln!(
                f,
                "Author with the most english books: {}. {} books.",
                most.author, most.books
            )?;
        }
        if let Some(rated) = &self.highest_rated {
            writeln!(
                f,
                "Author with the highest rating: {}. {:.2} stars.",
                rated.authors, rated.value
            )?;
        }
        if let Some(ratio) = &self.highest_ratio {
            writeln!(
                f,
                "Author with the highest ratio of star reviews to text reviews: {}. {:.2}",
                ratio.authors, ratio.value
            )?;
        }
        if let Some(avg) = &self.highest_average_rating {
            writeln!(
                f,
                "Author with the highest average rating of all their books: {}. {:.2}",
                avg.author, avg.average
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::StatsReport;
    use crate::stats::BookStats;

    #[test]
    fn empty_collection_prints_counts_only() {
        let report = StatsReport::from_stats(&BookStats::default()).unwrap();
        assert_eq!(report.to_text(), "Loaded 0 books\n0 Books in English\n");
    }

    #[test]
    fn write_text_reports_writer_errors() {
        struct Broken;
        impl std::io::Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let report = StatsReport::from_stats(&BookStats::default()).unwrap();
        assert!(report.write_text(&mut Broken).is_err());
        assert_eq!(format!("{report}"), report.to_text());
    }

    #[test]
    fn json_uses_null_for_absent_results() {
        let report = StatsReport::from_stats(&BookStats::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["books_loaded"], 0);
        assert!(value["highest_rated"].is_null());
        assert!(value["most_english_books"].is_null());
    }
}
