use thiserror::Error;

/// Convenience result type for loading and aggregation operations.
pub type BookStatsResult<T> = Result<T, BookStatsError>;

/// Error type returned across the crate.
///
/// `Io` and `Csv` are fatal and abort a load. `MissingField` and `ParseError` describe a single
/// record that was dropped; a load never returns them, it reports them to the configured
/// [`crate::ingestion::LoadObserver`] and moves on to the next line.
#[derive(Debug, Error)]
pub enum BookStatsError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited reader failed while reading its input.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Report serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A column the decoder needs is not present in the record.
    #[error("missing field at line {line}: column '{column}'")]
    MissingField { line: usize, column: String },

    /// A value could not be coerced into the numeric type its column requires.
    #[error("failed to parse value at line {line} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        line: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// A mean rating was requested for an author with no books.
    #[error("cannot average ratings for author '{author}': no books")]
    EmptyAuthorEntry { author: String },
}

impl BookStatsError {
    /// Whether this error only invalidates one record rather than the whole load.
    pub fn is_record_level(&self) -> bool {
        matches!(
            self,
            BookStatsError::MissingField { .. } | BookStatsError::ParseError { .. }
        )
    }
}
