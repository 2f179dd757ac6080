//! Load entry points.
//!
//! [`load_books_from_path`] opens a file and [`load_books`] takes any [`Read`]. Both report to the
//! observer in [`LoadOptions`]: skipped records while reading, then `on_success` or `on_failure`.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::error::{BookStatsError, BookStatsResult};
use crate::types::Book;

use super::csv::{load_books_from_reader, reader_builder};
use super::observability::{LoadContext, LoadObserver, LoadStats, StdErrObserver};

/// Options controlling a load.
#[derive(Clone)]
pub struct LoadOptions {
    /// Receives per-record diagnostics and the load outcome. `None` silences diagnostics.
    pub observer: Option<Arc<dyn LoadObserver>>,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for LoadOptions {
    /// Diagnostics go to stderr.
    fn default() -> Self {
        Self {
            observer: Some(Arc::new(StdErrObserver)),
        }
    }
}

impl LoadOptions {
    /// Options with no observer.
    pub fn silent() -> Self {
        Self { observer: None }
    }
}

/// Load books from a file.
///
/// Fails with [`crate::BookStatsError::Io`] if the file cannot be opened. The file is closed
/// before this returns, whether or not records were skipped.
///
/// ```no_run
/// use book_stats::ingestion::{load_books_from_path, LoadOptions};
///
/// # fn main() -> Result<(), book_stats::BookStatsError> {
/// let books = load_books_from_path("books.csv", &LoadOptions::default())?;
/// println!("loaded={}", books.len());
/// # Ok(())
/// # }
/// ```
pub fn load_books_from_path(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> BookStatsResult<Vec<Book>> {
    let path = path.as_ref();
    let ctx = LoadContext::new(path.display().to_string());

    let result = File::open(path)
        .map_err(BookStatsError::from)
        .and_then(|file| load_with_context(file, &ctx, options));
    report(&ctx, options, result)
}

/// Load books from any byte stream.
pub fn load_books<R: Read>(input: R, options: &LoadOptions) -> BookStatsResult<Vec<Book>> {
    let ctx = LoadContext::new("<stream>");
    let result = load_with_context(input, &ctx, options);
    report(&ctx, options, result)
}

fn load_with_context<R: Read>(
    input: R,
    ctx: &LoadContext,
    options: &LoadOptions,
) -> BookStatsResult<(Vec<Book>, LoadStats)> {
    let mut rdr = reader_builder().from_reader(input);
    load_books_from_reader(&mut rdr, ctx, options.observer.as_deref())
}

fn report(
    ctx: &LoadContext,
    options: &LoadOptions,
    result: BookStatsResult<(Vec<Book>, LoadStats)>,
) -> BookStatsResult<Vec<Book>> {
    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok((_, stats)) => obs.on_success(ctx, *stats),
            Err(e) => obs.on_failure(ctx, e),
        }
    }

    result.map(|(books, _)| books)
}
