//! Delimited-text load loop.

use std::io::Read;

use crate::error::BookStatsResult;
use crate::types::Book;

use super::decode::decode_book;
use super::observability::{LoadContext, LoadObserver, LoadStats};
use super::parser::{RecordParser, FIELD_DELIMITER};

/// Reader settings that split every line on `,` with no quote handling.
///
/// Records may have any number of fields; the parser decides what a field-count mismatch means.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .delimiter(FIELD_DELIMITER as u8)
        .quoting(false)
        .flexible(true);
    builder
}

/// Load books from an existing reader built with [`reader_builder`].
///
/// Rules:
///
/// - The first line is the header; a fresh [`RecordParser`] reads it.
/// - Every later line goes through [`RecordParser::parse_line`]; lines whose field count differs
///   from the header are skipped silently.
/// - Records that fail decoding are skipped and reported to `observer`.
/// - Bytes that are not valid UTF-8 are replaced with U+FFFD; only I/O errors abort the load.
pub fn load_books_from_reader<R: Read>(
    rdr: &mut csv::Reader<R>,
    ctx: &LoadContext,
    observer: Option<&dyn LoadObserver>,
) -> BookStatsResult<(Vec<Book>, LoadStats)> {
    let mut parser = RecordParser::new();
    parser.read_header(&join_lossy(rdr.byte_headers()?));

    let mut books = Vec::new();
    let mut stats = LoadStats::default();
    let mut records = rdr.byte_records();
    let mut line_no = 1;
    loop {
        let record = records.next().transpose()?;
        // Header is line 1; prefer the reader's own position since blank lines are skipped.
        line_no = record
            .as_ref()
            .and_then(|r| r.position())
            .map_or(line_no + 1, |p| p.line() as usize);

        let line = record.as_ref().map(join_lossy);
        let Some(fields) = parser.parse_line(line.as_deref()) else {
            break;
        };
        if fields.is_empty() {
            stats.malformed += 1;
            continue;
        }

        match decode_book(&fields, line_no) {
            Ok(book) => books.push(book),
            Err(e) => {
                stats.skipped += 1;
                if let Some(obs) = observer {
                    obs.on_record_skipped(ctx, &e);
                }
            }
        }
    }

    stats.loaded = books.len();
    Ok((books, stats))
}

/// Rebuild the raw text line. Quoting is off, so splitting it again yields the same fields.
fn join_lossy(record: &csv::ByteRecord) -> String {
    record
        .iter()
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join(",")
}
