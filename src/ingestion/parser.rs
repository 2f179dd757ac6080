//! Delimited record parser.
//!
//! Pure text splitting on `,`: no quoting, no escaping, no type awareness. Trailing empty fields
//! are dropped, so `1,a,` has two fields and `,,` has none. A parser instance holds the column
//! list read from a header line; build one per dataset.

use crate::types::FieldMap;

/// Field delimiter for both the header and data lines.
pub const FIELD_DELIMITER: char = ',';

/// Splits header and data lines into [`FieldMap`]s keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordParser {
    columns: Vec<String>,
}

impl RecordParser {
    /// Create a parser with no columns. Call [`Self::read_header`] before parsing data lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from an already-split header.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Replace the column list with the fields of `line`.
    pub fn read_header(&mut self, line: &str) {
        self.columns = split_fields(line).into_iter().map(str::to_owned).collect();
    }

    /// Column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Parse one data line.
    ///
    /// - `None` input (end of input) returns `None`.
    /// - A line whose field count differs from the header's column count returns an empty map.
    pub fn parse_line(&self, line: Option<&str>) -> Option<FieldMap> {
        line.map(|l| self.parse_fields(l.split(FIELD_DELIMITER)))
    }

    /// Pair already-split `fields` with the column list.
    ///
    /// Trailing empty fields are dropped first; returns an empty map unless there is then exactly
    /// one field per column.
    pub fn parse_fields<'a, I>(&self, fields: I) -> FieldMap
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut values: Vec<&str> = fields.into_iter().collect();
        drop_trailing_empty(&mut values);
        if values.len() != self.columns.len() {
            return FieldMap::new();
        }

        self.columns
            .iter()
            .cloned()
            .zip(values.into_iter().map(str::to_owned))
            .collect()
    }
}

fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    drop_trailing_empty(&mut fields);
    fields
}

/// A line with no delimiter at all stays a single (possibly empty) field.
fn drop_trailing_empty(fields: &mut Vec<&str>) {
    if fields.len() > 1 {
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }
    }
}
