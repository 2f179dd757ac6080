//! Loading a delimited book dataset.
//!
//! Most callers should use [`load_books_from_path`] or [`load_books`] (from [`load`]), which:
//!
//! - read the header line and build a [`parser::RecordParser`] for this load only
//! - split each following line on `,` into a [`crate::types::FieldMap`]
//! - decode each non-empty map into a [`crate::types::Book`], dropping records with bad numbers
//! - report dropped records to the [`LoadObserver`] in [`LoadOptions`]
//!
//! The building blocks are also available under:
//! - [`parser`]
//! - [`decode`]
//! - [`csv`]

pub mod csv;
pub mod decode;
pub mod load;
pub mod observability;
pub mod parser;

pub use load::{load_books, load_books_from_path, LoadOptions};
pub use observability::{CompositeObserver, LoadContext, LoadObserver, LoadStats, StdErrObserver};
pub use parser::RecordParser;
