//! Bibliographic source record types.
//!
//! This crate defines the typed source records a citation run operates on:
//! books, internet resources, article collections, dissertations, and
//! magazine articles. Each record is a plain bundle of named fields with
//! serde support for the tagged JSON wire format, plus numeric validity
//! checks (`year` and page counts must be strictly positive).
//!
//! String fields are stored verbatim — no trimming or escaping. Callers are
//! responsible for clean input.
//!
//! # Example
//!
//! ```
//! use bibfmt_records::Record;
//!
//! let json = r#"{
//!     "type": "book",
//!     "authors": "Иванов И.М., Петров С.Н.",
//!     "title": "Наука как искусство",
//!     "edition": "3-е",
//!     "city": "СПб.",
//!     "publishing-house": "Просвещение",
//!     "year": 2020,
//!     "pages": 999
//! }"#;
//!
//! let record: Record = serde_json::from_str(json).unwrap();
//! record.validate().unwrap();
//! ```

pub mod error;
pub mod record;

pub use error::{Result, ValidationError};
pub use record::{
    ArticlesCollection, Book, Dissertation, InternetResource, MagazineArticle, Record, RecordKind,
};
