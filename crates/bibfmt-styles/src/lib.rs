//! Citation style formatting engine.
//!
//! This crate takes validated source records from `bibfmt-records`, renders
//! each one under a chosen citation style (APA 7th or GOST R 7.0.5-2008),
//! and assembles the rendered strings into a deterministically sorted
//! bibliography.
//!
//! # Architecture
//!
//! ```text
//! Record ──▶ StyleRegistry ──(Style, RecordKind)──▶ render fn ──▶ Entry
//!                                                                  │
//!                                  Bibliography (stable sort) ◀────┘
//! ```
//!
//! Rendering is a pure function of a record's fields and the style's literal
//! template; each [`Entry`] caches its rendered string at construction. The
//! formatting of independent records shares no state, so a caller may map
//! over records in parallel as long as the final sort runs on the full
//! collected result.
//!
//! # Example
//!
//! ```
//! use bibfmt_records::{Book, Record};
//! use bibfmt_styles::{Bibliography, Style, StyleRegistry};
//!
//! let registry = StyleRegistry::default();
//! let records = vec![Record::Book(Book {
//!     authors: "Иванов И.М., Петров С.Н.".to_string(),
//!     title: "Наука как искусство".to_string(),
//!     edition: None,
//!     city: "СПб.".to_string(),
//!     publishing_house: "Просвещение".to_string(),
//!     year: 2020,
//!     pages: 999,
//! })];
//!
//! let entries = registry.entries(Style::Apa, records)?;
//! let bibliography = Bibliography::from_entries(entries);
//! assert_eq!(
//!     bibliography.render(),
//!     "Иванов И.М., Петров С.Н. (2020). Наука как искусство. Просвещение."
//! );
//! # Ok::<(), bibfmt_styles::Error>(())
//! ```

pub mod bibliography;
pub mod entry;
pub mod error;
pub mod registry;
pub mod styles;
pub mod template;

pub use bibliography::Bibliography;
pub use entry::Entry;
pub use error::{Error, Result};
pub use registry::{RenderFn, StyleRegistry};
pub use styles::{Style, UnknownStyle};
pub use template::{Fields, Template};
