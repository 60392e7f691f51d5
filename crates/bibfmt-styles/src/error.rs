//! Error types for citation formatting.

use bibfmt_records::{RecordKind, ValidationError};
use thiserror::Error;

use crate::styles::Style;

/// Result type alias for bibfmt-styles operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during citation formatting.
///
/// All variants are fatal to the run being processed and propagate to the
/// caller; nothing is logged-and-swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A record failed its numeric validity checks.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No render function registered for this (style, record type) pairing.
    #[error("no {style} formatter registered for {kind} records")]
    UnsupportedType { style: Style, kind: RecordKind },

    /// A template placeholder had no bound value.
    ///
    /// Unreachable for the built-in templates; kept as a defensive check so a
    /// missing binding can never silently render as empty text.
    #[error("template placeholder '${placeholder}' has no bound value")]
    MissingField { placeholder: String },

    /// A render function received a record of the wrong variant.
    #[error("formatter for {expected} records invoked on a {found} record")]
    MismatchedRecord {
        expected: RecordKind,
        found: RecordKind,
    },
}
