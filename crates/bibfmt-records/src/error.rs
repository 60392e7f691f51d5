//! Error types for record validation.

use crate::record::RecordKind;
use thiserror::Error;

/// Result type alias for bibfmt-records operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors raised when a record fails its validity checks.
///
/// Missing or wrong-kind fields never reach validation: they are rejected by
/// serde at the deserialization boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A numeric required field was zero or negative.
    #[error("{kind} record: field '{field}' must be positive, got {value}")]
    NonPositive {
        kind: RecordKind,
        field: &'static str,
        value: i32,
    },
}
