//! Error handling for record parsing.
//!
//! Field-level problems are collected as [`FieldError`]s while a row is being
//! assembled; a rejected row surfaces as a single [`RecordError`] carrying
//! every field that failed.

use itertools::Itertools;
use thiserror::Error;

/// A problem with one field of one row
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required field is absent after normalization
    #[error("`{field}` is required but missing")]
    MissingRequiredField { field: &'static str },

    /// A present value could not be converted to the field's declared type
    #[error("`{field}` expects {expected}, got {value:?}")]
    TypeCoercionFailure {
        field: &'static str,
        expected: String,
        value: String,
    },

    /// A present value is outside the field's closed set of legal tokens
    #[error("`{field}` must be one of [{}], got {value:?}", .allowed.join(", "))]
    EnumerationConstraintViolation {
        field: &'static str,
        value: String,
        allowed: Vec<String>,
    },

    /// Both spellings of a field were supplied with different values
    #[error("`{field}` and `{alias}` were both supplied with different values")]
    ConflictingKeys {
        field: &'static str,
        alias: &'static str,
    },
}

impl FieldError {
    /// Canonical name of the field this error is about
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingRequiredField { field }
            | Self::TypeCoercionFailure { field, .. }
            | Self::EnumerationConstraintViolation { field, .. }
            | Self::ConflictingKeys { field, .. } => *field,
        }
    }
}

/// Errors produced when turning input into a typed record
#[derive(Debug, Error)]
pub enum RecordError {
    /// The row failed validation; carries every field-level failure
    #[error("{record} rejected: {}", .errors.iter().join("; "))]
    RecordAssemblyFailure {
        record: &'static str,
        errors: Vec<FieldError>,
    },

    /// The textual interchange document could not be read
    #[error("invalid {record} document: {message}")]
    Interchange {
        record: &'static str,
        message: String,
    },

    /// No record type is registered under the given name
    #[error("unknown record type: {0}")]
    UnknownRecordType(String),
}

impl RecordError {
    /// Field-level failures behind this error, empty for non-assembly errors
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::RecordAssemblyFailure { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Whether the given field is among the failures
    #[must_use]
    pub fn names_field(&self, field: &str) -> bool {
        self.field_errors().iter().any(|e| e.field() == field)
    }
}

/// Result type for record operations
pub type Result<T> = std::result::Result<T, RecordError>;
