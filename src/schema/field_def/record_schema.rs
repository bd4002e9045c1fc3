//! Record schema definition
//!
//! A [`RecordSchema`] is the static description of one Synthea table: the
//! ordered list of its fields plus the cross-field rules applied before
//! coercion. Assembly turns a [`Row`] into one coerced value per field, or
//! fails with every field error found.

use log::debug;

use crate::config::ParseConfig;
use crate::error::{FieldError, RecordError, Result};
use crate::schema::adapt::conversions::coerce_field;
use crate::schema::adapt::normalize::{NormalizeRule, normalize_row};
use crate::schema::field_def::{FieldDescriptor, FieldValue};
use crate::schema::row::Row;

/// Static description of a record type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema {
    /// Record type name, e.g. `Patient`
    pub name: &'static str,
    /// Export table name, e.g. `patients`
    pub table: &'static str,
    /// Fields in declaration order
    pub fields: &'static [FieldDescriptor],
    /// Cross-field rules, applied in order after key resolution
    pub rules: &'static [NormalizeRule],
}

impl RecordSchema {
    /// Look up a field by canonical name or alias
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.matches_name(key))
    }

    /// Position of a field by canonical name
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Check if a field with the given name or alias exists
    #[must_use]
    pub fn has_field(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// Whether the key is read by this schema, directly or through a rule
    #[must_use]
    pub fn recognizes_key(&self, key: &str) -> bool {
        self.has_field(key) || self.rules.iter().any(|rule| rule.extra_keys().contains(&key))
    }

    /// Canonical names of all fields
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|field| field.name)
    }

    /// Canonical names of the required fields
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.name)
    }

    /// Normalize and coerce a row into one value per field
    ///
    /// Every field is checked before failing, so the error carries all
    /// field-level problems of the row.
    pub fn assemble(&self, row: &Row, config: &ParseConfig) -> Result<Vec<Option<FieldValue>>> {
        let normalized = normalize_row(self, row, config.key_policy, &config.date_formats);
        let mut errors = normalized.errors;
        let mut values = Vec::with_capacity(self.fields.len());

        for (field, raw) in self.fields.iter().zip(&normalized.values) {
            match coerce_field(field, raw, &config.date_formats) {
                Ok(Some(value)) => values.push(Some(value)),
                Ok(None) => {
                    let already_failed = errors.iter().any(|error| error.field() == field.name);
                    if field.required && !already_failed {
                        errors.push(FieldError::MissingRequiredField { field: field.name });
                    }
                    values.push(None);
                }
                Err(error) => {
                    errors.push(error);
                    values.push(None);
                }
            }
        }

        if errors.is_empty() {
            return Ok(values);
        }

        let error = RecordError::RecordAssemblyFailure {
            record: self.name,
            errors,
        };
        if config.log_rejections {
            debug!("{error}");
        }
        Err(error)
    }
}
