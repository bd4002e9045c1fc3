//! Row normalization ahead of per-field coercion.
//!
//! Normalization runs in a fixed order:
//!
//! 1. blank strings become absent
//! 2. each field is looked up under its canonical name and its alias
//! 3. the schema's cross-field rules rewrite the resolved values
//!
//! The output is one [`RawValue`] per schema field, in declaration order.

use std::borrow::Cow;

use log::trace;

use crate::config::KeyPolicy;
use crate::error::FieldError;
use crate::schema::adapt::date_utils::timestamp_year;
use crate::schema::adapt::types::DateFormatConfig;
use crate::schema::field_def::{FieldDescriptor, FieldValue, RecordSchema};
use crate::schema::row::{RawValue, Row};

/// A cross-field rewrite applied after key resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeRule {
    /// A timestamp in the field is replaced by its year
    YearOf(&'static str),
    /// The field is kept as text unless `discriminator` holds `token`
    TextUnless {
        field: &'static str,
        discriminator: &'static str,
        token: &'static str,
    },
    /// An absent field is taken from the first present key of `keys`
    FallbackKeys {
        field: &'static str,
        keys: &'static [&'static str],
    },
}

impl NormalizeRule {
    /// Keys this rule reads besides the schema's own field keys
    #[must_use]
    pub fn extra_keys(&self) -> &'static [&'static str] {
        match self {
            Self::FallbackKeys { keys, .. } => keys,
            _ => &[],
        }
    }

    /// Apply the rule to resolved values
    pub fn apply(
        &self,
        schema: &RecordSchema,
        row: &Row,
        values: &mut [RawValue],
        config: &DateFormatConfig,
    ) {
        match *self {
            Self::YearOf(field) => {
                if let Some(slot) = schema.position(field).and_then(|i| values.get_mut(i)) {
                    if let Some(year) = year_of(slot, config) {
                        *slot = RawValue::Value(FieldValue::Integer(year));
                    }
                }
            }
            Self::TextUnless {
                field,
                discriminator,
                token,
            } => {
                let matches_token = schema
                    .position(discriminator)
                    .and_then(|i| values.get(i))
                    .and_then(RawValue::as_str)
                    .is_some_and(|value| value.trim() == token);
                if let Some(slot) = schema.position(field).and_then(|i| values.get_mut(i)) {
                    *slot = if matches_token {
                        unpin_text(slot)
                    } else {
                        pin_text(slot)
                    };
                }
            }
            Self::FallbackKeys { field, keys } => {
                if let Some(slot) = schema.position(field).and_then(|i| values.get_mut(i)) {
                    if !slot.is_absent() {
                        return;
                    }
                    if let Some(value) = keys
                        .iter()
                        .filter_map(|key| row.get(key))
                        .find(|value| !value.is_absent())
                    {
                        *slot = value.clone();
                    }
                }
            }
        }
    }
}

/// Key-resolved values of one row, plus any conflicts found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    /// One value per schema field, in declaration order
    pub values: Vec<RawValue>,
    /// Fields supplied under both spellings with different values
    pub errors: Vec<FieldError>,
}

/// Replace every empty string with an absent marker
#[must_use]
pub fn blank_to_absent(row: &Row) -> Row {
    row.iter()
        .map(|(key, value)| {
            let value = if value.is_blank() {
                RawValue::Absent
            } else {
                value.clone()
            };
            (key, value)
        })
        .collect()
}

/// Find a field's value under its canonical name or alias
pub fn resolve_key(
    field: &FieldDescriptor,
    row: &Row,
    policy: KeyPolicy,
) -> Result<RawValue, FieldError> {
    let canonical = row.get(field.name).filter(|value| !is_vacant(value));
    let aliased = field
        .alias
        .and_then(|alias| row.get(alias))
        .filter(|value| !is_vacant(value));

    match (canonical, aliased) {
        (Some(canonical), Some(aliased)) if !agree(canonical, aliased) => match policy {
            KeyPolicy::PreferAlias => Ok(aliased.clone()),
            KeyPolicy::PreferCanonical => Ok(canonical.clone()),
            KeyPolicy::RejectConflicts => Err(FieldError::ConflictingKeys {
                field: field.name,
                alias: field.alias.unwrap_or(field.name),
            }),
        },
        (Some(value), _) | (None, Some(value)) => Ok(value.clone()),
        (None, None) => Ok(RawValue::Absent),
    }
}

/// Run the normalization pass for one row
#[must_use]
pub fn normalize_row(
    schema: &RecordSchema,
    row: &Row,
    policy: KeyPolicy,
    config: &DateFormatConfig,
) -> NormalizedRow {
    let row = blank_to_absent(row);
    let mut errors = Vec::new();

    let mut values: Vec<RawValue> = schema
        .fields
        .iter()
        .map(|field| {
            resolve_key(field, &row, policy).unwrap_or_else(|error| {
                errors.push(error);
                RawValue::Absent
            })
        })
        .collect();

    for key in row.keys() {
        if !schema.recognizes_key(key) {
            trace!("{}: ignoring unknown key `{key}`", schema.name);
        }
    }

    for rule in schema.rules {
        rule.apply(schema, &row, &mut values, config);
    }

    NormalizedRow { values, errors }
}

fn year_of(raw: &RawValue, config: &DateFormatConfig) -> Option<i64> {
    use chrono::Datelike;

    match raw {
        RawValue::Text(text) => timestamp_year(text.trim(), config),
        RawValue::Value(FieldValue::Timestamp(timestamp)) => Some(i64::from(timestamp.year())),
        RawValue::Value(FieldValue::Date(date)) => Some(i64::from(date.year())),
        _ => None,
    }
}

/// Absent, or text that is empty after trimming
fn is_vacant(raw: &RawValue) -> bool {
    raw.is_absent() || raw.as_str().is_some_and(|text| text.trim().is_empty())
}

/// Whether two spellings carry the same value once trimmed and rendered as text
fn agree(left: &RawValue, right: &RawValue) -> bool {
    fn canonical(raw: &RawValue) -> Option<Cow<'_, str>> {
        match raw {
            RawValue::Absent => None,
            RawValue::Text(text) => Some(Cow::Borrowed(text.trim())),
            RawValue::Value(FieldValue::Text(text)) => Some(Cow::Borrowed(text.trim())),
            RawValue::Value(value) => Some(Cow::Owned(value.to_string())),
        }
    }
    left == right || canonical(left) == canonical(right)
}

fn unpin_text(raw: &RawValue) -> RawValue {
    match raw {
        RawValue::Value(FieldValue::Text(text)) => RawValue::Text(text.clone()),
        other => other.clone(),
    }
}

fn pin_text(raw: &RawValue) -> RawValue {
    match raw {
        RawValue::Text(text) => RawValue::Value(FieldValue::Text(text.clone())),
        RawValue::Value(value @ (FieldValue::Decimal(_) | FieldValue::Integer(_))) => {
            RawValue::Value(FieldValue::Text(value.to_string()))
        }
        other => other.clone(),
    }
}
