//! The [`Record`] trait shared by all typed Synthea records

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::config::ParseConfig;
use crate::error::{FieldError, RecordError, Result};
use crate::schema::field_def::{FieldValue, RecordSchema};
use crate::schema::row::{RawValue, Row};

/// A typed, validated record of one Synthea table
///
/// Implementations are generated by [`record_schema!`](crate::record_schema);
/// only [`schema`](Record::schema), [`from_fields`](Record::from_fields) and
/// [`to_fields`](Record::to_fields) are type specific.
pub trait Record: Sized + Clone + PartialEq + Debug + Send + Sync {
    /// Static description of the record type
    fn schema() -> &'static RecordSchema;

    /// Build the record from coerced values in field order
    fn from_fields(values: Vec<Option<FieldValue>>) -> std::result::Result<Self, FieldError>;

    /// Field values in field order
    fn to_fields(&self) -> Vec<Option<FieldValue>>;

    /// Validate a row under the given configuration
    fn parse_row(row: &Row, config: &ParseConfig) -> Result<Self> {
        let schema = Self::schema();
        let values = schema.assemble(row, config)?;
        Self::from_fields(values).map_err(|error| RecordError::RecordAssemblyFailure {
            record: schema.name,
            errors: vec![error],
        })
    }

    /// Validate a row read from a CSV export
    ///
    /// Header spellings win over canonical names when both are present.
    fn from_row(row: &Row) -> Result<Self> {
        Self::parse_row(row, &ParseConfig::raw_file())
    }

    /// Validate values supplied in code, keyed by canonical name or alias
    ///
    /// Both spellings with different values is an error.
    fn from_values(row: &Row) -> Result<Self> {
        Self::parse_row(row, &ParseConfig::programmatic())
    }

    /// Canonical names of the required fields
    fn required_fields() -> Vec<&'static str> {
        Self::schema().required_fields().collect()
    }

    /// Canonical field name to value, absent fields as `None`
    fn to_values(&self) -> BTreeMap<&'static str, Option<FieldValue>> {
        Self::schema().field_names().zip(self.to_fields()).collect()
    }

    /// Values as a row keyed by canonical name, suitable for [`Record::from_values`]
    fn to_row(&self) -> Row {
        Self::schema()
            .field_names()
            .zip(self.to_fields())
            .map(|(name, value)| (name, RawValue::from(value)))
            .collect()
    }

    /// Interchange form as a JSON object
    fn to_json_value(&self) -> serde_json::Value {
        let object = Self::schema()
            .field_names()
            .zip(self.to_fields())
            .map(|(name, value)| {
                let value = value.map_or(serde_json::Value::Null, |value| value.to_json());
                (name.to_string(), value)
            })
            .collect();
        serde_json::Value::Object(object)
    }

    /// Interchange form as compact JSON text
    fn to_json(&self) -> String {
        self.to_json_value().to_string()
    }

    /// Rebuild a record from its interchange JSON object
    ///
    /// Every value is re-validated, so text produced by [`Record::to_json`]
    /// reproduces an equal record.
    fn from_json_value(value: &serde_json::Value) -> Result<Self> {
        let schema = Self::schema();
        let serde_json::Value::Object(object) = value else {
            return Err(RecordError::Interchange {
                record: schema.name,
                message: format!("expected an object, got {value}"),
            });
        };

        let row: Row = object
            .iter()
            .map(|(key, value)| (key.as_str(), json_to_raw(value)))
            .collect();
        Self::parse_row(&row, &ParseConfig::programmatic())
    }

    /// Parse interchange JSON text
    fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|error| RecordError::Interchange {
                record: Self::schema().name,
                message: error.to_string(),
            })?;
        Self::from_json_value(&value)
    }
}

fn json_to_raw(value: &serde_json::Value) -> RawValue {
    match value {
        serde_json::Value::Null => RawValue::Absent,
        serde_json::Value::String(text) => RawValue::Text(text.clone()),
        serde_json::Value::Number(number) => number
            .as_i64()
            .map_or_else(|| RawValue::Text(number.to_string()), RawValue::from),
        other => RawValue::Text(other.to_string()),
    }
}
