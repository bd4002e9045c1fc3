//! Untyped input rows
//!
//! A [`Row`] is a mapping from column key to [`RawValue`], the shape both a
//! CSV reader and programmatic callers hand to the record constructors.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use uuid::Uuid;

use crate::schema::field_def::FieldValue;

/// One input value before coercion
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawValue {
    /// No value supplied
    #[default]
    Absent,
    /// Text as read from a file
    Text(String),
    /// An already-typed value
    Value(FieldValue),
}

impl RawValue {
    /// Whether no value is supplied
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether this is the empty string
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }

    /// Text content, raw or typed
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Value(value) => value.as_text(),
            Self::Absent => None,
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<FieldValue> for RawValue {
    fn from(value: FieldValue) -> Self {
        Self::Value(value)
    }
}

impl From<Uuid> for RawValue {
    fn from(value: Uuid) -> Self {
        Self::Value(FieldValue::Identifier(value))
    }
}

impl From<NaiveDate> for RawValue {
    fn from(value: NaiveDate) -> Self {
        Self::Value(FieldValue::Date(value))
    }
}

impl From<DateTime<Utc>> for RawValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Value(FieldValue::Timestamp(value))
    }
}

impl From<Decimal> for RawValue {
    fn from(value: Decimal) -> Self {
        Self::Value(FieldValue::Decimal(value))
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Value(FieldValue::Integer(value))
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Value(FieldValue::Integer(i64::from(value)))
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// A mapping from column key to raw value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    entries: FxHashMap<String, RawValue>,
}

impl Row {
    /// Create an empty row
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from a header line and one record of a delimited file
    pub fn from_record<H, V>(headers: H, values: V) -> Self
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        V: IntoIterator,
        V::Item: AsRef<str>,
    {
        headers
            .into_iter()
            .zip(values)
            .map(|(key, value)| (key.as_ref().to_string(), RawValue::from(value.as_ref())))
            .collect()
    }

    /// Add a value, builder style
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a value, returning the previous one under the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Option<RawValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove a key
    pub fn remove(&mut self, key: &str) -> Option<RawValue> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
