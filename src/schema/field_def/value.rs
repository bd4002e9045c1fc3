//! Typed field values and their conversion to and from Rust types

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::schema::adapt::date_utils::format_timestamp;

/// A coerced, validated value of one field
///
/// Token fields carry their token as [`FieldValue::Text`] and integer-coded
/// fields carry theirs as [`FieldValue::Integer`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Identifier(Uuid),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Decimal(Decimal),
    Integer(i64),
    Text(String),
}

impl FieldValue {
    /// Name of the variant, for error messages
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Identifier(_) => "identifier",
            Self::Date(_) => "date",
            Self::Timestamp(_) => "timestamp",
            Self::Decimal(_) => "decimal",
            Self::Integer(_) => "integer",
            Self::Text(_) => "text",
        }
    }

    /// Text content, for text and token values
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Interchange form of the value
    ///
    /// Integers are JSON numbers; everything else is a string so that decimal
    /// scale and timestamp precision survive the trip.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Integer(value) => serde_json::Value::from(*value),
            other => serde_json::Value::String(other.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(id) => write!(f, "{}", id.hyphenated()),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Timestamp(timestamp) => f.write_str(&format_timestamp(timestamp)),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Conversion between a Rust field type and [`FieldValue`]
pub trait FieldCodec: Sized {
    /// Extract the Rust value, `None` if the variant does not fit
    fn decode(value: FieldValue) -> Option<Self>;

    /// Wrap the Rust value
    fn encode(&self) -> FieldValue;
}

/// A struct slot holding a field, either required (`T`) or optional (`Option<T>`)
///
/// Implemented for both forms of every [`FieldCodec`] type by
/// [`impl_field_slot!`](crate::impl_field_slot).
pub trait FieldSlot: Sized {
    /// Whether the slot needs a value
    const REQUIRED: bool;

    /// Build the slot from a coerced value, `None` if it cannot hold it
    fn fill(value: Option<FieldValue>) -> Option<Self>;

    /// The value held by the slot
    fn drain(&self) -> Option<FieldValue>;
}

impl FieldCodec for Uuid {
    fn decode(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Identifier(id) => Some(id),
            _ => None,
        }
    }

    fn encode(&self) -> FieldValue {
        FieldValue::Identifier(*self)
    }
}

impl FieldCodec for NaiveDate {
    fn decode(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Date(date) => Some(date),
            _ => None,
        }
    }

    fn encode(&self) -> FieldValue {
        FieldValue::Date(*self)
    }
}

impl FieldCodec for DateTime<Utc> {
    fn decode(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Timestamp(timestamp) => Some(timestamp),
            _ => None,
        }
    }

    fn encode(&self) -> FieldValue {
        FieldValue::Timestamp(*self)
    }
}

impl FieldCodec for Decimal {
    fn decode(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Decimal(value) => Some(value),
            _ => None,
        }
    }

    fn encode(&self) -> FieldValue {
        FieldValue::Decimal(*self)
    }
}

impl FieldCodec for i64 {
    fn decode(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Integer(value) => Some(value),
            _ => None,
        }
    }

    fn encode(&self) -> FieldValue {
        FieldValue::Integer(*self)
    }
}

impl FieldCodec for String {
    fn decode(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    fn encode(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }
}

crate::impl_field_slot!(Uuid, NaiveDate, DateTime<Utc>, Decimal, i64, String);
