//! Coercion of raw input values to typed field values.
//!
//! Text read from a file is trimmed and parsed according to the field's
//! [`FieldType`]. Values that are already typed are accepted only when they
//! fit the field exactly, with the numeric widenings noted on
//! [`coerce_value`].

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use uuid::Uuid;

use crate::error::FieldError;
use crate::schema::adapt::date_utils::{parse_date_string, parse_timestamp_string};
use crate::schema::adapt::types::DateFormatConfig;
use crate::schema::field_def::{FieldDescriptor, FieldType, FieldValue};
use crate::schema::row::RawValue;

/// Result of coercing one field; `Ok(None)` means the field is absent
pub type Coerced = Result<Option<FieldValue>, FieldError>;

/// Coerce a normalized raw value to the field's declared type
pub fn coerce_field(field: &FieldDescriptor, raw: &RawValue, config: &DateFormatConfig) -> Coerced {
    match raw {
        RawValue::Absent => Ok(None),
        RawValue::Text(text) => coerce_text(field.name, field.field_type, text, config),
        RawValue::Value(value) => coerce_value(field.name, field.field_type, value),
    }
}

/// Parse text for a field
///
/// Whitespace-only text is absent for every type.
pub fn coerce_text(
    field: &'static str,
    field_type: FieldType,
    text: &str,
    config: &DateFormatConfig,
) -> Coerced {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parsed = match field_type {
        FieldType::Identifier => Uuid::parse_str(trimmed).ok().map(FieldValue::Identifier),
        FieldType::Date => parse_date_string(trimmed, config).map(FieldValue::Date),
        FieldType::Timestamp => parse_timestamp_string(trimmed, config).map(FieldValue::Timestamp),
        FieldType::Decimal => parse_decimal(trimmed).map(FieldValue::Decimal),
        FieldType::Integer => trimmed.parse::<i64>().ok().map(FieldValue::Integer),
        FieldType::Text => Some(FieldValue::Text(trimmed.to_string())),
        FieldType::Token(tokens) => {
            return check_token(field, field_type, tokens, trimmed).map(Some);
        }
        FieldType::IntegerToken(codes) => {
            let code = trimmed
                .parse::<i64>()
                .map_err(|_| coercion_failure(field, field_type, trimmed))?;
            return check_code(field, field_type, codes, code).map(Some);
        }
        FieldType::Union(members) => {
            return members
                .iter()
                .find_map(|member| coerce_text(field, *member, trimmed, config).ok().flatten())
                .map(Some)
                .ok_or_else(|| coercion_failure(field, field_type, trimmed));
        }
    };

    parsed
        .map(Some)
        .ok_or_else(|| coercion_failure(field, field_type, trimmed))
}

/// Check an already-typed value against a field
///
/// Accepted beyond exact matches: an integer for a decimal field, an integral
/// decimal for an integer field, and a date for a timestamp field (midnight
/// UTC). Text values are trimmed like raw text.
pub fn coerce_value(field: &'static str, field_type: FieldType, value: &FieldValue) -> Coerced {
    let accepted = match (field_type, value) {
        (FieldType::Identifier, FieldValue::Identifier(_))
        | (FieldType::Date, FieldValue::Date(_))
        | (FieldType::Timestamp, FieldValue::Timestamp(_))
        | (FieldType::Decimal, FieldValue::Decimal(_))
        | (FieldType::Integer, FieldValue::Integer(_)) => Some(value.clone()),
        (FieldType::Timestamp, FieldValue::Date(date)) => date
            .and_hms_opt(0, 0, 0)
            .map(|naive| FieldValue::Timestamp(naive.and_utc())),
        (FieldType::Decimal, FieldValue::Integer(number)) => {
            Some(FieldValue::Decimal(Decimal::from(*number)))
        }
        (FieldType::Integer, FieldValue::Decimal(number)) => {
            integral(*number).map(FieldValue::Integer)
        }
        (FieldType::Text, FieldValue::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            Some(FieldValue::Text(trimmed.to_string()))
        }
        (FieldType::Token(tokens), FieldValue::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            return check_token(field, field_type, tokens, trimmed).map(Some);
        }
        (FieldType::IntegerToken(codes), FieldValue::Integer(code)) => {
            return check_code(field, field_type, codes, *code).map(Some);
        }
        (FieldType::IntegerToken(codes), FieldValue::Decimal(number)) => match integral(*number) {
            Some(code) => return check_code(field, field_type, codes, code).map(Some),
            None => None,
        },
        (FieldType::Union(members), _) => {
            return members
                .iter()
                .find_map(|member| coerce_value(field, *member, value).ok())
                .ok_or_else(|| coercion_failure(field, field_type, &value.to_string()));
        }
        _ => None,
    };

    accepted
        .map(Some)
        .ok_or_else(|| coercion_failure(field, field_type, &value.to_string()))
}

/// Parse a base-10 number, plain or in scientific notation
#[must_use]
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn integral(number: Decimal) -> Option<i64> {
    if number.fract().is_zero() {
        number.to_i64()
    } else {
        None
    }
}

fn check_token(
    field: &'static str,
    field_type: FieldType,
    tokens: &[&str],
    token: &str,
) -> Result<FieldValue, FieldError> {
    if tokens.contains(&token) {
        Ok(FieldValue::Text(token.to_string()))
    } else {
        Err(enumeration_violation(field, field_type, token))
    }
}

fn check_code(
    field: &'static str,
    field_type: FieldType,
    codes: &[i64],
    code: i64,
) -> Result<FieldValue, FieldError> {
    if codes.contains(&code) {
        Ok(FieldValue::Integer(code))
    } else {
        Err(enumeration_violation(field, field_type, &code.to_string()))
    }
}

fn coercion_failure(field: &'static str, field_type: FieldType, value: &str) -> FieldError {
    FieldError::TypeCoercionFailure {
        field,
        expected: field_type.to_string(),
        value: value.to_string(),
    }
}

fn enumeration_violation(field: &'static str, field_type: FieldType, value: &str) -> FieldError {
    FieldError::EnumerationConstraintViolation {
        field,
        value: value.to_string(),
        allowed: field_type.allowed_values().unwrap_or_default(),
    }
}
