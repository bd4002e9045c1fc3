//! Observations table

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::schema::{FieldCodec, FieldType, FieldValue, NormalizeRule};
use crate::{impl_field_slot, record_schema, token_enum};

token_enum! {
    /// Datatype of an observation value
    pub enum ObservationType {
        Numeric => "numeric",
        Text => "text",
    }
}

/// Recorded value of an observation
///
/// Numeric only when the row's type is `numeric` and the value parses as a
/// number; questionnaire answers and other verbose values stay text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObservationValue {
    Numeric(Decimal),
    Text(String),
}

impl ObservationValue {
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Numeric(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for ObservationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl FieldCodec for ObservationValue {
    fn decode(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Decimal(number) => Some(Self::Numeric(number)),
            FieldValue::Text(text) => Some(Self::Text(text)),
            _ => None,
        }
    }

    fn encode(&self) -> FieldValue {
        match self {
            Self::Numeric(number) => FieldValue::Decimal(*number),
            Self::Text(text) => FieldValue::Text(text.clone()),
        }
    }
}

impl_field_slot!(ObservationValue);

record_schema! {
    /// An observation or lab result recorded for a patient
    pub struct Observation {
        record: "Observation",
        table: "observations",
        rules: [
            NormalizeRule::TextUnless { field: "value", discriminator: "type", token: "numeric" },
        ],
        fields: {
            date: DateTime<Utc> { alias: "DATE", kind: FieldType::Timestamp },
            patient: Uuid { alias: "PATIENT", kind: FieldType::Identifier },
            /// Encounter where the observation was performed, absent for standalone results
            encounter: Option<Uuid> { alias: "ENCOUNTER", kind: FieldType::Identifier },
            category: Option<String> { alias: "CATEGORY", kind: FieldType::Text },
            /// LOINC code
            code: String { alias: "CODE", kind: FieldType::Text },
            description: String { alias: "DESCRIPTION", kind: FieldType::Text },
            value: Option<ObservationValue> {
                alias: "VALUE",
                kind: FieldType::Union(&[FieldType::Decimal, FieldType::Text]),
            },
            units: Option<String> { alias: "UNITS", kind: FieldType::Text },
            r#type: ObservationType {
                name: "type",
                alias: "TYPE",
                kind: FieldType::Token(ObservationType::TOKENS),
            },
        }
    }
}
