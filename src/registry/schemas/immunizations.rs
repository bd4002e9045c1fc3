//! Immunizations table

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::record_schema;
use crate::schema::{FieldType, NormalizeRule};

record_schema! {
    /// An immunization administered to a patient
    pub struct Immunization {
        record: "Immunization",
        table: "immunizations",
        rules: [
            // older exports name the column COST
            NormalizeRule::FallbackKeys { field: "base_cost", keys: &["cost", "COST"] },
        ],
        fields: {
            date: DateTime<Utc> { alias: "DATE", kind: FieldType::Timestamp },
            patient: Uuid { alias: "PATIENT", kind: FieldType::Identifier },
            encounter: Uuid { alias: "ENCOUNTER", kind: FieldType::Identifier },
            /// CVX code
            code: String { alias: "CODE", kind: FieldType::Text },
            description: String { alias: "DESCRIPTION", kind: FieldType::Text },
            /// Line item cost of the immunization
            base_cost: Decimal { alias: "BASE_COST", kind: FieldType::Decimal },
        }
    }
}
