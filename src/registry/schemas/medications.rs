//! Medications table

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::record_schema;
use crate::schema::FieldType;

record_schema! {
    /// A medication prescribed to a patient
    pub struct Medication {
        record: "Medication",
        table: "medications",
        fields: {
            start: DateTime<Utc> { alias: "START", kind: FieldType::Timestamp },
            stop: Option<DateTime<Utc>> { alias: "STOP", kind: FieldType::Timestamp },
            patient: Uuid { alias: "PATIENT", kind: FieldType::Identifier },
            payer: Uuid { alias: "PAYER", kind: FieldType::Identifier },
            encounter: Uuid { alias: "ENCOUNTER", kind: FieldType::Identifier },
            /// RxNorm code
            code: String { alias: "CODE", kind: FieldType::Text },
            description: String { alias: "DESCRIPTION", kind: FieldType::Text },
            base_cost: Decimal { alias: "BASE_COST", kind: FieldType::Decimal },
            payer_coverage: Decimal { alias: "PAYER_COVERAGE", kind: FieldType::Decimal },
            /// Number of times the prescription was filled
            dispenses: i64 { alias: "DISPENSES", kind: FieldType::Integer },
            totalcost: Decimal { alias: "TOTALCOST", kind: FieldType::Decimal },
            reasoncode: Option<String> { alias: "REASONCODE", kind: FieldType::Text },
            reasondescription: Option<String> { alias: "REASONDESCRIPTION", kind: FieldType::Text },
        }
    }
}
