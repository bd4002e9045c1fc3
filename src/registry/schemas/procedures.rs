//! Procedures table

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::record_schema;
use crate::schema::FieldType;

record_schema! {
    /// A procedure performed on a patient
    pub struct Procedure {
        record: "Procedure",
        table: "procedures",
        fields: {
            start: DateTime<Utc> { alias: "START", kind: FieldType::Timestamp },
            stop: Option<DateTime<Utc>> { alias: "STOP", kind: FieldType::Timestamp },
            patient: Uuid { alias: "PATIENT", kind: FieldType::Identifier },
            encounter: Uuid { alias: "ENCOUNTER", kind: FieldType::Identifier },
            system: Option<String> { alias: "SYSTEM", kind: FieldType::Text },
            code: String { alias: "CODE", kind: FieldType::Text },
            description: String { alias: "DESCRIPTION", kind: FieldType::Text },
            base_cost: Decimal { alias: "BASE_COST", kind: FieldType::Decimal },
            /// Diagnosis code the procedure was performed for
            reasoncode: Option<String> { alias: "REASONCODE", kind: FieldType::Text },
            reasondescription: Option<String> { alias: "REASONDESCRIPTION", kind: FieldType::Text },
        }
    }
}
