//! Conditions table

use chrono::NaiveDate;
use uuid::Uuid;

use crate::record_schema;
use crate::schema::FieldType;

record_schema! {
    /// A condition diagnosed for a patient
    pub struct Condition {
        record: "Condition",
        table: "conditions",
        fields: {
            /// Date the condition was diagnosed
            start: NaiveDate { alias: "START", kind: FieldType::Date },
            /// Date the condition resolved, if applicable
            stop: Option<NaiveDate> { alias: "STOP", kind: FieldType::Date },
            patient: Uuid { alias: "PATIENT", kind: FieldType::Identifier },
            encounter: Uuid { alias: "ENCOUNTER", kind: FieldType::Identifier },
            /// Code system, typically SNOMED-CT
            system: Option<String> { alias: "SYSTEM", kind: FieldType::Text },
            code: String { alias: "CODE", kind: FieldType::Text },
            description: String { alias: "DESCRIPTION", kind: FieldType::Text },
        }
    }
}
