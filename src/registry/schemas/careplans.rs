//! Care plans table

use chrono::NaiveDate;
use uuid::Uuid;

use crate::record_schema;
use crate::schema::FieldType;

record_schema! {
    /// A care plan initiated for a patient
    pub struct CarePlan {
        record: "CarePlan",
        table: "careplans",
        fields: {
            id: Uuid { alias: "Id", kind: FieldType::Identifier },
            /// Date the care plan was initiated
            start: NaiveDate { alias: "START", kind: FieldType::Date },
            /// Date the care plan ended, if applicable
            stop: Option<NaiveDate> { alias: "STOP", kind: FieldType::Date },
            patient: Uuid { alias: "PATIENT", kind: FieldType::Identifier },
            encounter: Uuid { alias: "ENCOUNTER", kind: FieldType::Identifier },
            /// SNOMED-CT code
            code: String { alias: "CODE", kind: FieldType::Text },
            description: String { alias: "DESCRIPTION", kind: FieldType::Text },
            /// Diagnosis code this care plan addresses
            reasoncode: Option<String> { alias: "REASONCODE", kind: FieldType::Text },
            reasondescription: Option<String> { alias: "REASONDESCRIPTION", kind: FieldType::Text },
        }
    }
}
