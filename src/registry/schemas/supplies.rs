//! Supplies table

use chrono::NaiveDate;
use uuid::Uuid;

use crate::record_schema;
use crate::schema::FieldType;

record_schema! {
    /// A supply used during an encounter
    pub struct Supply {
        record: "Supply",
        table: "supplies",
        fields: {
            date: NaiveDate { alias: "DATE", kind: FieldType::Date },
            patient: Uuid { alias: "PATIENT", kind: FieldType::Identifier },
            encounter: Uuid { alias: "ENCOUNTER", kind: FieldType::Identifier },
            code: String { alias: "CODE", kind: FieldType::Text },
            description: String { alias: "DESCRIPTION", kind: FieldType::Text },
            quantity: i64 { alias: "QUANTITY", kind: FieldType::Integer },
        }
    }
}
