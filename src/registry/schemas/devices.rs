//! Devices table

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::record_schema;
use crate::schema::FieldType;

record_schema! {
    /// A device associated with a patient
    pub struct Device {
        record: "Device",
        table: "devices",
        fields: {
            start: DateTime<Utc> { alias: "START", kind: FieldType::Timestamp },
            stop: Option<DateTime<Utc>> { alias: "STOP", kind: FieldType::Timestamp },
            patient: Uuid { alias: "PATIENT", kind: FieldType::Identifier },
            encounter: Uuid { alias: "ENCOUNTER", kind: FieldType::Identifier },
            code: String { alias: "CODE", kind: FieldType::Text },
            description: String { alias: "DESCRIPTION", kind: FieldType::Text },
            /// Unique Device Identifier
            udi: String { alias: "UDI", kind: FieldType::Text },
        }
    }
}
