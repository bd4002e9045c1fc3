//! Providers table

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::record_schema;
use crate::registry::schemas::patients::Gender;
use crate::schema::FieldType;

record_schema! {
    /// A clinician employed by an organization
    pub struct Provider {
        record: "Provider",
        table: "providers",
        fields: {
            id: Uuid { alias: "Id", kind: FieldType::Identifier },
            /// Employing organization
            organization: Uuid { alias: "ORGANIZATION", kind: FieldType::Identifier },
            name: String { alias: "NAME", kind: FieldType::Text },
            gender: Gender { alias: "GENDER", kind: FieldType::Token(Gender::TOKENS) },
            speciality: String { alias: "SPECIALITY", kind: FieldType::Text },
            address: String { alias: "ADDRESS", kind: FieldType::Text },
            city: String { alias: "CITY", kind: FieldType::Text },
            state: Option<String> { alias: "STATE", kind: FieldType::Text },
            zip: Option<String> { alias: "ZIP", kind: FieldType::Text },
            lat: Option<Decimal> { alias: "LAT", kind: FieldType::Decimal },
            lon: Option<Decimal> { alias: "LON", kind: FieldType::Decimal },
            encounters: i64 { alias: "ENCOUNTERS", kind: FieldType::Integer },
            procedures: i64 { alias: "PROCEDURES", kind: FieldType::Integer },
            utilization: Option<i64> { kind: FieldType::Integer },
        }
    }
}
