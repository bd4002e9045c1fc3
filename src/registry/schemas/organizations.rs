//! Organizations table

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::record_schema;
use crate::schema::FieldType;

record_schema! {
    /// A healthcare organization
    pub struct Organization {
        record: "Organization",
        table: "organizations",
        fields: {
            id: Uuid { alias: "Id", kind: FieldType::Identifier },
            name: String { alias: "NAME", kind: FieldType::Text },
            address: String { alias: "ADDRESS", kind: FieldType::Text },
            city: String { alias: "CITY", kind: FieldType::Text },
            state: Option<String> { alias: "STATE", kind: FieldType::Text },
            zip: Option<String> { alias: "ZIP", kind: FieldType::Text },
            lat: Option<Decimal> { alias: "LAT", kind: FieldType::Decimal },
            lon: Option<Decimal> { alias: "LON", kind: FieldType::Decimal },
            phone: Option<String> { alias: "PHONE", kind: FieldType::Text },
            /// Revenue in USD
            revenue: Decimal { alias: "REVENUE", kind: FieldType::Decimal },
            /// Number of encounters performed by the organization
            utilization: i64 { alias: "UTILIZATION", kind: FieldType::Integer },
        }
    }
}
