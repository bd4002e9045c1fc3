//! Payers table

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::record_schema;
use crate::schema::FieldType;

record_schema! {
    /// An insurance payer with its simulation-wide totals
    pub struct Payer {
        record: "Payer",
        table: "payers",
        fields: {
            id: Uuid { alias: "Id", kind: FieldType::Identifier },
            name: String { alias: "NAME", kind: FieldType::Text },
            /// Typically `Government` or `Private`
            ownership: Option<String> { alias: "OWNERSHIP", kind: FieldType::Text },
            address: Option<String> { alias: "ADDRESS", kind: FieldType::Text },
            city: Option<String> { alias: "CITY", kind: FieldType::Text },
            state_headquartered: Option<String> { alias: "STATE_HEADQUARTERED", kind: FieldType::Text },
            zip: Option<String> { alias: "ZIP", kind: FieldType::Text },
            phone: Option<String> { alias: "PHONE", kind: FieldType::Text },
            /// Amount paid to organizations
            amount_covered: Decimal { alias: "AMOUNT_COVERED", kind: FieldType::Decimal },
            /// Amount paid out of pocket by patients
            amount_uncovered: Decimal { alias: "AMOUNT_UNCOVERED", kind: FieldType::Decimal },
            revenue: Decimal { alias: "REVENUE", kind: FieldType::Decimal },
            covered_encounters: i64 { alias: "COVERED_ENCOUNTERS", kind: FieldType::Integer },
            uncovered_encounters: i64 { alias: "UNCOVERED_ENCOUNTERS", kind: FieldType::Integer },
            covered_medications: i64 { alias: "COVERED_MEDICATIONS", kind: FieldType::Integer },
            uncovered_medications: i64 { alias: "UNCOVERED_MEDICATIONS", kind: FieldType::Integer },
            covered_procedures: i64 { alias: "COVERED_PROCEDURES", kind: FieldType::Integer },
            uncovered_procedures: i64 { alias: "UNCOVERED_PROCEDURES", kind: FieldType::Integer },
            covered_immunizations: i64 { alias: "COVERED_IMMUNIZATIONS", kind: FieldType::Integer },
            uncovered_immunizations: i64 { alias: "UNCOVERED_IMMUNIZATIONS", kind: FieldType::Integer },
            unique_customers: i64 { alias: "UNIQUE_CUSTOMERS", kind: FieldType::Integer },
            /// Average quality-of-life score of enrolled patients
            qols_avg: Decimal { alias: "QOLS_AVG", kind: FieldType::Decimal },
            member_months: i64 { alias: "MEMBER_MONTHS", kind: FieldType::Integer },
        }
    }
}
