//! Claims table

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::schema::FieldType;
use crate::{record_schema, token_enum};

token_enum! {
    /// Billing status of a claim with one of its payers
    pub enum ClaimStatus {
        Billed => "BILLED",
        Closed => "CLOSED",
    }
}

/// Healthcare claim type codes: 1 is professional, 2 is institutional
pub const CLAIM_TYPE_CODES: &[i64] = &[1, 2];

record_schema! {
    /// A claim billed for an encounter
    pub struct Claim {
        record: "Claim",
        table: "claims",
        fields: {
            id: Uuid { alias: "Id", kind: FieldType::Identifier },
            patientid: Uuid { alias: "PATIENTID", kind: FieldType::Identifier },
            providerid: Uuid { alias: "PROVIDERID", kind: FieldType::Identifier },
            /// Primary payer
            primarypatientinsuranceid: Option<Uuid> {
                alias: "PRIMARYPATIENTINSURANCEID",
                kind: FieldType::Identifier,
            },
            /// Secondary payer
            secondarypatientinsuranceid: Option<Uuid> {
                alias: "SECONDARYPATIENTINSURANCEID",
                kind: FieldType::Identifier,
            },
            departmentid: i64 { alias: "DEPARTMENTID", kind: FieldType::Integer },
            patientdepartmentid: i64 { alias: "PATIENTDEPARTMENTID", kind: FieldType::Integer },
            diagnosis1: Option<String> { alias: "DIAGNOSIS1", kind: FieldType::Text },
            diagnosis2: Option<String> { alias: "DIAGNOSIS2", kind: FieldType::Text },
            diagnosis3: Option<String> { alias: "DIAGNOSIS3", kind: FieldType::Text },
            diagnosis4: Option<String> { alias: "DIAGNOSIS4", kind: FieldType::Text },
            diagnosis5: Option<String> { alias: "DIAGNOSIS5", kind: FieldType::Text },
            diagnosis6: Option<String> { alias: "DIAGNOSIS6", kind: FieldType::Text },
            diagnosis7: Option<String> { alias: "DIAGNOSIS7", kind: FieldType::Text },
            diagnosis8: Option<String> { alias: "DIAGNOSIS8", kind: FieldType::Text },
            referringproviderid: Option<Uuid> { alias: "REFERRINGPROVIDERID", kind: FieldType::Identifier },
            /// Encounter the claim bills for
            appointmentid: Option<Uuid> { alias: "APPOINTMENTID", kind: FieldType::Identifier },
            /// When the patient first experienced symptoms
            currentillnessdate: DateTime<Utc> { alias: "CURRENTILLNESSDATE", kind: FieldType::Timestamp },
            servicedate: DateTime<Utc> { alias: "SERVICEDATE", kind: FieldType::Timestamp },
            supervisingproviderid: Option<Uuid> { alias: "SUPERVISINGPROVIDERID", kind: FieldType::Identifier },
            status1: Option<ClaimStatus> { alias: "STATUS1", kind: FieldType::Token(ClaimStatus::TOKENS) },
            status2: Option<ClaimStatus> { alias: "STATUS2", kind: FieldType::Token(ClaimStatus::TOKENS) },
            statusp: Option<ClaimStatus> { alias: "STATUSP", kind: FieldType::Token(ClaimStatus::TOKENS) },
            outstanding1: Option<Decimal> { alias: "OUTSTANDING1", kind: FieldType::Decimal },
            outstanding2: Option<Decimal> { alias: "OUTSTANDING2", kind: FieldType::Decimal },
            outstandingp: Option<Decimal> { alias: "OUTSTANDINGP", kind: FieldType::Decimal },
            lastbilleddate1: Option<DateTime<Utc>> { alias: "LASTBILLEDDATE1", kind: FieldType::Timestamp },
            lastbilleddate2: Option<DateTime<Utc>> { alias: "LASTBILLEDDATE2", kind: FieldType::Timestamp },
            lastbilleddatep: Option<DateTime<Utc>> { alias: "LASTBILLEDDATEP", kind: FieldType::Timestamp },
            healthcareclaimtypeid1: Option<i64> {
                alias: "HEALTHCARECLAIMTYPEID1",
                kind: FieldType::IntegerToken(CLAIM_TYPE_CODES),
            },
            healthcareclaimtypeid2: Option<i64> {
                alias: "HEALTHCARECLAIMTYPEID2",
                kind: FieldType::IntegerToken(CLAIM_TYPE_CODES),
            },
        }
    }
}
