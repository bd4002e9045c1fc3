//! Payer transitions table

use uuid::Uuid;

use crate::schema::{FieldType, NormalizeRule};
use crate::{record_schema, token_enum};

token_enum! {
    /// Owner of an insurance policy relative to the patient
    pub enum PolicyOwnership {
        Guardian => "Guardian",
        Own => "Self",
        Spouse => "Spouse",
    }
}

record_schema! {
    /// A span of years a patient was covered by a payer
    ///
    /// Newer exports write full timestamps for the start and end of coverage;
    /// only the year is kept.
    pub struct PayerTransition {
        record: "PayerTransition",
        table: "payer_transitions",
        rules: [
            NormalizeRule::YearOf("start_year"),
            NormalizeRule::YearOf("end_year"),
        ],
        fields: {
            patient: Uuid { alias: "PATIENT", kind: FieldType::Identifier },
            /// Member id for the insurance plan
            memberid: Option<Uuid> { alias: "MEMBERID", kind: FieldType::Identifier },
            /// First year of coverage, inclusive
            start_year: i64 { alias: "START_YEAR", kind: FieldType::Integer },
            /// Last year of coverage, inclusive
            end_year: i64 { alias: "END_YEAR", kind: FieldType::Integer },
            payer: Uuid { alias: "PAYER", kind: FieldType::Identifier },
            secondary_payer: Option<Uuid> { alias: "SECONDARY_PAYER", kind: FieldType::Identifier },
            ownership: Option<PolicyOwnership> {
                alias: "OWNERSHIP",
                kind: FieldType::Token(PolicyOwnership::TOKENS),
            },
            owner_name: Option<String> { alias: "OWNERNAME", kind: FieldType::Text },
        }
    }
}
