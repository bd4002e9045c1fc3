//! Encounters table

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::schema::FieldType;
use crate::{record_schema, token_enum};

token_enum! {
    /// Setting of an encounter
    pub enum EncounterClass {
        Ambulatory => "ambulatory",
        Emergency => "emergency",
        Inpatient => "inpatient",
        Outpatient => "outpatient",
        UrgentCare => "urgentcare",
        Wellness => "wellness",
    }
}

record_schema! {
    /// A visit of a patient to a provider
    pub struct Encounter {
        record: "Encounter",
        table: "encounters",
        fields: {
            id: Uuid { alias: "Id", kind: FieldType::Identifier },
            start: DateTime<Utc> { alias: "START", kind: FieldType::Timestamp },
            stop: Option<DateTime<Utc>> { alias: "STOP", kind: FieldType::Timestamp },
            patient: Uuid { alias: "PATIENT", kind: FieldType::Identifier },
            organization: Uuid { alias: "ORGANIZATION", kind: FieldType::Identifier },
            provider: Uuid { alias: "PROVIDER", kind: FieldType::Identifier },
            payer: Uuid { alias: "PAYER", kind: FieldType::Identifier },
            encounterclass: EncounterClass {
                alias: "ENCOUNTERCLASS",
                kind: FieldType::Token(EncounterClass::TOKENS),
            },
            code: String { alias: "CODE", kind: FieldType::Text },
            description: String { alias: "DESCRIPTION", kind: FieldType::Text },
            /// Cost of the encounter excluding line items
            base_encounter_cost: Decimal { alias: "BASE_ENCOUNTER_COST", kind: FieldType::Decimal },
            /// Cost of the encounter including all line items
            total_claim_cost: Decimal { alias: "TOTAL_CLAIM_COST", kind: FieldType::Decimal },
            payer_coverage: Decimal { alias: "PAYER_COVERAGE", kind: FieldType::Decimal },
            reasoncode: Option<String> { alias: "REASONCODE", kind: FieldType::Text },
            reasondescription: Option<String> { alias: "REASONDESCRIPTION", kind: FieldType::Text },
        }
    }
}
