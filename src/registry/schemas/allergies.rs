//! Allergies table

use chrono::NaiveDate;
use uuid::Uuid;

use crate::schema::FieldType;
use crate::{record_schema, token_enum};

token_enum! {
    /// Whether an entry is a true allergy or an intolerance
    pub enum AllergyType {
        Allergy => "allergy",
        Intolerance => "intolerance",
    }
}

token_enum! {
    /// Category of the allergen
    pub enum AllergyCategory {
        Drug => "drug",
        Medication => "medication",
        Food => "food",
        Environment => "environment",
    }
}

token_enum! {
    /// Severity of an allergic reaction
    pub enum Severity {
        Mild => "MILD",
        Moderate => "MODERATE",
        Severe => "SEVERE",
    }
}

record_schema! {
    /// An allergy or intolerance diagnosed for a patient
    pub struct Allergy {
        record: "Allergy",
        table: "allergies",
        fields: {
            /// Date the allergy was diagnosed
            start: NaiveDate { alias: "START", kind: FieldType::Date },
            /// Date the allergy ended, if applicable
            stop: Option<NaiveDate> { alias: "STOP", kind: FieldType::Date },
            patient: Uuid { alias: "PATIENT", kind: FieldType::Identifier },
            /// Encounter when the allergy was diagnosed
            encounter: Uuid { alias: "ENCOUNTER", kind: FieldType::Identifier },
            code: String { alias: "CODE", kind: FieldType::Text },
            /// Terminology system of the code, RxNorm for medication allergies, otherwise SNOMED-CT
            system: String { alias: "SYSTEM", kind: FieldType::Text },
            description: String { alias: "DESCRIPTION", kind: FieldType::Text },
            r#type: Option<AllergyType> {
                name: "type",
                alias: "TYPE",
                kind: FieldType::Token(AllergyType::TOKENS),
            },
            category: Option<AllergyCategory> {
                alias: "CATEGORY",
                kind: FieldType::Token(AllergyCategory::TOKENS),
            },
            /// SNOMED-CT code of the first reaction
            reaction1: Option<String> { alias: "REACTION1", kind: FieldType::Text },
            description1: Option<String> { alias: "DESCRIPTION1", kind: FieldType::Text },
            severity1: Option<Severity> { alias: "SEVERITY1", kind: FieldType::Token(Severity::TOKENS) },
            /// SNOMED-CT code of the second reaction
            reaction2: Option<String> { alias: "REACTION2", kind: FieldType::Text },
            description2: Option<String> { alias: "DESCRIPTION2", kind: FieldType::Text },
            severity2: Option<Severity> { alias: "SEVERITY2", kind: FieldType::Token(Severity::TOKENS) },
        }
    }
}
