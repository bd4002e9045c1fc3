//! Patients table

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::schema::FieldType;
use crate::{record_schema, token_enum};

token_enum! {
    /// Administrative gender
    pub enum Gender {
        Male => "M",
        Female => "F",
    }
}

token_enum! {
    /// Marital status
    pub enum MaritalStatus {
        Married => "M",
        Single => "S",
    }
}

record_schema! {
    /// A synthetic patient
    pub struct Patient {
        record: "Patient",
        table: "patients",
        fields: {
            id: Uuid { alias: "Id", kind: FieldType::Identifier },
            birthdate: NaiveDate { alias: "BIRTHDATE", kind: FieldType::Date },
            deathdate: Option<NaiveDate> { alias: "DEATHDATE", kind: FieldType::Date },
            /// Social Security identifier
            ssn: String { alias: "SSN", kind: FieldType::Text },
            /// Drivers license identifier
            drivers: Option<String> { alias: "DRIVERS", kind: FieldType::Text },
            passport: Option<String> { alias: "PASSPORT", kind: FieldType::Text },
            prefix: Option<String> { alias: "PREFIX", kind: FieldType::Text },
            first: String { alias: "FIRST", kind: FieldType::Text },
            middle: Option<String> { kind: FieldType::Text },
            last: String { alias: "LAST", kind: FieldType::Text },
            suffix: Option<String> { alias: "SUFFIX", kind: FieldType::Text },
            maiden: Option<String> { alias: "MAIDEN", kind: FieldType::Text },
            marital: Option<MaritalStatus> { alias: "MARITAL", kind: FieldType::Token(MaritalStatus::TOKENS) },
            race: String { alias: "RACE", kind: FieldType::Text },
            ethnicity: String { alias: "ETHNICITY", kind: FieldType::Text },
            gender: Gender { alias: "GENDER", kind: FieldType::Token(Gender::TOKENS) },
            /// Town where the patient was born
            birthplace: String { alias: "BIRTHPLACE", kind: FieldType::Text },
            address: String { alias: "ADDRESS", kind: FieldType::Text },
            city: String { alias: "CITY", kind: FieldType::Text },
            state: String { alias: "STATE", kind: FieldType::Text },
            county: Option<String> { alias: "COUNTY", kind: FieldType::Text },
            /// FIPS county code
            fips: Option<String> { alias: "FIPS", kind: FieldType::Text },
            zip: Option<String> { alias: "ZIP", kind: FieldType::Text },
            lat: Option<Decimal> { alias: "LAT", kind: FieldType::Decimal },
            lon: Option<Decimal> { alias: "LON", kind: FieldType::Decimal },
            /// Lifetime cost of healthcare paid by the patient
            healthcare_expenses: Decimal { alias: "HEALTHCARE_EXPENSES", kind: FieldType::Decimal },
            /// Lifetime cost of healthcare covered by payers
            healthcare_coverage: Decimal { alias: "HEALTHCARE_COVERAGE", kind: FieldType::Decimal },
            income: Option<Decimal> { alias: "INCOME", kind: FieldType::Decimal },
        }
    }
}
