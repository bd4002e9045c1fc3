//! Claims transactions table

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::schema::FieldType;
use crate::{record_schema, token_enum};

token_enum! {
    /// Kind of line item on a claim
    pub enum TransactionType {
        /// Original line item
        Charge => "CHARGE",
        /// Payment against a charge by a payer or the patient
        Payment => "PAYMENT",
        /// Change in the charge without a payment
        Adjustment => "ADJUSTMENT",
        TransferIn => "TRANSFERIN",
        TransferOut => "TRANSFEROUT",
    }
}

token_enum! {
    /// How a payment was made
    pub enum PaymentMethod {
        Cash => "CASH",
        Check => "CHECK",
        ECheck => "ECHECK",
        Copay => "COPAY",
        /// Adjustment without payment
        System => "SYSTEM",
        CreditCard => "CC",
    }
}

token_enum! {
    /// Who a balance was transferred to
    pub enum TransferType {
        Primary => "1",
        Secondary => "2",
        Patient => "p",
    }
}

/// Index into the claim's eight diagnosis codes
pub const DIAGNOSIS_REFS: &[i64] = &[1, 2, 3, 4, 5, 6, 7, 8];

record_schema! {
    /// One financial line item of a claim
    pub struct ClaimTransaction {
        record: "ClaimTransaction",
        table: "claims_transactions",
        fields: {
            id: Uuid { alias: "ID", kind: FieldType::Identifier },
            claimid: Uuid { alias: "CLAIMID", kind: FieldType::Identifier },
            chargeid: i64 { alias: "CHARGEID", kind: FieldType::Integer },
            patientid: Uuid { alias: "PATIENTID", kind: FieldType::Identifier },
            r#type: TransactionType {
                name: "type",
                alias: "TYPE",
                kind: FieldType::Token(TransactionType::TOKENS),
            },
            /// Dollar amount for a CHARGE or TRANSFERIN
            amount: Option<Decimal> { alias: "AMOUNT", kind: FieldType::Decimal },
            method: Option<PaymentMethod> { alias: "METHOD", kind: FieldType::Token(PaymentMethod::TOKENS) },
            fromdate: Option<DateTime<Utc>> { alias: "FROMDATE", kind: FieldType::Timestamp },
            todate: Option<DateTime<Utc>> { alias: "TODATE", kind: FieldType::Timestamp },
            /// Organization where the service was provided
            placeofservice: Uuid { alias: "PLACEOFSERVICE", kind: FieldType::Identifier },
            procedurecode: String { alias: "PROCEDURECODE", kind: FieldType::Text },
            modifier1: Option<String> { alias: "MODIFIER1", kind: FieldType::Text },
            modifier2: Option<String> { alias: "MODIFIER2", kind: FieldType::Text },
            diagnosisref1: Option<i64> { alias: "DIAGNOSISREF1", kind: FieldType::IntegerToken(DIAGNOSIS_REFS) },
            diagnosisref2: Option<i64> { alias: "DIAGNOSISREF2", kind: FieldType::IntegerToken(DIAGNOSIS_REFS) },
            diagnosisref3: Option<i64> { alias: "DIAGNOSISREF3", kind: FieldType::IntegerToken(DIAGNOSIS_REFS) },
            diagnosisref4: Option<i64> { alias: "DIAGNOSISREF4", kind: FieldType::IntegerToken(DIAGNOSIS_REFS) },
            units: Option<i64> { alias: "UNITS", kind: FieldType::Integer },
            departmentid: Option<i64> { alias: "DEPARTMENTID", kind: FieldType::Integer },
            notes: Option<String> { alias: "NOTES", kind: FieldType::Text },
            unitamount: Option<Decimal> { alias: "UNITAMOUNT", kind: FieldType::Decimal },
            /// Charge id of the matching TRANSFEROUT row, for a TRANSFERIN
            transferoutid: Option<i64> { alias: "TRANSFEROUTID", kind: FieldType::Integer },
            transfertype: Option<TransferType> {
                alias: "TRANSFERTYPE",
                kind: FieldType::Token(TransferType::TOKENS),
            },
            payments: Option<Decimal> { alias: "PAYMENTS", kind: FieldType::Decimal },
            adjustments: Option<Decimal> { alias: "ADJUSTMENTS", kind: FieldType::Decimal },
            transfers: Option<Decimal> { alias: "TRANSFERS", kind: FieldType::Decimal },
            /// Amount left unpaid after this transaction
            outstanding: Option<Decimal> { alias: "OUTSTANDING", kind: FieldType::Decimal },
            appointmentid: Option<Uuid> { alias: "APPOINTMENTID", kind: FieldType::Identifier },
            linenote: Option<String> { alias: "LINENOTE", kind: FieldType::Text },
            /// Member id from the payer transitions table
            patientinsuranceid: Option<Uuid> { alias: "PATIENTINSURANCEID", kind: FieldType::Identifier },
            feescheduleid: Option<i64> { alias: "FEESCHEDULEID", kind: FieldType::Integer },
            providerid: Uuid { alias: "PROVIDERID", kind: FieldType::Identifier },
            supervisingproviderid: Option<Uuid> { alias: "SUPERVISINGPROVIDERID", kind: FieldType::Identifier },
        }
    }
}
