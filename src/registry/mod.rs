//! Record catalog for Synthea export tables
//!
//! This module ties every table of a Synthea CSV export to its typed record.
//! [`RecordKind`] names a record type and can be resolved from a table or
//! record name; [`AnyRecord`] holds a parsed record of any type.
//!
//! Available tables:
//! - allergies, careplans, conditions, devices, immunizations, medications,
//!   observations, procedures, supplies, imaging_studies: clinical events
//! - patients, encounters, providers, organizations: the care setting
//! - payers, payer_transitions, claims, claims_transactions: coverage and billing

pub mod schemas;

use std::collections::BTreeMap;
use std::fmt;

use crate::config::ParseConfig;
use crate::error::{RecordError, Result};
use crate::schema::{FieldValue, Record, RecordSchema, Row};

pub use schemas::*;

macro_rules! catalog {
    ($($kind:ident => $record:ty),+ $(,)?) => {
        /// Identifies one of the record types
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum RecordKind {
            $($kind,)+
        }

        impl RecordKind {
            /// Every record type, in catalog order
            pub const ALL: &'static [RecordKind] = &[$(RecordKind::$kind,)+];

            /// Static schema of the record type
            #[must_use]
            pub fn schema(self) -> &'static RecordSchema {
                match self {
                    $(Self::$kind => <$record as Record>::schema(),)+
                }
            }

            /// Validate a row as this record type
            pub fn parse(self, row: &Row, config: &ParseConfig) -> Result<AnyRecord> {
                match self {
                    $(Self::$kind => <$record as Record>::parse_row(row, config).map(AnyRecord::$kind),)+
                }
            }
        }

        /// A validated record of any type
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum AnyRecord {
            $($kind($record),)+
        }

        impl AnyRecord {
            /// Record type of the value
            #[must_use]
            pub fn kind(&self) -> RecordKind {
                match self {
                    $(Self::$kind(_) => RecordKind::$kind,)+
                }
            }

            /// Canonical field name to value
            #[must_use]
            pub fn to_values(&self) -> BTreeMap<&'static str, Option<FieldValue>> {
                match self {
                    $(Self::$kind(record) => record.to_values(),)+
                }
            }

            /// Interchange form as compact JSON text
            #[must_use]
            pub fn to_json(&self) -> String {
                match self {
                    $(Self::$kind(record) => record.to_json(),)+
                }
            }
        }

        $(
            impl From<$record> for AnyRecord {
                fn from(record: $record) -> Self {
                    Self::$kind(record)
                }
            }
        )+
    };
}

catalog! {
    Allergy => Allergy,
    CarePlan => CarePlan,
    Claim => Claim,
    ClaimTransaction => ClaimTransaction,
    Condition => Condition,
    Device => Device,
    Encounter => Encounter,
    ImagingStudy => ImagingStudy,
    Immunization => Immunization,
    Medication => Medication,
    Observation => Observation,
    Organization => Organization,
    Patient => Patient,
    PayerTransition => PayerTransition,
    Payer => Payer,
    Procedure => Procedure,
    Provider => Provider,
    Supply => Supply,
}

impl RecordKind {
    /// Record type name, e.g. `Patient`
    #[must_use]
    pub fn name(self) -> &'static str {
        self.schema().name
    }

    /// Export table name, e.g. `patients`
    #[must_use]
    pub fn table_name(self) -> &'static str {
        self.schema().table
    }

    /// Look up a record type by table name, ignoring case and a `.csv` suffix
    pub fn from_table_name(name: &str) -> Result<Self> {
        let table = name.trim().to_lowercase();
        let table = table.strip_suffix(".csv").unwrap_or(&table);
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.table_name() == table)
            .ok_or_else(|| RecordError::UnknownRecordType(name.to_string()))
    }

    /// Look up a record type by record name, e.g. `ClaimTransaction`
    pub fn from_record_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| RecordError::UnknownRecordType(name.to_string()))
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Schemas of every record type, in catalog order
#[must_use]
pub fn catalog() -> Vec<&'static RecordSchema> {
    RecordKind::ALL.iter().map(|kind| kind.schema()).collect()
}

/// Validate a row as the given record type
pub fn parse_any(kind: RecordKind, row: &Row, config: &ParseConfig) -> Result<AnyRecord> {
    kind.parse(row, config)
}
