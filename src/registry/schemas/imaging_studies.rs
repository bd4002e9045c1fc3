//! Imaging studies table

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::schema::FieldType;
use crate::{record_schema, token_enum};

token_enum! {
    /// DICOM modality of an imaging series
    pub enum Modality {
        DigitalRadiography => "DX",
        MagneticResonance => "MR",
        ComputedTomography => "CT",
        Ultrasound => "US",
        NuclearMedicine => "NM",
        PositronEmission => "PT",
    }
}

record_schema! {
    /// One image instance of an imaging study
    ///
    /// A study spans several rows, so `id` is not unique within the table.
    pub struct ImagingStudy {
        record: "ImagingStudy",
        table: "imaging_studies",
        fields: {
            id: Uuid { alias: "Id", kind: FieldType::Identifier },
            date: DateTime<Utc> { alias: "DATE", kind: FieldType::Timestamp },
            patient: Uuid { alias: "PATIENT", kind: FieldType::Identifier },
            encounter: Uuid { alias: "ENCOUNTER", kind: FieldType::Identifier },
            /// DICOM series UID
            series_uid: String { alias: "SERIES_UID", kind: FieldType::Text },
            bodysite_code: String { alias: "BODYSITE_CODE", kind: FieldType::Text },
            bodysite_description: String { alias: "BODYSITE_DESCRIPTION", kind: FieldType::Text },
            modality_code: Modality { alias: "MODALITY_CODE", kind: FieldType::Token(Modality::TOKENS) },
            modality_description: String { alias: "MODALITY_DESCRIPTION", kind: FieldType::Text },
            /// DICOM instance UID
            instance_uid: String { alias: "INSTANCE_UID", kind: FieldType::Text },
            sop_code: String { alias: "SOP_CODE", kind: FieldType::Text },
            sop_description: String { alias: "SOP_DESCRIPTION", kind: FieldType::Text },
            procedure_code: String { alias: "PROCEDURE_CODE", kind: FieldType::Text },
        }
    }
}
