use std::str::FromStr;

use chrono::NaiveDate;
use synthea_schema::registry::{Allergy, AllergyCategory, AllergyType, Severity};
use synthea_schema::{FieldError, Record, Row};
use uuid::Uuid;

use crate::utils::{ENCOUNTER_ID, PATIENT_ID, init_logging, read_rows};

fn latex_allergy_row() -> Row {
    Row::new()
        .with("START", "2020-02-17")
        .with("PATIENT", PATIENT_ID)
        .with("ENCOUNTER", ENCOUNTER_ID)
        .with("CODE", "111088007")
        .with("SYSTEM", "Unknown")
        .with("DESCRIPTION", "Latex (substance)")
        .with("TYPE", "allergy")
        .with("CATEGORY", "environment")
        .with("REACTION1", "247472004")
        .with("SEVERITY1", "MILD")
        .with("REACTION2", "")
        .with("DESCRIPTION2", "")
        .with("SEVERITY2", "")
}

#[test]
fn test_latex_allergy_scenario() {
    init_logging();
    let allergy = Allergy::from_row(&latex_allergy_row()).unwrap();

    assert_eq!(allergy.start, NaiveDate::from_ymd_opt(2020, 2, 17).unwrap());
    assert_eq!(allergy.stop, None);
    assert_eq!(allergy.patient, Uuid::from_str(PATIENT_ID).unwrap());
    assert_eq!(allergy.encounter, Uuid::from_str(ENCOUNTER_ID).unwrap());
    assert_eq!(allergy.code, "111088007");
    assert_eq!(allergy.system, "Unknown");
    assert_eq!(allergy.description, "Latex (substance)");
    assert_eq!(allergy.r#type, Some(AllergyType::Allergy));
    assert_eq!(allergy.category, Some(AllergyCategory::Environment));
    assert_eq!(allergy.reaction1.as_deref(), Some("247472004"));
    assert_eq!(allergy.severity1, Some(Severity::Mild));
    assert_eq!(allergy.reaction2, None);
    assert_eq!(allergy.description2, None);
    assert_eq!(allergy.severity2, None);
}

#[test]
fn test_load_allergies_csv() -> anyhow::Result<()> {
    init_logging();
    let allergies = read_rows("allergies")?
        .iter()
        .map(Allergy::from_row)
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(allergies.len(), 3);
    assert_eq!(allergies[1].severity1, Some(Severity::Moderate));
    assert_eq!(allergies[1].stop, NaiveDate::from_ymd_opt(2021, 1, 10));
    assert_eq!(allergies[2].r#type, Some(AllergyType::Intolerance));
    assert_eq!(allergies[2].category, Some(AllergyCategory::Medication));
    Ok(())
}

#[test]
fn test_severity_outside_legal_set() {
    let row = latex_allergy_row().with("SEVERITY1", "mild");
    let err = Allergy::from_row(&row).unwrap_err();

    assert_eq!(
        err.field_errors(),
        &[FieldError::EnumerationConstraintViolation {
            field: "severity1",
            value: "mild".to_string(),
            allowed: vec!["MILD".to_string(), "MODERATE".to_string(), "SEVERE".to_string()],
        }]
    );
}

#[test]
fn test_allergy_required_fields() {
    assert_eq!(
        Allergy::required_fields(),
        vec!["start", "patient", "encounter", "code", "system", "description"]
    );
}
