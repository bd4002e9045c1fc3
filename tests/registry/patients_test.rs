use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use synthea_schema::registry::{Gender, MaritalStatus, Patient};
use synthea_schema::{FieldError, Record, RecordError};

use crate::utils::{first_row, init_logging, read_rows, with_value, without};

#[test]
fn test_load_patients_csv() -> anyhow::Result<()> {
    init_logging();
    let patients = read_rows("patients")?
        .iter()
        .map(Patient::from_row)
        .collect::<Result<Vec<_>, _>>()?;

    let first = &patients[0];
    assert_eq!(first.birthdate, NaiveDate::from_ymd_opt(1989, 5, 25).unwrap());
    assert_eq!(first.deathdate, None);
    assert_eq!(first.first, "José Eduardo181");
    assert_eq!(first.middle, None);
    assert_eq!(first.gender, Gender::Male);
    assert_eq!(first.marital, Some(MaritalStatus::Married));
    assert_eq!(first.zip.as_deref(), Some("01013"));
    assert_eq!(first.lat, Some(Decimal::from_str("42.22835382315942")?));
    assert_eq!(first.income, Some(Decimal::from(76325)));

    let second = &patients[1];
    assert_eq!(second.deathdate, NaiveDate::from_ymd_opt(2019, 12, 1));
    assert_eq!(second.drivers, None);
    assert_eq!(second.fips, None);
    assert_eq!(second.lat, None);
    assert_eq!(second.income, None);
    assert_eq!(second.healthcare_expenses, Decimal::from_str("1142669.75")?);
    Ok(())
}

#[test]
fn test_gender_outside_legal_set() -> anyhow::Result<()> {
    let row = with_value(&first_row("patients")?, "GENDER", "X");
    let err = Patient::from_row(&row).unwrap_err();

    assert!(matches!(
        err.field_errors(),
        [FieldError::EnumerationConstraintViolation { field: "gender", value, .. }] if value == "X"
    ));
    Ok(())
}

#[test]
fn test_missing_ssn_and_bad_birthdate_reported_together() -> anyhow::Result<()> {
    let row = with_value(&without(&first_row("patients")?, "SSN"), "BIRTHDATE", "05/25/1989");
    let err = Patient::from_row(&row).unwrap_err();

    assert!(matches!(err, RecordError::RecordAssemblyFailure { record: "Patient", .. }));
    assert!(err.names_field("ssn"));
    assert!(err.names_field("birthdate"));
    assert_eq!(err.field_errors().len(), 2);
    Ok(())
}

#[test]
fn test_middle_name_only_by_canonical_key() -> anyhow::Result<()> {
    let row = first_row("patients")?;

    let with_header = Patient::from_row(&with_value(&row, "MIDDLE", "Luis"))?;
    assert_eq!(with_header.middle, None);

    let with_name = Patient::from_row(&with_value(&row, "middle", "Luis"))?;
    assert_eq!(with_name.middle.as_deref(), Some("Luis"));
    Ok(())
}
