use chrono::NaiveDate;
use rust_decimal::Decimal;
use synthea_schema::config::{KeyPolicy, ParseConfig};
use synthea_schema::registry::{Organization, Supply};
use synthea_schema::{FieldError, FieldValue, RawValue, Record, Row};
use uuid::Uuid;

use crate::utils::{ENCOUNTER_ID, PATIENT_ID, first_row, init_logging, with_value};

fn organization_row() -> anyhow::Result<Row> {
    first_row("organizations")
}

#[test]
fn test_raw_rows_prefer_header_spelling() -> anyhow::Result<()> {
    init_logging();
    let row = organization_row()?.with("city", "Cambridge");

    assert_eq!(Organization::from_row(&row)?.city, "BOSTON");

    let config = ParseConfig::raw_file().with_key_policy(KeyPolicy::PreferCanonical);
    assert_eq!(Organization::parse_row(&row, &config)?.city, "Cambridge");
    Ok(())
}

#[test]
fn test_programmatic_rows_reject_conflicts() -> anyhow::Result<()> {
    let row = organization_row()?.with("city", "Cambridge");
    let err = Organization::from_values(&row).unwrap_err();

    assert_eq!(
        err.field_errors(),
        &[FieldError::ConflictingKeys {
            field: "city",
            alias: "CITY"
        }]
    );
    Ok(())
}

#[test]
fn test_matching_duplicates_are_accepted() -> anyhow::Result<()> {
    let row = organization_row()?.with("city", "BOSTON");
    assert_eq!(Organization::from_values(&row)?.city, "BOSTON");
    Ok(())
}

#[test]
fn test_padded_duplicate_does_not_conflict() -> anyhow::Result<()> {
    let row = organization_row()?.with("city", " BOSTON");
    assert_eq!(Organization::from_values(&row)?.city, "BOSTON");

    let row = organization_row()?.with("utilization", 412);
    assert_eq!(Organization::from_values(&row)?.utilization, 412);
    Ok(())
}

#[test]
fn test_blank_duplicate_does_not_conflict() -> anyhow::Result<()> {
    let row = organization_row()?.with("city", "");
    assert_eq!(Organization::from_values(&row)?.city, "BOSTON");
    Ok(())
}

#[test]
fn test_unknown_columns_are_ignored() -> anyhow::Result<()> {
    let row = organization_row()?;
    let extended = row.clone().with("COUNTRY", "US").with("notes", "");
    assert_eq!(Organization::from_row(&extended)?, Organization::from_row(&row)?);
    Ok(())
}

#[test]
fn test_whitespace_only_is_absent() -> anyhow::Result<()> {
    let organization = Organization::from_row(&with_value(&organization_row()?, "PHONE", "   "))?;
    assert_eq!(organization.phone, None);

    let err = Organization::from_row(&with_value(&organization_row()?, "NAME", " \t ")).unwrap_err();
    assert_eq!(err.field_errors(), &[FieldError::MissingRequiredField { field: "name" }]);
    Ok(())
}

#[test]
fn test_numbers_and_identifiers_are_trimmed() -> anyhow::Result<()> {
    let row = with_value(&organization_row()?, "UTILIZATION", " 412 ");
    let row = with_value(&row, "LAT", "  42.3601");
    let row = with_value(&row, "Id", " ef58ea08-d883-3957-8300-150554edc8fb ");

    assert_eq!(Organization::from_row(&row)?, Organization::from_row(&organization_row()?)?);
    Ok(())
}

#[test]
fn test_scientific_notation_decimal() -> anyhow::Result<()> {
    let organization = Organization::from_row(&with_value(&organization_row()?, "REVENUE", "1.5e3"))?;
    assert_eq!(organization.revenue, Decimal::from(1500));
    Ok(())
}

#[test]
fn test_malformed_identifier() -> anyhow::Result<()> {
    let err = Organization::from_row(&with_value(&organization_row()?, "Id", "not-a-uuid")).unwrap_err();
    assert!(matches!(
        err.field_errors(),
        [FieldError::TypeCoercionFailure { field: "id", value, .. }] if value == "not-a-uuid"
    ));
    Ok(())
}

#[test]
fn test_typed_values() -> anyhow::Result<()> {
    let row = Row::new()
        .with("date", NaiveDate::from_ymd_opt(2020, 2, 1).unwrap())
        .with("patient", PATIENT_ID.parse::<Uuid>()?)
        .with("encounter", ENCOUNTER_ID.parse::<Uuid>()?)
        .with("code", "409534002")
        .with("description", "Disposable air-purifying respirator")
        .with("quantity", Decimal::from(4));

    let supply = Supply::from_values(&row)?;
    assert_eq!(supply.quantity, 4);
    assert_eq!(supply.date, NaiveDate::from_ymd_opt(2020, 2, 1).unwrap());
    Ok(())
}

#[test]
fn test_typed_values_are_not_reparsed() -> anyhow::Result<()> {
    let row = Row::new()
        .with("date", RawValue::Value(FieldValue::Text("2020-02-01".to_string())))
        .with("patient", PATIENT_ID)
        .with("encounter", ENCOUNTER_ID)
        .with("code", "409534002")
        .with("description", "Respirator")
        .with("quantity", Decimal::new(25, 1));

    let err = Supply::from_values(&row).unwrap_err();
    assert!(err.names_field("date"));
    assert!(err.names_field("quantity"));
    Ok(())
}

#[test]
fn test_caller_row_is_untouched() -> anyhow::Result<()> {
    let row = with_value(&organization_row()?, "STATE", "");
    let before = row.clone();
    Organization::from_row(&row)?;
    assert_eq!(row, before);
    Ok(())
}
