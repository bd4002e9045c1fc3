use serde::Serialize;
use serde::de::DeserializeOwned;
use synthea_schema::registry::{
    Allergy, CarePlan, Claim, ClaimTransaction, Condition, Device, Encounter, ImagingStudy,
    Immunization, Medication, Observation, Organization, Patient, Payer, PayerTransition,
    Procedure, Provider, Supply,
};
use synthea_schema::{FieldValue, Record, RecordError};

use crate::utils::{first_row, init_logging, read_rows};

fn assert_round_trip<R>(table: &str) -> anyhow::Result<()>
where
    R: Record + Serialize + DeserializeOwned,
{
    for row in read_rows(table)? {
        let record = R::from_row(&row)?;

        let text = record.to_json();
        assert_eq!(R::from_json(&text)?, record, "{table}: {text}");

        let serialized = serde_json::to_string(&record)?;
        assert_eq!(serialized, text);
        assert_eq!(serde_json::from_str::<R>(&serialized)?, record);

        assert_eq!(R::from_values(&record.to_row())?, record);
    }
    Ok(())
}

#[test]
fn test_round_trip_every_record_type() -> anyhow::Result<()> {
    init_logging();
    assert_round_trip::<Allergy>("allergies")?;
    assert_round_trip::<CarePlan>("careplans")?;
    assert_round_trip::<Claim>("claims")?;
    assert_round_trip::<ClaimTransaction>("claims_transactions")?;
    assert_round_trip::<Condition>("conditions")?;
    assert_round_trip::<Device>("devices")?;
    assert_round_trip::<Encounter>("encounters")?;
    assert_round_trip::<ImagingStudy>("imaging_studies")?;
    assert_round_trip::<Immunization>("immunizations")?;
    assert_round_trip::<Medication>("medications")?;
    assert_round_trip::<Observation>("observations")?;
    assert_round_trip::<Organization>("organizations")?;
    assert_round_trip::<Patient>("patients")?;
    assert_round_trip::<PayerTransition>("payer_transitions")?;
    assert_round_trip::<Payer>("payers")?;
    assert_round_trip::<Procedure>("procedures")?;
    assert_round_trip::<Provider>("providers")?;
    assert_round_trip::<Supply>("supplies")?;
    Ok(())
}

#[test]
fn test_json_layout() -> anyhow::Result<()> {
    let supply = Supply::from_row(&first_row("supplies")?)?;
    let value: serde_json::Value = serde_json::from_str(&supply.to_json())?;

    assert_eq!(value["date"], "2019-11-12");
    assert_eq!(value["patient"], "034e9e3b-2def-4559-bb2a-7850888ae060");
    assert_eq!(value["quantity"], 50);

    let encounter = Encounter::from_row(&first_row("encounters")?)?;
    let value = encounter.to_json_value();
    assert_eq!(value["start"], "2016-06-03T08:12:31Z");
    assert_eq!(value["base_encounter_cost"], "142.58");
    assert_eq!(value["encounterclass"], "ambulatory");
    Ok(())
}

#[test]
fn test_absent_fields_are_null() -> anyhow::Result<()> {
    let allergy = Allergy::from_row(&first_row("allergies")?)?;
    let value = allergy.to_json_value();

    assert!(value["stop"].is_null());
    assert!(value["severity2"].is_null());
    assert_eq!(value["severity1"], "MILD");
    assert_eq!(value["type"], "allergy");
    Ok(())
}

#[test]
fn test_values_dump() -> anyhow::Result<()> {
    let organization = Organization::from_row(&read_rows("organizations")?[1])?;
    let values = organization.to_values();

    assert_eq!(values["name"], Some(FieldValue::Text("SOUTH SHORE HOSPITAL".to_string())));
    assert_eq!(values["utilization"], Some(FieldValue::Integer(88)));
    assert_eq!(values["state"], None);
    assert_eq!(values.len(), 11);
    Ok(())
}

#[test]
fn test_interchange_is_validated() -> anyhow::Result<()> {
    let supply = Supply::from_row(&first_row("supplies")?)?;
    let mut value = supply.to_json_value();
    value["quantity"] = serde_json::json!("fifty");

    let err = Supply::from_json_value(&value).unwrap_err();
    assert!(err.names_field("quantity"));
    assert!(serde_json::from_value::<Supply>(value).is_err());
    Ok(())
}

#[test]
fn test_malformed_interchange_text() {
    assert!(matches!(
        Supply::from_json("{not json"),
        Err(RecordError::Interchange { record: "Supply", .. })
    ));
    assert!(matches!(
        Supply::from_json("[1, 2]"),
        Err(RecordError::Interchange { record: "Supply", .. })
    ));
}

#[test]
fn test_interchange_accepts_integral_numbers_for_decimals() -> anyhow::Result<()> {
    let mut value = Immunization::from_row(&first_row("immunizations")?)?.to_json_value();
    value["base_cost"] = serde_json::json!(140);

    let immunization = Immunization::from_json_value(&value)?;
    assert_eq!(immunization.base_cost, rust_decimal::Decimal::from(140));
    Ok(())
}
