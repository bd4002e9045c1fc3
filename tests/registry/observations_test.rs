use std::str::FromStr;

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use synthea_schema::registry::{Observation, ObservationType, ObservationValue};
use synthea_schema::{FieldValue, Record, Row};

use crate::utils::{ENCOUNTER_ID, PATIENT_ID, init_logging, read_rows};

fn observation_row(kind: &str, value: &str) -> Row {
    Row::new()
        .with("DATE", "2016-06-03T08:12:31Z")
        .with("PATIENT", PATIENT_ID)
        .with("ENCOUNTER", ENCOUNTER_ID)
        .with("CODE", "8310-5")
        .with("DESCRIPTION", "Body temperature")
        .with("VALUE", value)
        .with("TYPE", kind)
}

#[test]
fn test_numeric_value() {
    init_logging();
    let observation = Observation::from_row(&observation_row("numeric", "98.6")).unwrap();
    assert_eq!(observation.r#type, ObservationType::Numeric);
    assert_eq!(
        observation.value,
        Some(ObservationValue::Numeric(Decimal::from_str("98.6").unwrap()))
    );
}

#[test]
fn test_text_value() {
    let observation = Observation::from_row(&observation_row("text", "positive")).unwrap();
    assert_eq!(observation.value, Some(ObservationValue::Text("positive".to_string())));
}

#[test]
fn test_numeric_looking_text_stays_text() {
    let observation = Observation::from_row(&observation_row("text", "7.2")).unwrap();
    assert_eq!(observation.value, Some(ObservationValue::Text("7.2".to_string())));
}

#[test]
fn test_numeric_type_with_verbose_value_falls_back_to_text() {
    let observation = Observation::from_row(&observation_row("numeric", "Not detected")).unwrap();
    assert_eq!(observation.value, Some(ObservationValue::Text("Not detected".to_string())));
}

#[test]
fn test_load_observations_csv() -> anyhow::Result<()> {
    let observations = read_rows("observations")?
        .iter()
        .map(Observation::from_row)
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(observations[0].units.as_deref(), Some("[degF]"));
    assert_eq!(
        observations[1].value,
        Some(ObservationValue::Text("Never smoked tobacco (finding)".to_string()))
    );
    assert_eq!(observations[1].units, None);
    assert_eq!(observations[2].encounter, None);
    assert_eq!(
        observations[2].value.as_ref().and_then(ObservationValue::as_decimal),
        Some(Decimal::from_str("6.3")?)
    );
    Ok(())
}

fn typed_observation_row(kind: &str, value: FieldValue) -> Row {
    Row::new()
        .with("date", Utc.with_ymd_and_hms(2016, 6, 3, 8, 12, 31).unwrap())
        .with("patient", PATIENT_ID)
        .with("code", "8310-5")
        .with("description", "Body temperature")
        .with("value", value)
        .with("type", kind)
}

#[test]
fn test_typed_text_under_numeric_type() {
    let row = typed_observation_row("numeric", FieldValue::Text("98.6".to_string()));
    let observation = Observation::from_values(&row).unwrap();

    assert_eq!(
        observation.value,
        Some(ObservationValue::Numeric(Decimal::from_str("98.6").unwrap()))
    );
    assert_eq!(Observation::from_json(&observation.to_json()).unwrap(), observation);
}

#[test]
fn test_programmatic_round_trip() {
    let cases = [
        ("numeric", FieldValue::Decimal(Decimal::from_str("6.30").unwrap())),
        ("numeric", FieldValue::Integer(120)),
        ("numeric", FieldValue::Text("Not detected".to_string())),
        ("text", FieldValue::Text("7.2".to_string())),
        ("text", FieldValue::Decimal(Decimal::from_str("7.2").unwrap())),
        ("text", FieldValue::Text("positive".to_string())),
    ];

    for (kind, value) in cases {
        let observation = Observation::from_values(&typed_observation_row(kind, value)).unwrap();
        assert_eq!(
            Observation::from_json(&observation.to_json()).unwrap(),
            observation,
            "{kind}"
        );
        assert_eq!(Observation::from_values(&observation.to_row()).unwrap(), observation);
    }
}

#[test]
fn test_whitespace_value_is_absent_for_both_types() {
    for kind in ["numeric", "text"] {
        let observation = Observation::from_row(&observation_row(kind, "   ")).unwrap();
        assert_eq!(observation.value, None, "{kind}");

        for blank in ["", "  "] {
            let row = typed_observation_row(kind, FieldValue::Text(blank.to_string()));
            assert_eq!(Observation::from_values(&row).unwrap().value, None, "{kind}");
        }
    }
}
