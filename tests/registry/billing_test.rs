use std::str::FromStr;

use rust_decimal::Decimal;
use synthea_schema::registry::{
    Claim, ClaimStatus, ClaimTransaction, Payer, PaymentMethod, TransactionType, TransferType,
};
use synthea_schema::{FieldError, Record};

use crate::utils::{first_row, init_logging, read_rows, with_value};

#[test]
fn test_load_claims_csv() -> anyhow::Result<()> {
    init_logging();
    let claims = read_rows("claims")?
        .iter()
        .map(Claim::from_row)
        .collect::<Result<Vec<_>, _>>()?;

    let first = &claims[0];
    assert_eq!(first.departmentid, 3);
    assert_eq!(first.diagnosis1.as_deref(), Some("10509002"));
    assert_eq!(first.diagnosis2, None);
    assert_eq!(first.secondarypatientinsuranceid, None);
    assert_eq!(first.status1, Some(ClaimStatus::Closed));
    assert_eq!(first.status2, None);
    assert_eq!(first.healthcareclaimtypeid1, Some(1));
    assert_eq!(first.healthcareclaimtypeid2, None);

    let second = &claims[1];
    assert_eq!(second.outstanding2, Some(Decimal::from_str("12.00")?));
    assert_eq!(second.healthcareclaimtypeid1, Some(2));
    Ok(())
}

#[test]
fn test_claim_type_outside_legal_codes() -> anyhow::Result<()> {
    let row = with_value(&first_row("claims")?, "HEALTHCARECLAIMTYPEID1", "3");
    let err = Claim::from_row(&row).unwrap_err();
    assert!(matches!(
        err.field_errors(),
        [FieldError::EnumerationConstraintViolation { field: "healthcareclaimtypeid1", .. }]
    ));
    Ok(())
}

#[test]
fn test_load_claims_transactions_csv() -> anyhow::Result<()> {
    let transactions = read_rows("claims_transactions")?
        .iter()
        .map(ClaimTransaction::from_row)
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(transactions[0].r#type, TransactionType::Charge);
    assert_eq!(transactions[0].amount, Some(Decimal::from_str("142.58")?));
    assert_eq!(transactions[0].diagnosisref1, Some(1));
    assert_eq!(transactions[0].feescheduleid, Some(1));
    assert_eq!(transactions[1].method, Some(PaymentMethod::Copay));
    assert_eq!(transactions[1].payments, Some(Decimal::from_str("20.00")?));
    assert_eq!(transactions[2].transfertype, Some(TransferType::Patient));
    assert_eq!(transactions[2].outstanding, Some(Decimal::ZERO));
    Ok(())
}

#[test]
fn test_claim_transaction_id_header() -> anyhow::Result<()> {
    let row = first_row("claims_transactions")?;
    assert!(row.contains_key("ID"));

    let schema = ClaimTransaction::schema();
    assert_eq!(schema.field("ID").map(|field| field.name), Some("id"));
    assert!(schema.field("Id").is_none());
    Ok(())
}

#[test]
fn test_diagnosis_reference_outside_range() -> anyhow::Result<()> {
    let row = with_value(&first_row("claims_transactions")?, "DIAGNOSISREF2", "9");
    let err = ClaimTransaction::from_row(&row).unwrap_err();
    assert!(err.names_field("diagnosisref2"));
    Ok(())
}

#[test]
fn test_load_payers_csv() -> anyhow::Result<()> {
    let payers = read_rows("payers")?
        .iter()
        .map(Payer::from_row)
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(payers[0].ownership.as_deref(), Some("GOVERNMENT"));
    assert_eq!(payers[0].qols_avg, Decimal::from_str("0.7669393019262405")?);
    assert_eq!(payers[0].member_months, 39576);
    assert_eq!(payers[1].address, None);
    assert_eq!(payers[1].unique_customers, 2307);
    Ok(())
}
