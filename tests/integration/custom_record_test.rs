use synthea_schema::{FieldType, Record, Row};

synthea_schema::record_schema! {
    /// A meter reading taken at a site
    pub struct Reading {
        record: "Reading",
        table: "readings",
        fields: {
            /// Site identifier
            site: String { alias: "SITE", kind: FieldType::Text },
            level: Option<i64> { alias: "LEVEL", kind: FieldType::Integer },
        }
    }
}

#[test]
fn test_record_defined_outside_the_library() -> anyhow::Result<()> {
    let reading = Reading::from_row(&Row::new().with("SITE", " North ").with("LEVEL", "7"))?;
    assert_eq!(reading.site, "North");
    assert_eq!(reading.level, Some(7));
    assert_eq!(Reading::required_fields(), vec!["site"]);
    assert_eq!(Reading::schema().fields[0].description, " Site identifier");

    let text = serde_json::to_string(&reading)?;
    assert_eq!(text, r#"{"level":7,"site":"North"}"#);
    assert_eq!(serde_json::from_str::<Reading>(&text)?, reading);
    Ok(())
}
