use super::*;

#[test]
fn validation_message_keeps_offending_field() {
    let err = CoverflowError::validation("zoom_area must be > 0");
    assert_eq!(err.to_string(), "validation error: zoom_area must be > 0");
}

#[test]
fn serde_errors_carry_parser_detail() {
    let parse = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
    let err = CoverflowError::serde(parse.to_string());
    assert!(matches!(err, CoverflowError::Serde(_)));
    assert!(err.to_string().starts_with("serialization error:"));
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn io_context_survives_conversion() {
    use anyhow::Context as _;

    let res: anyhow::Result<()> = Err(std::io::Error::other("disk gone"))
        .context("read config 'rows.json'");
    let err: CoverflowError = res.unwrap_err().into();
    assert_eq!(err.to_string(), "read config 'rows.json'");
}
