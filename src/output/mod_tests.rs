use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_rejects_unknown() {
    let err = "sarif".parse::<OutputFormat>().unwrap_err();
    assert_eq!(err, "Unknown output format: sarif");
}

#[test]
fn defaults() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}
