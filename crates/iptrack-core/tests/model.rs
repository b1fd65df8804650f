#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use iptrack_core::model::LogEntry;

#[test]
fn decodes_full_entry() {
    let entry: LogEntry = serde_json::from_str(
        r#"{"timestamp":"2024-01-01T00:00:00Z","ip":"203.0.113.5","url":"/x"}"#,
    )
    .unwrap();
    assert_eq!(entry.ip, "203.0.113.5");
    assert_eq!(entry.timestamp, "2024-01-01T00:00:00Z");
    assert_eq!(entry.url, "/x");
}

#[test]
fn missing_fields_default_to_empty() {
    let entry: LogEntry = serde_json::from_str(r#"{"url":"/y"}"#).unwrap();
    assert_eq!(entry.ip, "");
    assert_eq!(entry.timestamp, "");
}

#[test]
fn unknown_fields_are_ignored() {
    let entry: LogEntry =
        serde_json::from_str(r#"{"ip":"1.2.3.4","extra":42}"#).unwrap();
    assert_eq!(entry.ip, "1.2.3.4");
}

#[test]
fn malformed_body_fails() {
    assert!(serde_json::from_str::<LogEntry>("not json at all").is_err());
}
