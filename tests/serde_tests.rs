#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! `Maybe` must serialize exactly like `Option`, so the two can be swapped
//! in data types without changing the wire format.

use perhaps::maybe::Maybe;
use rstest::rstest;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Settings {
    currency: Maybe<String>,
    limit: Maybe<u32>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct OptionSettings {
    currency: Option<String>,
    limit: Option<u32>,
}

#[rstest]
#[case(Maybe::Present(42), "42")]
#[case(Maybe::Absent, "null")]
fn test_maybe_json_shape(#[case] value: Maybe<i32>, #[case] expected: &str) {
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, expected);
}

#[rstest]
#[case(Maybe::Present(42))]
#[case(Maybe::Absent)]
fn test_maybe_json_roundtrip(#[case] value: Maybe<i32>) {
    let json = serde_json::to_string(&value).unwrap();
    let restored: Maybe<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(value, restored);
}

#[rstest]
fn test_maybe_matches_option_in_struct() {
    let settings = Settings {
        currency: Maybe::unit("CHF".to_string()),
        limit: Maybe::absent(),
    };
    let option_settings = OptionSettings {
        currency: Some("CHF".to_string()),
        limit: None,
    };

    let json = serde_json::to_string(&settings).unwrap();
    assert_eq!(json, serde_json::to_string(&option_settings).unwrap());
    assert_eq!(json, r#"{"currency":"CHF","limit":null}"#);

    let restored: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, settings);
}

#[rstest]
fn test_maybe_rejects_wrong_payload_type() {
    let result: Result<Maybe<u32>, _> = serde_json::from_str(r#""not a number""#);
    assert!(result.is_err());
}
