//! Reading local dates under each array convention.

use chrono::{Month, NaiveDate};
use serde_datetime::{from_str, Error, ErrorKind, ParseError, TemporalOptions};
use std::error::Error as _;

fn read(json: &str, options: &TemporalOptions) -> serde_datetime::Result<Option<NaiveDate>> {
    from_str::<NaiveDate>(&json.replace('\'', "\""), options)
}

fn expect_success(expected: NaiveDate, json: &str) {
    let value = read(json, &TemporalOptions::default()).unwrap();
    assert_eq!(value, Some(expected), "The value is not correct.");
}

#[test]
fn test_deserialization_as_string() {
    let expected = NaiveDate::from_ymd_opt(2000, Month::January.number_from_month(), 1).unwrap();
    expect_success(expected, "'2000-01-01'");
}

#[test]
fn test_bad_deserialization_as_string() {
    let err = read("'notalocaldate'", &TemporalOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedValue);

    let cause = err
        .source()
        .and_then(|source| source.downcast_ref::<ParseError>())
        .expect("malformed values carry their parse error");
    assert!(matches!(cause, ParseError::Chrono(_)));
}

#[test]
fn test_deserialization_as_array_disabled() {
    let err = read("['2000-01-01']", &TemporalOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedShape);
}

#[test]
fn test_deserialization_as_empty_array_disabled() {
    let err = read("[]", &TemporalOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnexpectedShape { .. }));
}

#[test]
fn test_deserialization_as_array_enabled() {
    let options = TemporalOptions::new().with_unwrap_single_value_arrays(true);
    let value = read("['2000-01-01']", &options).unwrap();
    assert_eq!(value, NaiveDate::from_ymd_opt(2000, 1, 1));
}

#[test]
fn test_deserialization_as_empty_array_enabled() {
    let options = TemporalOptions::new()
        .with_unwrap_single_value_arrays(true)
        .with_accept_empty_array_as_null(true);
    assert_eq!(read("[]", &options).unwrap(), None);
}

#[test]
fn test_empty_array_needs_unwrapping_too() {
    let options = TemporalOptions::new().with_accept_empty_array_as_null(true);
    let err = read("[]", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedShape);
}

#[test]
fn test_unwrapped_value_is_still_validated() {
    let options = TemporalOptions::new().with_unwrap_single_value_arrays(true);
    let err = read("['2000-02-30']", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedValue);
}

#[test]
fn test_null_is_absent() {
    assert_eq!(read("null", &TemporalOptions::default()).unwrap(), None);
    assert_eq!(read("[null]", &TemporalOptions::lenient()).unwrap(), None);
}

#[test]
fn test_epoch_day_number() {
    assert_eq!(
        read("10957", &TemporalOptions::default()).unwrap(),
        NaiveDate::from_ymd_opt(2000, 1, 1)
    );
}
