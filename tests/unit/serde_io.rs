//! JSON representation of both types.

use crate::common::{r, v4, V4};
use labkit::{DynamicArray, Rational, INITIAL_CAPACITY};
use serde_json::json;

#[test]
fn array_serializes_logical_elements_only() {
    let mut v = v4();
    v.reserve(100).unwrap();
    let value = serde_json::to_value(&v).unwrap();
    assert_eq!(value, json!(V4));
}

#[test]
fn array_deserializes_with_growth_capacity() {
    let v: DynamicArray<i32> = serde_json::from_str("[3, 1, 2]").unwrap();
    assert_eq!(v, [3, 1, 2]);
    assert_eq!(v.capacity(), 6);

    let empty: DynamicArray<i32> = serde_json::from_str("[]").unwrap();
    assert_eq!(empty.capacity(), INITIAL_CAPACITY);
}

#[test]
fn rational_serializes_reduced_fields() {
    let value = serde_json::to_value(r(94, -64)).unwrap();
    assert_eq!(value, json!({ "numerator": -47, "denominator": 32 }));
}

#[test]
fn rational_deserialization_normalizes_and_validates() {
    let parsed: Rational = serde_json::from_str(r#"{"numerator": 6, "denominator": -4}"#).unwrap();
    assert_eq!(parsed, r(-3, 2));

    let err = serde_json::from_str::<Rational>(r#"{"numerator": 1, "denominator": 0}"#)
        .unwrap_err()
        .to_string();
    assert!(err.contains("denominator can't be 0"), "{}", err);
}
