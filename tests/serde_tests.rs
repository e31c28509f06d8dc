#![cfg(feature = "serde")]

//! Integration tests for serde support in fasaha.
//!
//! These tests verify that `Either` and `Comparison` serialize and
//! deserialize with serde formats.

use fasaha::control::{Comparison, Either};
use rstest::rstest;

// =============================================================================
// Either Integration Tests
// =============================================================================

#[rstest]
fn test_either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    let restored_left: Either<String, i32> = serde_json::from_str(&left_json).unwrap();
    let restored_right: Either<String, i32> = serde_json::from_str(&right_json).unwrap();

    assert_eq!(left, restored_left);
    assert_eq!(right, restored_right);
}

#[rstest]
fn test_either_json_is_externally_tagged() {
    let right: Either<String, i32> = Either::Right(42);
    assert_eq!(serde_json::to_string(&right).unwrap(), r#"{"Right":42}"#);
}

#[rstest]
fn test_either_rejects_unknown_side() {
    let result = serde_json::from_str::<Either<String, i32>>(r#"{"Middle":1}"#);
    assert!(result.is_err());
}

// =============================================================================
// Comparison Integration Tests
// =============================================================================

#[rstest]
#[case(Comparison::Lesser, "\"Lesser\"")]
#[case(Comparison::Equal, "\"Equal\"")]
#[case(Comparison::Greater, "\"Greater\"")]
fn test_comparison_json_roundtrip(#[case] comparison: Comparison, #[case] json: &str) {
    assert_eq!(serde_json::to_string(&comparison).unwrap(), json);
    assert_eq!(serde_json::from_str::<Comparison>(json).unwrap(), comparison);
}
