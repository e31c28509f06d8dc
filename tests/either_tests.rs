//! Unit tests for the `Either<L, R>` type.
//!
//! An `Either` holds exactly one of two values:
//! - `Left(L)`: Conventionally the alternative or failure
//! - `Right(R)`: Conventionally the main or success value

#![cfg(feature = "control")]

use fasaha::control::Either;
use fasaha::error::{InvalidArgumentError, Side, UnsupportedOperationError};
use rstest::rstest;
use std::cell::RefCell;
use std::collections::HashSet;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn create_right_is_right() {
    let either: Either<&str, i32> = Either::create_right(5);
    assert!(either.is_right());
    assert!(!either.is_left());
    assert_eq!(either.get_right(), Ok(&5));
}

#[rstest]
fn create_right_rejects_left_access() {
    let either: Either<&str, i32> = Either::create_right(5);
    let error = either.get_left().expect_err("right has no left value");
    assert_eq!(
        error,
        UnsupportedOperationError {
            operation: "Either::get_left",
            side: Side::Right,
        }
    );
    assert_eq!(
        error.to_string(),
        "called `Either::get_left()` on a `Right` value"
    );
}

#[rstest]
#[case(Some(1), None, Ok(Either::Left(1)))]
#[case(None, Some("one"), Ok(Either::Right("one")))]
#[case(None, None, Err(InvalidArgumentError::BothAbsent))]
#[case(Some(1), Some("one"), Err(InvalidArgumentError::BothPresent))]
fn create_requires_exactly_one_side(
    #[case] left: Option<i32>,
    #[case] right: Option<&str>,
    #[case] expected: Result<Either<i32, &str>, InvalidArgumentError>,
) {
    assert_eq!(Either::create(left, right), expected);
}

#[rstest]
fn both_present_message_names_the_values() {
    let error = Either::create(Some(1), Some(2)).expect_err("both sides present");
    assert_eq!(error.to_string(), "Both arguments were present: 1 2");
}

// =============================================================================
// Elimination
// =============================================================================

#[rstest]
#[case(Either::Left("four".to_string()), 4)]
#[case(Either::Right(7), 7)]
fn fold_invokes_exactly_one_branch(#[case] either: Either<String, usize>, #[case] expected: usize) {
    let calls = RefCell::new(Vec::new());
    let folded = either.fold(
        |text| {
            calls.borrow_mut().push("left");
            text.len()
        },
        |number| {
            calls.borrow_mut().push("right");
            number
        },
    );
    assert_eq!(folded, expected);
    assert_eq!(calls.borrow().len(), 1);
}

#[rstest]
fn accept_invokes_the_occupied_side_only() {
    let seen = RefCell::new(Vec::new());
    let either: Either<i32, i32> = Either::create_left(3);
    either.accept(
        |left| seen.borrow_mut().push(format!("left {left}")),
        |right| seen.borrow_mut().push(format!("right {right}")),
    );
    either.if_left(|left| seen.borrow_mut().push(format!("if_left {left}")));
    either.if_right(|right| seen.borrow_mut().push(format!("if_right {right}")));

    assert_eq!(*seen.borrow(), vec!["left 3", "if_left 3"]);
}

#[rstest]
fn accept_both_invokes_both_with_defaults_for_the_empty_side() {
    let seen = RefCell::new(Vec::new());
    let either: Either<String, i32> = Either::create_right(9);
    either.accept_both(
        |left| seen.borrow_mut().push(format!("left {left}")),
        |right| seen.borrow_mut().push(format!("right {right}")),
        &"fallback".to_string(),
        &0,
    );
    assert_eq!(*seen.borrow(), vec!["left fallback", "right 9"]);
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_left_leaves_right_untouched() {
    let either: Either<i32, &str> = Either::Right("keep");
    assert_eq!(either.map_left(|value| value * 2), Either::Right("keep"));
}

#[rstest]
fn bimap_and_swap() {
    let either: Either<i32, &str> = Either::Left(2);
    let mapped = either.bimap(|value| value + 1, str::len);
    assert_eq!(mapped, Either::Left(3));
    assert_eq!(mapped.swap(), Either::<usize, i32>::Right(3));
}

#[rstest]
fn views_and_defaults() {
    let either: Either<String, u8> = Either::Left("x".to_string());
    assert_eq!(either.left_ref(), Some(&"x".to_string()));
    assert_eq!(either.right_ref(), None);
    assert_eq!(either.as_ref(), Either::Left(&"x".to_string()));
    assert_eq!(either.clone().into_options(), (Some("x".to_string()), None));
    assert_eq!(either.clone().right_or_default(), 0);
    assert_eq!(either.left_or_default(), "x");
}

#[rstest]
#[should_panic(expected = "called `Either::unwrap_right()` on a `Left` value")]
fn unwrap_on_the_wrong_side_panics() {
    let either: Either<i32, i32> = Either::Left(1);
    let _ = either.unwrap_right();
}

// =============================================================================
// Equality, Hashing and Display
// =============================================================================

#[rstest]
fn equality_is_side_aware() {
    let left: Either<i32, i32> = Either::Left(1);
    let right: Either<i32, i32> = Either::Right(1);
    assert_ne!(left, right);

    let distinct: HashSet<_> = [left, right, Either::Left(1)].into_iter().collect();
    assert_eq!(distinct.len(), 2);
}

#[rstest]
#[case(Either::Left(1), "Left[1]")]
#[case(Either::Right("one"), "Right[one]")]
fn display_names_the_side(#[case] either: Either<i32, &str>, #[case] expected: &str) {
    assert_eq!(either.to_string(), expected);
}

// =============================================================================
// Result Interop
// =============================================================================

#[rstest]
fn converts_to_and_from_result() {
    let ok: Result<i32, String> = Ok(5);
    let either: Either<String, i32> = ok.into();
    assert_eq!(either, Either::Right(5));

    let back: Result<i32, String> = Either::<String, i32>::Left("no".to_string()).into();
    assert_eq!(back, Err("no".to_string()));
}
