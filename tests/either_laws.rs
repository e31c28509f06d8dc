//! Property-based tests for `Either` invariants.

#![cfg(feature = "control")]

use fasaha::control::Either;
use proptest::prelude::*;

fn any_either() -> impl Strategy<Value = Either<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Left),
        ".*".prop_map(Either::Right),
    ]
}

proptest! {
    // Exactly one side is ever occupied.
    #[test]
    fn prop_exactly_one_side(either in any_either()) {
        prop_assert_ne!(either.is_left(), either.is_right());
        let (left, right) = either.into_options();
        prop_assert_ne!(left.is_some(), right.is_some());
    }

    #[test]
    fn prop_create_accepts_what_into_options_returns(either in any_either()) {
        let (left, right) = either.clone().into_options();
        prop_assert_eq!(Either::create(left, right), Ok(either));
    }

    #[test]
    fn prop_swap_is_involutive(either in any_either()) {
        prop_assert_eq!(either.clone().swap().swap(), either);
    }

    #[test]
    fn prop_fold_agrees_with_side(either in any_either()) {
        let is_left = either.is_left();
        prop_assert_eq!(either.fold(|_| true, |_| false), is_left);
    }

    #[test]
    fn prop_bimap_identity(either in any_either()) {
        prop_assert_eq!(either.clone().bimap(|left| left, |right| right), either);
    }

    #[test]
    fn prop_bimap_composition(either in any_either()) {
        let composed = either
            .clone()
            .bimap(|left| i64::from(left) * 2, |right| right.len())
            .bimap(|left| left + 1, |length| length + 1);
        let fused = either.bimap(|left| i64::from(left) * 2 + 1, |right| right.len() + 1);
        prop_assert_eq!(composed, fused);
    }

    #[test]
    fn prop_result_round_trip(either in any_either()) {
        let result: Result<String, i32> = either.clone().into();
        prop_assert_eq!(Either::from(result), either);
    }
}
