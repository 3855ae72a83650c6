//! Property-based tests for checks

use proptest::prelude::*;
use requires::prelude::*;
use requires::Bound;
use std::cell::Cell;

proptest! {
    #[test]
    fn prop_min_chain_is_idempotent(value in any::<i64>(), bound in any::<i64>()) {
        if let Ok(checked) = min(value, bound) {
            let again = checked.and_min(bound).unwrap();
            prop_assert_eq!(*again, value);
        }
    }

    #[test]
    fn prop_in_range_chain_is_idempotent(value in -1000i32..1000, lo in -500i32..0, hi in 0i32..500) {
        if let Ok(checked) = in_range(value, lo, hi) {
            prop_assert_eq!(checked.and_in_range(lo, hi).unwrap().into_inner(), value);
        }
    }

    #[test]
    fn prop_whitespace_chain_is_idempotent(s in "\\PC*") {
        if let Ok(checked) = not_null_or_whitespace(s.clone()) {
            prop_assert_eq!(checked.and_not_null_or_whitespace().unwrap().into_inner(), s);
        }
    }

    #[test]
    fn prop_in_range_matches_bounds(value in any::<i32>(), a in any::<i32>(), b in any::<i32>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert_eq!(in_range(value, lo, hi).is_ok(), lo <= value && value <= hi);
    }

    #[test]
    fn prop_in_range_checks_max_before_min(a in any::<i16>(), b in any::<i16>(), c in any::<i16>()) {
        // inverted range with the value strictly between: above max and below min
        let mut sorted = [a, b, c];
        sorted.sort_unstable();
        let [hi, value, lo] = sorted;
        prop_assume!(hi < value && value < lo);
        let err = in_range(value, lo, hi).unwrap_err();
        let is_max = matches!(err, RequireError::OutOfRange { bound: Bound::Max(_), .. });
        prop_assert!(is_max);
    }

    #[test]
    fn prop_unwrap_round_trips(value in any::<u64>()) {
        prop_assert_eq!(min(value, 0).unwrap().into_inner(), value);
        prop_assert_eq!(*not_null(Some(value)).unwrap(), value);
    }

    #[test]
    fn prop_not_null_or_empty_holds_materialized_items(items in prop::collection::vec(any::<u8>(), 1..50)) {
        let pulls = Cell::new(0usize);
        let source = items.clone().into_iter().inspect(|_| pulls.set(pulls.get() + 1));

        let checked = not_null_or_empty(Some(source)).unwrap();

        prop_assert_eq!(pulls.get(), items.len());
        prop_assert_eq!(checked.into_inner(), items);
    }

    #[test]
    fn prop_no_duplicates_matches_distinct_count(items in prop::collection::vec(0u8..16, 0..20)) {
        let mut sorted = items.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(no_duplicates(items.clone()).is_ok(), sorted.len() == items.len());
    }

    #[test]
    fn prop_is_in_is_total(allowed in prop::collection::vec(".{0,4}", 0..10), value in ".{0,4}") {
        let expected = allowed.iter().any(|a| *a == value);
        // owned copies so equality is by content, never by address
        let probe = value.clone();
        prop_assert_eq!(is_in(&allowed, probe).is_ok(), expected);
    }

    #[test]
    fn prop_string_length_bounds_count_chars(s in "\\PC{0,20}", bound in 0usize..25) {
        let chars = s.chars().count();
        prop_assert_eq!(min(s.as_str(), bound).is_ok(), chars >= bound);
        prop_assert_eq!(max(s.as_str(), bound).is_ok(), chars <= bound);
    }
}
