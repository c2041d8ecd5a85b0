// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for exact fraction arithmetic
//!
//! These tests use proptest to validate invariants of the rational core
//! across a wide range of numerators and denominators: arithmetic
//! round-trips, ordering trichotomy, and rounding/truncation consistency.

use num_bigint::BigInt;
use proptest::prelude::*;
use semiomath::{FormatOptions, Fraction, Rounding};

// Helper to generate nonzero denominators
fn arb_nonzero() -> impl Strategy<Value = i64> {
    any::<i64>().prop_filter("denominator must be nonzero", |v| *v != 0)
}

// Helper to generate an arbitrary fraction with a nonzero denominator
fn arb_fraction() -> impl Strategy<Value = Fraction> {
    (any::<i64>(), arb_nonzero()).prop_map(|(n, d)| Fraction::new(n, d))
}

proptest! {
    /// Property: adding then subtracting the same fraction is the identity
    #[test]
    fn prop_add_subtract_round_trip(a in arb_fraction(), b in arb_fraction()) {
        prop_assert!(a.add(&b).subtract(&b).equal_to(&a));
    }

    /// Property: exactly one of `<`, `==`, `>` holds for any two fractions
    #[test]
    fn prop_ordering_trichotomy(a in arb_fraction(), b in arb_fraction()) {
        let holds = [a.less_than(&b), a.equal_to(&b), a.greater_than(&b)];
        prop_assert_eq!(holds.iter().filter(|r| **r).count(), 1);
    }

    /// Property: a nonzero fraction times its reciprocal is one
    #[test]
    fn prop_multiply_by_invert_is_one(
        n in arb_nonzero(),
        d in arb_nonzero(),
    ) {
        let fraction = Fraction::new(n, d);
        prop_assert!(fraction.multiply(&fraction.invert()).equal_to(&Fraction::from_integer(1)));
    }

    /// Property: the truncating quotient/remainder pair rebuilds the numerator
    #[test]
    fn prop_quotient_remainder_exact(n in any::<i64>(), d in arb_nonzero()) {
        let fraction = Fraction::new(n, d);
        let rebuilt = fraction.quotient().unwrap() * BigInt::from(d)
            + fraction.remainder().unwrap().numerator();
        prop_assert_eq!(rebuilt, BigInt::from(n));
    }

    /// Property: formatting is a pure function; identical calls agree
    #[test]
    fn prop_formatting_is_idempotent(
        a in arb_fraction(),
        digits in 1u32..=40,
    ) {
        let plain = FormatOptions::default();
        let first = a.to_significant(digits, &plain, Rounding::RoundHalfUp).unwrap();
        let second = a.to_significant(digits, &plain, Rounding::RoundHalfUp).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: truncating to fewer places is a prefix of truncating to more
    ///
    /// Under RoundDown no digit can influence the ones before it, so the
    /// rendering at `dp` places must be a literal prefix of the rendering at
    /// `dp + extra` places (for non-negative values).
    #[test]
    fn prop_round_down_is_prefix_truncation(
        raw in any::<u128>(),
        dp in 0u32..=6,
        extra in 1u32..=12,
    ) {
        let wei = Fraction::new(
            BigInt::from(raw),
            BigInt::from(10u128.pow(18)),
        );
        let plain = FormatOptions::default();
        let short = wei.to_fixed(dp, &plain, Rounding::RoundDown).unwrap();
        let long = wei.to_fixed(dp + extra, &plain, Rounding::RoundDown).unwrap();
        prop_assert!(
            long.starts_with(&short),
            "{} is not a prefix of {}", short, long,
        );
    }

    /// Property: RoundUp never renders a value below RoundDown
    #[test]
    fn prop_round_up_dominates_round_down(
        raw in any::<u64>(),
        d in 1u64..=1_000_000,
        dp in 0u32..=8,
    ) {
        let fraction = Fraction::new(raw, d);
        let plain = FormatOptions::default();
        let down = fraction.to_fixed(dp, &plain, Rounding::RoundDown).unwrap();
        let up = fraction.to_fixed(dp, &plain, Rounding::RoundUp).unwrap();
        // A longer string means a wider integer part; at equal width the
        // decimal points align and lexicographic order is numeric order
        prop_assert!(up.len() > down.len() || up >= down);
    }
}
