// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact decimal rounding engine
//!
//! Everything here is integer long division: the value is scaled to the
//! requested digit boundary, split into quotient and remainder, and the
//! rounding rule is applied against the true remainder. No step goes
//! through floating point, so results are identical at any precision.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Pow, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::FractionError;

/// How to resolve digits beyond the requested precision.
///
/// The rules are symmetric around zero: they act on the magnitude, with the
/// sign reapplied afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rounding {
    /// Truncate toward zero.
    #[default]
    RoundDown,
    /// Round half away from zero.
    RoundHalfUp,
    /// Round away from zero on any remainder.
    RoundUp,
}

/// Applies the rounding rule to a truncated quotient.
///
/// `value = quotient + remainder / divisor`, with `0 <= remainder < divisor`.
fn round_quotient(
    quotient: BigUint,
    remainder: &BigUint,
    divisor: &BigUint,
    rounding: Rounding,
) -> BigUint {
    if remainder.is_zero() {
        return quotient;
    }
    let bump = match rounding {
        Rounding::RoundDown => false,
        Rounding::RoundHalfUp => (remainder + remainder) >= *divisor,
        Rounding::RoundUp => true,
    };
    if bump {
        quotient + BigUint::one()
    } else {
        quotient
    }
}

fn pow10(exponent: u32) -> BigUint {
    Pow::pow(BigUint::from(10u8), exponent)
}

fn is_negative(numerator: &BigInt, denominator: &BigInt) -> bool {
    numerator.sign() * denominator.sign() == Sign::Minus
}

/// `numerator / denominator` scaled to `decimal_places` and rounded.
///
/// Returns the sign and the magnitude of the value times
/// `10^decimal_places`; rendering places the decimal point back.
pub(crate) fn fixed_digits(
    numerator: &BigInt,
    denominator: &BigInt,
    decimal_places: u32,
    rounding: Rounding,
) -> Result<(bool, BigUint), FractionError> {
    if denominator.is_zero() {
        return Err(FractionError::DivisionByZero);
    }
    let scaled = numerator.magnitude() * pow10(decimal_places);
    let (quotient, remainder) = scaled.div_rem(denominator.magnitude());
    let rounded = round_quotient(quotient, &remainder, denominator.magnitude(), rounding);
    let negative = is_negative(numerator, denominator) && !rounded.is_zero();
    Ok((negative, rounded))
}

/// `numerator / denominator` rounded to `significant` significant digits.
///
/// Returns the sign, the rounded magnitude scaled by `10^decimal_places`,
/// and that `decimal_places` count. For values whose leading digit sits at
/// or above `10^significant` the returned scale is zero and the magnitude
/// already ends in the appropriate zeros.
pub(crate) fn significant_digits(
    numerator: &BigInt,
    denominator: &BigInt,
    significant: u32,
    rounding: Rounding,
) -> Result<(bool, BigUint, u32), FractionError> {
    if denominator.is_zero() {
        return Err(FractionError::DivisionByZero);
    }
    if numerator.is_zero() {
        return Ok((false, BigUint::zero(), 0));
    }

    let exponent = leading_exponent(numerator.magnitude(), denominator.magnitude());
    let places = i64::from(significant) - 1 - exponent;
    if places >= 0 {
        let places = places as u32;
        let (negative, rounded) = fixed_digits(numerator, denominator, places, rounding)?;
        Ok((negative, rounded, places))
    } else {
        // The rounding boundary lies above the decimal point: divide out
        // 10^magnitude along with the denominator, then restore the zeros.
        let magnitude = (-places) as u32;
        let unit = denominator.magnitude() * pow10(magnitude);
        let (quotient, remainder) = numerator.magnitude().div_rem(&unit);
        let rounded = round_quotient(quotient, &remainder, &unit, rounding) * pow10(magnitude);
        let negative = is_negative(numerator, denominator) && !rounded.is_zero();
        Ok((negative, rounded, 0))
    }
}

/// Position of the first significant digit of `numerator / denominator`.
///
/// Returns `e` such that `10^e <= |n/d| < 10^(e+1)`. Both inputs must be
/// nonzero.
fn leading_exponent(numerator: &BigUint, denominator: &BigUint) -> i64 {
    debug_assert!(!numerator.is_zero() && !denominator.is_zero());
    if numerator >= denominator {
        let quotient = numerator / denominator;
        quotient.to_str_radix(10).len() as i64 - 1
    } else {
        let shift =
            (denominator.to_str_radix(10).len() - numerator.to_str_radix(10).len()) as u32;
        let shifted = numerator * pow10(shift);
        let leading_zeros = if shifted >= *denominator {
            shift
        } else {
            shift + 1
        };
        -i64::from(leading_zeros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_leading_exponent_at_and_above_one() {
        // 1 <= v < 10
        assert_eq!(leading_exponent(&3u8.into(), &2u8.into()), 0);
        // 123456 / 1
        assert_eq!(leading_exponent(&123_456u32.into(), &1u8.into()), 5);
        // 999 / 10 = 99.9
        assert_eq!(leading_exponent(&999u16.into(), &10u8.into()), 1);
    }

    #[test]
    fn test_leading_exponent_below_one() {
        // 1/3 = 0.333...
        assert_eq!(leading_exponent(&1u8.into(), &3u8.into()), -1);
        // 1/800 = 0.00125
        assert_eq!(leading_exponent(&1u8.into(), &800u16.into()), -3);
        // 99/100 = 0.99
        assert_eq!(leading_exponent(&99u8.into(), &100u8.into()), -1);
        // 100/999 = 0.1001...
        assert_eq!(leading_exponent(&100u8.into(), &999u16.into()), -1);
        // 1/10 exactly
        assert_eq!(leading_exponent(&1u8.into(), &10u8.into()), -1);
        // 1/100 exactly
        assert_eq!(leading_exponent(&1u8.into(), &100u8.into()), -2);
    }

    #[test]
    fn test_fixed_digits_rounding_modes() {
        // 2/3 at two places: 0.66|66...
        let cases = [
            (Rounding::RoundDown, 66u32),
            (Rounding::RoundHalfUp, 67),
            (Rounding::RoundUp, 67),
        ];
        for (rounding, expected) in cases {
            let (negative, rounded) = fixed_digits(&big(2), &big(3), 2, rounding).unwrap();
            assert!(!negative);
            assert_eq!(rounded, BigUint::from(expected));
        }
    }

    #[test]
    fn test_fixed_digits_half_boundary() {
        // 1/8 = 0.125: the third digit is exactly half at two places
        let (_, down) = fixed_digits(&big(1), &big(8), 2, Rounding::RoundDown).unwrap();
        let (_, half) = fixed_digits(&big(1), &big(8), 2, Rounding::RoundHalfUp).unwrap();
        assert_eq!(down, BigUint::from(12u8));
        assert_eq!(half, BigUint::from(13u8));
    }

    #[test]
    fn test_fixed_digits_negative_sign() {
        let (negative, rounded) = fixed_digits(&big(-2), &big(3), 2, Rounding::RoundUp).unwrap();
        assert!(negative);
        assert_eq!(rounded, BigUint::from(67u8));

        // Negative denominator counts too
        let (negative, _) = fixed_digits(&big(2), &big(-3), 2, Rounding::RoundDown).unwrap();
        assert!(negative);

        // Both negative cancels
        let (negative, _) = fixed_digits(&big(-2), &big(-3), 2, Rounding::RoundDown).unwrap();
        assert!(!negative);
    }

    #[test]
    fn test_fixed_digits_never_negative_zero() {
        let (negative, rounded) = fixed_digits(&big(-1), &big(3), 0, Rounding::RoundDown).unwrap();
        assert!(!negative);
        assert!(rounded.is_zero());
    }

    #[test]
    fn test_fixed_digits_zero_denominator() {
        assert_eq!(
            fixed_digits(&big(1), &big(0), 2, Rounding::RoundDown).unwrap_err(),
            FractionError::DivisionByZero,
        );
    }

    #[test]
    fn test_significant_digits_window_below_one() {
        // 1/800 = 0.00125 at two significant digits
        let (negative, rounded, places) =
            significant_digits(&big(1), &big(800), 2, Rounding::RoundDown).unwrap();
        assert!(!negative);
        assert_eq!(rounded, BigUint::from(12u8));
        assert_eq!(places, 4);

        let (_, rounded, _) =
            significant_digits(&big(1), &big(800), 2, Rounding::RoundHalfUp).unwrap();
        assert_eq!(rounded, BigUint::from(13u8));
    }

    #[test]
    fn test_significant_digits_window_above_precision() {
        // 123456 at two significant digits
        let (_, rounded, places) =
            significant_digits(&big(123_456), &big(1), 2, Rounding::RoundDown).unwrap();
        assert_eq!(places, 0);
        assert_eq!(rounded, BigUint::from(120_000u32));

        let (_, rounded, _) =
            significant_digits(&big(123_456), &big(1), 2, Rounding::RoundUp).unwrap();
        assert_eq!(rounded, BigUint::from(130_000u32));
    }

    #[test]
    fn test_significant_digits_zero_value() {
        let (negative, rounded, places) =
            significant_digits(&big(0), &big(7), 4, Rounding::RoundUp).unwrap();
        assert!(!negative);
        assert!(rounded.is_zero());
        assert_eq!(places, 0);
    }
}
