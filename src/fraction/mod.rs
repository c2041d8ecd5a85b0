// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Arbitrary-precision rational numbers
//!
//! [`Fraction`] is the numeric core of this crate: an exact
//! numerator/denominator pair over [`BigInt`]. Arithmetic cross-multiplies
//! to a common representation and never reduces implicitly, so denominators
//! grow but values stay exact. Formatting goes through the integer
//! long-division engine in [`rounding`]; there is no floating point
//! anywhere on any path.

mod format;
mod rounding;

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Sub};

use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::errors::FractionError;

pub use format::FormatOptions;
pub use rounding::Rounding;

pub(crate) use format::render_scaled;

/// An exact rational number.
///
/// The denominator is carried as constructed: `1/3 + 1/6` is `9/18`, not
/// `1/2`. Use [`equal_to`](Self::equal_to) for numeric equality; the
/// derived `PartialEq` is structural, so `1/2` and `2/4` are *not* `==`
/// even though they are `equal_to` each other.
///
/// A zero denominator is representable; only the operations that actually
/// divide ([`quotient`](Self::quotient), [`remainder`](Self::remainder),
/// and the formatters) report it as [`FractionError::DivisionByZero`].
///
/// # Examples
///
/// ```
/// use semiomath::{FormatOptions, Fraction, Rounding};
///
/// let third = Fraction::new(1, 3);
/// let sixth = Fraction::new(1, 6);
/// let half = third.add(&sixth);
///
/// assert!(half.equal_to(&Fraction::new(1, 2)));
/// assert_eq!(
///     half.to_significant(3, &FormatOptions::default(), Rounding::RoundDown).unwrap(),
///     "0.5",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Create a fraction from a numerator and denominator.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    /// Create a whole number (denominator 1).
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self::new(value, 1)
    }

    /// The numerator as constructed.
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// The denominator as constructed.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Integer part of the division, truncated toward zero.
    pub fn quotient(&self) -> Result<BigInt, FractionError> {
        if self.denominator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Ok(&self.numerator / &self.denominator)
    }

    /// The fractional remainder over the same denominator.
    ///
    /// The remainder is truncated (its sign follows the numerator), so
    /// `quotient * denominator + remainder_numerator == numerator` exactly.
    pub fn remainder(&self) -> Result<Fraction, FractionError> {
        if self.denominator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Ok(Self {
            numerator: &self.numerator % &self.denominator,
            denominator: self.denominator.clone(),
        })
    }

    /// The reciprocal: numerator and denominator swapped.
    pub fn invert(&self) -> Fraction {
        Self {
            numerator: self.denominator.clone(),
            denominator: self.numerator.clone(),
        }
    }

    /// Exact sum by cross-multiplication.
    pub fn add(&self, other: &Fraction) -> Fraction {
        if self.denominator == other.denominator {
            return Self {
                numerator: &self.numerator + &other.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Self {
            numerator: &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    /// Exact difference by cross-multiplication.
    pub fn subtract(&self, other: &Fraction) -> Fraction {
        if self.denominator == other.denominator {
            return Self {
                numerator: &self.numerator - &other.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Self {
            numerator: &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    /// Exact product.
    pub fn multiply(&self, other: &Fraction) -> Fraction {
        Self {
            numerator: &self.numerator * &other.numerator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    /// Exact quotient, formed by multiplying with the reciprocal.
    ///
    /// No division is performed, so this never fails; a zero divisor simply
    /// produces a fraction with a zero denominator.
    pub fn divide(&self, other: &Fraction) -> Fraction {
        Self {
            numerator: &self.numerator * &other.denominator,
            denominator: &self.denominator * &other.numerator,
        }
    }

    /// Numeric ordering by cross-multiplication, corrected for the sign of
    /// the denominators.
    fn compare(&self, other: &Fraction) -> Ordering {
        let lhs = &self.numerator * &other.denominator;
        let rhs = &other.numerator * &self.denominator;
        let ordering = lhs.cmp(&rhs);
        if self.denominator.sign() * other.denominator.sign() == Sign::Minus {
            ordering.reverse()
        } else {
            ordering
        }
    }

    /// Whether this fraction is numerically less than the other.
    pub fn less_than(&self, other: &Fraction) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Whether the two fractions are numerically equal (`1/2` equals `2/4`).
    pub fn equal_to(&self, other: &Fraction) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// Whether this fraction is numerically greater than the other.
    pub fn greater_than(&self, other: &Fraction) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Renders the value with the given number of significant digits.
    ///
    /// Significant digits count from the first nonzero digit regardless of
    /// where the decimal point falls: `0.0012345` at three significant
    /// digits is `0.00123`. Trailing fractional zeros are not rendered, so
    /// `3/2` at six digits is `"1.5"`. Fails with
    /// [`FractionError::InvalidPrecision`] when `significant_digits` is
    /// zero and [`FractionError::DivisionByZero`] on a zero denominator.
    ///
    /// # Examples
    ///
    /// ```
    /// use semiomath::{FormatOptions, Fraction, Rounding};
    ///
    /// let third = Fraction::new(1, 3);
    /// let plain = FormatOptions::default();
    /// assert_eq!(third.to_significant(3, &plain, Rounding::RoundHalfUp).unwrap(), "0.333");
    /// assert_eq!(third.to_significant(1, &plain, Rounding::RoundUp).unwrap(), "0.4");
    /// ```
    pub fn to_significant(
        &self,
        significant_digits: u32,
        format: &FormatOptions,
        rounding: Rounding,
    ) -> Result<String, FractionError> {
        if significant_digits == 0 {
            return Err(FractionError::InvalidPrecision {
                digits: significant_digits,
            });
        }
        let (negative, scaled, places) = rounding::significant_digits(
            &self.numerator,
            &self.denominator,
            significant_digits,
            rounding,
        )?;
        Ok(render_scaled(negative, &scaled, places, true, format))
    }

    /// Renders the value with exactly `decimal_places` digits after the
    /// decimal point, trailing zeros included.
    ///
    /// # Examples
    ///
    /// ```
    /// use semiomath::{FormatOptions, Fraction, Rounding};
    ///
    /// let plain = FormatOptions::default();
    /// let half = Fraction::new(1, 2);
    /// assert_eq!(half.to_fixed(3, &plain, Rounding::RoundDown).unwrap(), "0.500");
    ///
    /// let two_thirds = Fraction::new(2, 3);
    /// assert_eq!(two_thirds.to_fixed(2, &plain, Rounding::RoundDown).unwrap(), "0.66");
    /// assert_eq!(two_thirds.to_fixed(2, &plain, Rounding::RoundHalfUp).unwrap(), "0.67");
    /// ```
    pub fn to_fixed(
        &self,
        decimal_places: u32,
        format: &FormatOptions,
        rounding: Rounding,
    ) -> Result<String, FractionError> {
        let (negative, scaled) =
            rounding::fixed_digits(&self.numerator, &self.denominator, decimal_places, rounding)?;
        Ok(render_scaled(negative, &scaled, decimal_places, false, format))
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Self) -> Self::Output {
        Fraction::add(&self, &rhs)
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(&rhs)
    }
}
