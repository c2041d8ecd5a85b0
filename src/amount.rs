// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Currency amounts with exact decimal scaling
//!
//! A [`CurrencyAmount`] pins a [`Fraction`] to a currency's decimal scale:
//! the numerator is the raw amount in the smallest unit (wei-equivalent)
//! and the denominator is always `10^decimals`. Construction enforces the
//! uint256 range, and arithmetic refuses to mix currencies.

use std::fmt;

use alloy_primitives::U256;
use num_bigint::{BigInt, Sign};
use num_traits::{Pow, Signed};

use crate::constants::MAX_UINT256;
use crate::currency::{native_currency, Currency, CurrencyLike};
use crate::errors::AmountError;
use crate::fraction::{render_scaled, FormatOptions, Fraction, Rounding};

/// An exact amount of a specific currency.
///
/// Immutable after construction; every operation returns a new value. The
/// raw amount is bounded to `[0, 2^256 - 1]`, mirroring on-chain balances,
/// and the bound is re-checked on arithmetic results: an overflowing `add`
/// or underflowing `subtract` fails rather than producing an
/// unrepresentable balance.
///
/// # Examples
///
/// ```
/// use semiomath::CurrencyAmount;
///
/// // 1.5 EDG expressed in its smallest unit
/// let amount = CurrencyAmount::native(1_500_000_000_000_000_000u128).unwrap();
/// assert_eq!(amount.to_exact(&Default::default()), "1.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount {
    currency: Currency,
    fraction: Fraction,
}

impl CurrencyAmount {
    /// Create an amount from a raw integer in the currency's smallest unit.
    ///
    /// Fails with [`AmountError::InvalidAmount`] when the raw amount is
    /// negative or exceeds `2^256 - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use semiomath::{native_currency, CurrencyAmount};
    ///
    /// let amount = CurrencyAmount::from_raw(native_currency(), 100u64).unwrap();
    /// assert_eq!(amount.raw().to_string(), "100");
    /// ```
    pub fn from_raw(currency: Currency, raw: impl Into<BigInt>) -> Result<Self, AmountError> {
        let raw = raw.into();
        if raw.is_negative() || raw > *MAX_UINT256 {
            tracing::warn!(raw = %raw, currency = %currency, "Raw amount outside the uint256 range");
            return Err(AmountError::InvalidAmount { raw });
        }
        let denominator = BigInt::from(10u8).pow(u32::from(currency.decimals()));
        Ok(Self {
            currency,
            fraction: Fraction::new(raw, denominator),
        })
    }

    /// Create an amount from a decimal-integer string.
    ///
    /// The string is parsed at arbitrary precision, then validated exactly
    /// like [`from_raw`](Self::from_raw).
    pub fn from_raw_str(currency: Currency, raw: &str) -> Result<Self, AmountError> {
        let parsed = raw
            .parse::<BigInt>()
            .map_err(|e| AmountError::AmountParseFailed {
                input: raw.to_owned(),
                details: e.to_string(),
            })?;
        Self::from_raw(currency, parsed)
    }

    /// Create an amount from an on-chain [`U256`] value.
    ///
    /// Every `U256` is within the bound, so this is a convenience bridge
    /// for values read straight off the chain.
    pub fn from_raw_u256(currency: Currency, raw: U256) -> Result<Self, AmountError> {
        let raw = BigInt::from_bytes_be(Sign::Plus, &raw.to_be_bytes::<32>());
        Self::from_raw(currency, raw)
    }

    /// Create an amount of the shared native currency.
    pub fn native(raw: impl Into<BigInt>) -> Result<Self, AmountError> {
        Self::from_raw(native_currency(), raw)
    }

    /// The raw amount in the currency's smallest unit.
    pub fn raw(&self) -> &BigInt {
        self.fraction.numerator()
    }

    /// The currency this amount is denominated in.
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// The underlying fraction (`raw / 10^decimals`).
    pub fn as_fraction(&self) -> &Fraction {
        &self.fraction
    }

    /// The currency's decimal scale.
    pub fn decimals(&self) -> u8 {
        self.currency.decimals()
    }

    fn check_same_currency(&self, other: &CurrencyAmount) -> Result<(), AmountError> {
        if self.currency != other.currency {
            return Err(AmountError::CurrencyMismatch {
                ours: self.currency.to_string(),
                theirs: other.currency.to_string(),
            });
        }
        Ok(())
    }

    /// Adds two amounts of the same currency.
    ///
    /// Fails with [`AmountError::CurrencyMismatch`] across currencies and
    /// [`AmountError::InvalidAmount`] if the sum leaves the uint256 range.
    /// The denominators are identical by invariant, so this is integer
    /// addition on the raw amounts.
    pub fn add(&self, other: &CurrencyAmount) -> Result<Self, AmountError> {
        self.check_same_currency(other)?;
        Self::from_raw(self.currency.clone(), self.raw() + other.raw())
    }

    /// Subtracts an amount of the same currency.
    ///
    /// Fails with [`AmountError::CurrencyMismatch`] across currencies and
    /// [`AmountError::InvalidAmount`] if the difference would be negative.
    pub fn subtract(&self, other: &CurrencyAmount) -> Result<Self, AmountError> {
        self.check_same_currency(other)?;
        Self::from_raw(self.currency.clone(), self.raw() - other.raw())
    }

    /// Renders with the given number of significant digits.
    pub fn to_significant(
        &self,
        significant_digits: u32,
        format: &FormatOptions,
        rounding: Rounding,
    ) -> Result<String, AmountError> {
        Ok(self
            .fraction
            .to_significant(significant_digits, format, rounding)?)
    }

    /// Renders with exactly `decimal_places` digits after the point.
    ///
    /// Fails with [`AmountError::PrecisionExceedsScale`] when more places
    /// are requested than the currency carries.
    ///
    /// # Examples
    ///
    /// ```
    /// use semiomath::{CurrencyAmount, FormatOptions, Rounding};
    ///
    /// let amount = CurrencyAmount::native(1_500_000_000_000_000_000u128).unwrap();
    /// let rendered = amount
    ///     .to_fixed(2, &FormatOptions::default(), Rounding::RoundDown)
    ///     .unwrap();
    /// assert_eq!(rendered, "1.50");
    /// ```
    pub fn to_fixed(
        &self,
        decimal_places: u32,
        format: &FormatOptions,
        rounding: Rounding,
    ) -> Result<String, AmountError> {
        let scale = self.decimals();
        if decimal_places > u32::from(scale) {
            return Err(AmountError::PrecisionExceedsScale {
                requested: decimal_places,
                scale,
            });
        }
        Ok(self.fraction.to_fixed(decimal_places, format, rounding)?)
    }

    /// The full, exact decimal representation; the lossless display path.
    ///
    /// The raw amount is rendered with the decimal point placed
    /// `decimals()` digits from the right and trailing fractional zeros
    /// stripped. No division and no rounding take place, so the output is
    /// exact for every representable amount.
    pub fn to_exact(&self, format: &FormatOptions) -> String {
        render_scaled(
            false,
            self.raw().magnitude(),
            u32::from(self.decimals()),
            true,
            format,
        )
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .to_significant(6, &FormatOptions::default(), Rounding::RoundDown)
            .map_err(|_| fmt::Error)?;
        match self.currency.symbol() {
            Some(symbol) => write!(f, "{rendered} {symbol}"),
            None => f.write_str(&rendered),
        }
    }
}
