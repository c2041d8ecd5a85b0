// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for currency-amount construction and arithmetic.

use num_bigint::BigInt;

use super::FractionError;

/// Errors that can occur when constructing or combining currency amounts.
///
/// # Examples
///
/// ```
/// use semiomath::{AmountError, CurrencyAmount};
///
/// let err = CurrencyAmount::native(-1).unwrap_err();
/// assert!(matches!(err, AmountError::InvalidAmount { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// The raw amount is outside the representable range.
    ///
    /// Raw amounts are unsigned 256-bit quantities: negative values and
    /// values above `2^256 - 1` are rejected. Arithmetic results are checked
    /// against the same bound, so an overflowing `add` or an underflowing
    /// `subtract` reports this error too.
    #[error("Invalid amount {raw}: must be between 0 and 2^256 - 1")]
    InvalidAmount {
        /// The rejected raw amount
        raw: BigInt,
    },

    /// A raw-amount string could not be parsed as an integer.
    #[error("Failed to parse amount {input:?}: {details}")]
    AmountParseFailed {
        /// The rejected input string
        input: String,
        /// Details about why the parse failed
        details: String,
    },

    /// Arithmetic between amounts of different currencies.
    ///
    /// Adding or subtracting amounts is only defined when both sides share
    /// the same currency identity.
    #[error("Currency mismatch: {ours} vs {theirs}")]
    CurrencyMismatch {
        /// Description of the currency on the left-hand side
        ours: String,
        /// Description of the currency on the right-hand side
        theirs: String,
    },

    /// Requested more fixed decimal places than the currency carries.
    ///
    /// A currency amount has exactly `decimals` places of precision;
    /// rendering more would fabricate digits.
    #[error("Requested precision {requested} exceeds the currency scale {scale}")]
    PrecisionExceedsScale {
        /// The requested decimal places
        requested: u32,
        /// The currency's decimal scale
        scale: u8,
    },

    /// Error from the underlying fraction engine.
    #[error(transparent)]
    Fraction(#[from] FractionError),
}
