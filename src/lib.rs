// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact rational arithmetic for on-chain value.
//!
//! semiomath models native-coin and token amounts as exact fractions over
//! arbitrary-precision integers: no floating point, no drift, at any decimal
//! scale. It provides:
//!
//! - [`Fraction`]: an exact rational with cross-multiplied arithmetic,
//!   comparisons, and rounding-aware decimal rendering
//! - [`Currency`] / [`NativeCurrency`] / [`Token`]: the identity model that
//!   arithmetic respects: tokens compare by `(chain_id, address)`, native
//!   currencies by instance
//! - [`CurrencyAmount`]: a fraction pinned to a currency's decimal scale,
//!   bounded to the uint256 range, with currency-checked arithmetic
//!
//! # Examples
//!
//! ```
//! use semiomath::{CurrencyAmount, FormatOptions, Rounding};
//!
//! // 1.5 EDG plus 0.25 EDG, rendered without precision loss
//! let held = CurrencyAmount::native(1_500_000_000_000_000_000u128).unwrap();
//! let earned = CurrencyAmount::native(250_000_000_000_000_000u128).unwrap();
//! let total = held.add(&earned).unwrap();
//!
//! assert_eq!(total.to_exact(&FormatOptions::default()), "1.75");
//! assert_eq!(
//!     total
//!         .to_fixed(1, &FormatOptions::default(), Rounding::RoundDown)
//!         .unwrap(),
//!     "1.7",
//! );
//! ```

mod amount;
mod constants;
mod currency;
pub mod errors;
mod fraction;
mod token;

pub use amount::CurrencyAmount;
pub use constants::{wrapped, ChainId, MAX_UINT256};
pub use currency::{currency_equals, native_currency, Currency, CurrencyLike, NativeCurrency, EDG};
pub use errors::{AmountError, CurrencyError, FractionError, SemiomathError, TokenError};
pub use fraction::{FormatOptions, Fraction, Rounding};
pub use token::{validate_address, wrapped_native, Token};
