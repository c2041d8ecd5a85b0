//! Error types for the semiomath library.
//!
//! This module provides strongly-typed errors for all public APIs in semiomath.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling
//!   (`CurrencyError`, `TokenError`, etc.)
//! - **Unified error type** ([`SemiomathError`]) for convenience when you don't
//!   need to distinguish between error sources
//!
//! # Architecture
//!
//! Each major module has its own error type:
//! - [`CurrencyError`] - Invalid currency metadata (decimals out of range)
//! - [`TokenError`] - Address validation and token ordering preconditions
//! - [`FractionError`] - Zero denominators and invalid formatting precision
//! - [`AmountError`] - Raw-amount bounds, currency mismatches, and scale caps
//!
//! Every error is a precondition violation: the caller must fix its input.
//! All operations in this crate are deterministic pure functions, so there is
//! no retry semantics anywhere; retrying with identical input is meaningless.
//! Each variant carries the offending values so callers can build diagnostics.
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```
//! use semiomath::{Token, TokenError};
//!
//! let usdc = Token::new(1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6, Some("USDC"), None).unwrap();
//! let same = usdc.clone();
//!
//! match usdc.sorts_before(&same) {
//!     Ok(ordered) => println!("sorts before: {ordered}"),
//!     Err(TokenError::IdenticalAddress { address }) => {
//!         eprintln!("cannot order {address} against itself");
//!     }
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```
//! use semiomath::{CurrencyAmount, SemiomathError};
//!
//! fn total() -> Result<CurrencyAmount, SemiomathError> {
//!     let a = CurrencyAmount::native(100u64)?;
//!     let b = CurrencyAmount::native(50u64)?;
//!     // Module errors convert to SemiomathError via From implementations
//!     Ok(a.add(&b)?)
//! }
//!
//! assert_eq!(total().unwrap().raw().to_string(), "150");
//! ```

mod amount;
mod currency;
mod fraction;
mod token;

pub use amount::AmountError;
pub use currency::CurrencyError;
pub use fraction::FractionError;
pub use token::TokenError;

/// Unified error type for all semiomath operations.
///
/// This enum wraps all module-specific error types, providing a convenient way
/// to handle errors when you don't need to distinguish between different error
/// sources. All module-specific error types automatically convert to
/// `SemiomathError` via `From` implementations, so you can use `?` to
/// propagate errors naturally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SemiomathError {
    /// Error from currency metadata validation.
    #[error("Currency error: {0}")]
    Currency(#[from] CurrencyError),

    /// Error from token construction or ordering.
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Error from fraction division or formatting.
    #[error("Fraction error: {0}")]
    Fraction(#[from] FractionError),

    /// Error from currency-amount construction or arithmetic.
    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),
}
