// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for token construction and ordering.

use alloy_primitives::Address;

use super::CurrencyError;

/// Errors that can occur when constructing or ordering tokens.
///
/// Token construction validates the contract address (length, hex digits,
/// EIP-55 checksum) and delegates decimals validation to the currency rule.
/// Ordering two tokens has preconditions (same chain, different addresses)
/// and violating either is an error, not a boolean result.
///
/// # Examples
///
/// ```
/// use semiomath::{Token, TokenError};
///
/// let err = Token::new(1, "0xnot-an-address", 18, None, None).unwrap_err();
/// assert!(matches!(err, TokenError::InvalidAddress { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The address string failed validation.
    ///
    /// This occurs on wrong length, non-hex characters, or a mixed-case
    /// address whose EIP-55 checksum does not verify.
    #[error("Invalid address {input:?}: {details}")]
    InvalidAddress {
        /// The rejected input string
        input: String,
        /// Details about why validation failed
        details: String,
    },

    /// Attempted to order tokens on different chains.
    ///
    /// [`Token::sorts_before`](crate::Token::sorts_before) is only defined
    /// between tokens on the same chain.
    #[error("Chain mismatch: cannot order a token on chain {ours} against chain {theirs}")]
    ChainMismatch {
        /// Chain id of the token the method was called on
        ours: u64,
        /// Chain id of the other token
        theirs: u64,
    },

    /// Attempted to order a token against its own address.
    ///
    /// Two tokens with equal addresses have no defined order.
    #[error("Identical address: {address} does not sort against itself")]
    IdenticalAddress {
        /// The shared address
        address: Address,
    },

    /// The decimal scale failed the currency rule.
    #[error(transparent)]
    Currency(#[from] CurrencyError),
}
