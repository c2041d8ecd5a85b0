// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain-scoped tokens with canonical addresses
//!
//! A [`Token`] is a currency pinned to a chain and a contract address. The
//! address is canonical by construction: the constructor validates the input
//! string and stores the parsed 20-byte value, so equality and ordering never
//! have to think about hex casing again.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::constants::{wrapped, ChainId};
use crate::currency::{validate_decimals, CurrencyLike};
use crate::errors::TokenError;

/// Validates an address string and returns its canonical form.
///
/// Accepts all-lowercase and all-uppercase hex (the casings that carry no
/// checksum) and mixed-case hex with a valid EIP-55 checksum. Fails with
/// [`TokenError::InvalidAddress`] on wrong length, non-hex characters, or a
/// checksum that does not verify. Idempotent: a canonical (checksummed)
/// string validates to itself.
///
/// # Examples
///
/// ```
/// use semiomath::validate_address;
///
/// let parsed = validate_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
/// assert_eq!(
///     parsed.to_checksum(None),
///     "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
/// );
///
/// assert!(validate_address("0x1234").is_err());
/// ```
pub fn validate_address(input: &str) -> Result<Address, TokenError> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    let mixed_case = digits.chars().any(|c| c.is_ascii_lowercase())
        && digits.chars().any(|c| c.is_ascii_uppercase());
    let parsed = if mixed_case {
        // Mixed casing is only meaningful as an EIP-55 checksum
        Address::parse_checksummed(input, None).map_err(|e| e.to_string())
    } else {
        input.parse::<Address>().map_err(|e| e.to_string())
    };
    parsed.map_err(|details| {
        tracing::warn!(input, %details, "Address validation failed");
        TokenError::InvalidAddress {
            input: input.to_owned(),
            details,
        }
    })
}

/// An ERC-20 token: a currency scoped to a chain and contract address.
///
/// Equality is structural on `(chain_id, address)`: two tokens with the
/// same address compare equal even if their recorded symbol or decimals
/// differ, since the chain is the authority on those.
///
/// # Examples
///
/// ```
/// use semiomath::{CurrencyLike, Token};
///
/// let usdc = Token::new(
///     1,
///     "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
///     6,
///     Some("USDC"),
///     Some("USD Coin"),
/// )
/// .unwrap();
/// assert_eq!(usdc.decimals(), 6);
/// assert_eq!(usdc.to_string(), "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    chain_id: u64,
    address: Address,
    decimals: u8,
    symbol: Option<String>,
    name: Option<String>,
}

impl Token {
    /// Create a token from an address string.
    ///
    /// The address is validated and canonicalized per [`validate_address`];
    /// the decimal scale follows the currency rule (`decimals < 255`).
    pub fn new(
        chain_id: u64,
        address: &str,
        decimals: u8,
        symbol: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self, TokenError> {
        let address = validate_address(address)?;
        Self::with_address(chain_id, address, decimals, symbol, name)
    }

    /// Create a token from an already-parsed [`Address`].
    ///
    /// The address type is canonical by construction, so only the decimal
    /// scale is validated.
    pub fn with_address(
        chain_id: u64,
        address: Address,
        decimals: u8,
        symbol: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self, TokenError> {
        Ok(Self {
            chain_id,
            address,
            decimals: validate_decimals(decimals)?,
            symbol: symbol.map(str::to_owned),
            name: name.map(str::to_owned),
        })
    }

    /// The id of the chain this token lives on.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// The token's contract address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The canonical EIP-55 string form of the address.
    pub fn checksummed(&self) -> String {
        self.address.to_checksum(None)
    }

    /// Whether this token's address sorts before the other's.
    ///
    /// Only defined between tokens on the same chain with different
    /// addresses; anything else is a precondition violation, reported as
    /// [`TokenError::ChainMismatch`] or [`TokenError::IdenticalAddress`]
    /// rather than a boolean. Comparison is on the 20-byte address value,
    /// which matches case-insensitive ordering of the hex form.
    pub fn sorts_before(&self, other: &Token) -> Result<bool, TokenError> {
        if self.chain_id != other.chain_id {
            return Err(TokenError::ChainMismatch {
                ours: self.chain_id,
                theirs: other.chain_id,
            });
        }
        if self.address == other.address {
            return Err(TokenError::IdenticalAddress {
                address: self.address,
            });
        }
        Ok(self.address < other.address)
    }
}

impl CurrencyLike for Token {
    fn decimals(&self) -> u8 {
        self.decimals
    }

    fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.checksummed())
    }
}

static WRAPPED_NATIVE: LazyLock<[Token; 3]> = LazyLock::new(|| {
    [
        Token {
            chain_id: ChainId::Rinkeby.into(),
            address: wrapped::RINKEBY_WETH9,
            decimals: 18,
            symbol: Some("WETH9".to_owned()),
            name: Some("Wrapped ETH".to_owned()),
        },
        Token {
            chain_id: ChainId::Edgeware.into(),
            address: wrapped::EDGEWARE_WETH9,
            decimals: 18,
            symbol: Some("WETH9".to_owned()),
            name: Some("Wrapped EDG".to_owned()),
        },
        Token {
            chain_id: ChainId::Beresheet.into(),
            address: wrapped::BERESHEET_WETH9,
            decimals: 18,
            symbol: Some("WETH9".to_owned()),
            name: Some("Wrapped EDG".to_owned()),
        },
    ]
});

/// The canonical wrapped-native token for a chain, if one is known.
///
/// The table is fixed at process start and covers the chains in
/// [`ChainId`].
///
/// # Examples
///
/// ```
/// use semiomath::{wrapped_native, ChainId, CurrencyLike};
///
/// let wedg = wrapped_native(ChainId::Edgeware.into()).unwrap();
/// assert_eq!(wedg.symbol(), Some("WETH9"));
/// assert!(wrapped_native(999_999).is_none());
/// ```
pub fn wrapped_native(chain_id: u64) -> Option<&'static Token> {
    WRAPPED_NATIVE.iter().find(|token| token.chain_id == chain_id)
}
