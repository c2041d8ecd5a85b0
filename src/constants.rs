// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Numeric bounds, chain ids, and well-known addresses
//!
//! This module centralizes magic constants used throughout the semiomath
//! crate, improving discoverability and maintainability.

use std::sync::LazyLock;

use num_bigint::BigInt;
use num_traits::One;
use serde::{Deserialize, Serialize};

/// The largest raw amount a currency can carry: `2^256 - 1`.
///
/// Raw amounts mirror on-chain balances, which are unsigned 256-bit
/// integers. [`CurrencyAmount`](crate::CurrencyAmount) enforces this bound
/// at construction and on every arithmetic result.
///
/// # Examples
///
/// ```
/// use semiomath::MAX_UINT256;
///
/// assert_eq!(
///     MAX_UINT256.to_string(),
///     "115792089237316195423570985008687907853269984665640564039457584007913129639935",
/// );
/// ```
pub static MAX_UINT256: LazyLock<BigInt> = LazyLock::new(|| (BigInt::one() << 256usize) - 1);

/// Chains with a canonical wrapped-native token deployment.
///
/// Tokens themselves carry a plain `u64` chain id so that any chain is
/// representable; this enum names the chains this crate ships constants for.
///
/// # Examples
///
/// ```
/// use semiomath::ChainId;
///
/// assert_eq!(u64::from(ChainId::Edgeware), 2021);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u64)]
pub enum ChainId {
    /// Rinkeby testnet
    Rinkeby = 4,
    /// Edgeware EVM mainnet
    Edgeware = 2021,
    /// Beresheet, the Edgeware canary network
    Beresheet = 2022,
}

impl From<ChainId> for u64 {
    fn from(value: ChainId) -> Self {
        value as u64
    }
}

/// Well-known wrapped-native token addresses
pub mod wrapped {
    use alloy_primitives::{address, Address};

    /// Canonical WETH9 on Rinkeby
    ///
    /// Contract: 0xe4912bD19d837a6Ef5F44012aAd6B3C2e0b52864
    pub const RINKEBY_WETH9: Address = address!("e4912bd19d837a6ef5f44012aad6b3c2e0b52864");

    /// Wrapped EDG on the Edgeware EVM mainnet
    ///
    /// Contract: 0x59AF421cB35fc23aB6C8ee42743e6176040031f4
    pub const EDGEWARE_WETH9: Address = address!("59af421cb35fc23ab6c8ee42743e6176040031f4");

    /// Wrapped EDG on Beresheet (same deployment address as mainnet)
    pub const BERESHEET_WETH9: Address = address!("59af421cb35fc23ab6c8ee42743e6176040031f4");
}
