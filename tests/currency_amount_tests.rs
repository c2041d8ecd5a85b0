// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Cross-module scenarios for currency amounts
//!
//! End-to-end flows combining the identity model, the fraction engine, and
//! the amount layer, the way a pricing or accounting caller would use them.

use alloy_primitives::U256;
use num_bigint::BigInt;
use proptest::prelude::*;
use semiomath::{
    native_currency, wrapped_native, AmountError, ChainId, Currency, CurrencyAmount,
    CurrencyLike, FormatOptions, Rounding, MAX_UINT256,
};

const WEI_PER_EDG: u128 = 1_000_000_000_000_000_000;

#[test]
fn wrapped_native_balance_flow() {
    // A balance read off the chain as U256, held in the wrapped token
    let wrapped = wrapped_native(ChainId::Edgeware.into()).unwrap().clone();
    let currency = Currency::from(wrapped);

    let held =
        CurrencyAmount::from_raw_u256(currency.clone(), U256::from(2_500_000_000_000_000_000u128))
            .unwrap();
    let earned =
        CurrencyAmount::from_raw_u256(currency.clone(), U256::from(500_000_000_000_000_000u128))
            .unwrap();

    let total = held.add(&earned).unwrap();
    assert_eq!(total.raw(), &BigInt::from(3 * WEI_PER_EDG));
    assert_eq!(total.to_exact(&FormatOptions::default()), "3");
    assert_eq!(total.currency().symbol(), Some("WETH9"));
}

#[test]
fn wrapped_token_is_not_the_native_coin() {
    let wrapped = wrapped_native(ChainId::Edgeware.into()).unwrap().clone();
    let in_wrapped = CurrencyAmount::from_raw(Currency::from(wrapped), WEI_PER_EDG).unwrap();
    let in_native = CurrencyAmount::native(WEI_PER_EDG).unwrap();

    let err = in_native.add(&in_wrapped).unwrap_err();
    assert!(matches!(err, AmountError::CurrencyMismatch { .. }));
}

#[test]
fn settlement_report_formatting() {
    // 1234567.891234 of a 6-decimal token, rendered for a report
    let token = semiomath::Token::new(
        ChainId::Edgeware.into(),
        "0x0000000000000000000000000000000000000010",
        6,
        Some("USDX"),
        Some("Test Dollar"),
    )
    .unwrap();
    let amount =
        CurrencyAmount::from_raw(Currency::from(token), 1_234_567_891_234u64).unwrap();

    let grouped = FormatOptions::grouped(',');
    assert_eq!(amount.to_exact(&grouped), "1,234,567.891234");
    assert_eq!(
        amount.to_fixed(2, &grouped, Rounding::RoundDown).unwrap(),
        "1,234,567.89",
    );
    assert_eq!(
        amount.to_fixed(2, &grouped, Rounding::RoundHalfUp).unwrap(),
        "1,234,567.89",
    );
    assert_eq!(
        amount
            .to_significant(4, &FormatOptions::default(), Rounding::RoundDown)
            .unwrap(),
        "1234000",
    );
}

#[test]
fn to_fixed_at_full_scale_pads_to_exact() {
    let amount = CurrencyAmount::native(WEI_PER_EDG + WEI_PER_EDG / 2).unwrap();
    let plain = FormatOptions::default();

    let exact = amount.to_exact(&plain);
    let full = amount
        .to_fixed(u32::from(amount.decimals()), &plain, Rounding::RoundDown)
        .unwrap();

    // to_fixed keeps trailing zeros; to_exact strips them. Same digits
    assert_eq!(exact, "1.5");
    assert_eq!(full, format!("1.5{}", "0".repeat(17)));
    assert!(full.starts_with(&exact));
}

#[test]
fn native_singleton_shared_across_amounts() {
    let a = CurrencyAmount::native(1u64).unwrap();
    let b = CurrencyAmount::from_raw(native_currency(), 2u64).unwrap();
    assert_eq!(a.currency(), b.currency());
    let sum = a.add(&b).unwrap();
    assert_eq!(sum.raw(), &BigInt::from(3));
}

proptest! {
    /// Property: raw amounts round-trip through construction unchanged
    #[test]
    fn prop_raw_round_trip(raw in any::<u128>()) {
        let amount = CurrencyAmount::native(raw).unwrap();
        prop_assert_eq!(amount.raw(), &BigInt::from(raw));
    }

    /// Property: addition of in-range halves never trips the bound check
    #[test]
    fn prop_in_range_addition_succeeds(a in any::<u128>(), b in any::<u128>()) {
        let a = CurrencyAmount::native(a).unwrap();
        let b = CurrencyAmount::native(b).unwrap();
        // u128 sums stay far below 2^256 - 1
        let sum = a.add(&b).unwrap();
        prop_assert!(sum.raw() <= &*MAX_UINT256);
        let difference = sum.subtract(&b).unwrap();
        prop_assert_eq!(difference.raw(), a.raw());
    }

    /// Property: the exact rendering re-parses to the raw amount
    #[test]
    fn prop_to_exact_round_trips_raw(raw in any::<u128>()) {
        let amount = CurrencyAmount::native(raw).unwrap();
        let rendered = amount.to_exact(&FormatOptions::default());

        let (integer, fraction) = match rendered.split_once('.') {
            Some((i, f)) => (i.to_owned(), f.to_owned()),
            None => (rendered.clone(), String::new()),
        };
        let rebuilt = format!("{integer}{fraction}{}", "0".repeat(18 - fraction.len()));
        prop_assert_eq!(rebuilt.parse::<BigInt>().unwrap(), BigInt::from(raw));
    }
}
