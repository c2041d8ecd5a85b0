//! Presentation options for rendered digit strings
//!
//! Formatting is applied strictly after rounding: separators rearrange the
//! digits of an already-exact string and can never change the numeric value.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Locale-style presentation for formatted numbers.
///
/// Controls the thousands grouping of the integer part and the character
/// used as the decimal point. The default renders plain digits: no grouping,
/// `'.'` as the decimal separator.
///
/// # Examples
///
/// ```
/// use semiomath::{FormatOptions, Fraction, Rounding};
///
/// let fraction = Fraction::new(1_234_567, 1);
/// let grouped = FormatOptions::grouped(',');
/// assert_eq!(
///     fraction.to_fixed(0, &grouped, Rounding::RoundDown).unwrap(),
///     "1,234,567",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Separator inserted between thousands groups of the integer part;
    /// `None` disables grouping.
    pub group_separator: Option<char>,
    /// Character separating the integer and fractional parts.
    pub decimal_separator: char,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            group_separator: None,
            decimal_separator: '.',
        }
    }
}

impl FormatOptions {
    /// Grouping with the given separator, `'.'` as the decimal point.
    pub fn grouped(separator: char) -> Self {
        Self {
            group_separator: Some(separator),
            decimal_separator: '.',
        }
    }
}

/// Renders `scaled / 10^decimal_places` as a decimal string.
///
/// `scaled` is the magnitude already rounded to the requested precision;
/// this function only places the separator, pads, optionally strips
/// trailing fractional zeros, and applies grouping.
pub(crate) fn render_scaled(
    negative: bool,
    scaled: &BigUint,
    decimal_places: u32,
    strip_trailing_zeros: bool,
    format: &FormatOptions,
) -> String {
    let mut digits = scaled.to_str_radix(10);
    let places = decimal_places as usize;
    if digits.len() <= places {
        // Pad so there is at least one integer digit
        let mut padded = String::with_capacity(places + 1);
        for _ in 0..(places + 1 - digits.len()) {
            padded.push('0');
        }
        padded.push_str(&digits);
        digits = padded;
    }
    let split = digits.len() - places;
    let integer = group_digits(&digits[..split], format.group_separator);
    let fraction = if strip_trailing_zeros {
        digits[split..].trim_end_matches('0')
    } else {
        &digits[split..]
    };

    let mut out = String::with_capacity(integer.len() + fraction.len() + 2);
    if negative {
        out.push('-');
    }
    out.push_str(&integer);
    if !fraction.is_empty() {
        out.push(format.decimal_separator);
        out.push_str(fraction);
    }
    out
}

fn group_digits(digits: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return digits.to_owned();
    };
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
