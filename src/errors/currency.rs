//! Error types for currency metadata validation.

/// Errors that can occur when constructing currency metadata.
///
/// # Examples
///
/// ```
/// use semiomath::{CurrencyError, NativeCurrency};
///
/// let err = NativeCurrency::new(255, None, None).unwrap_err();
/// assert_eq!(err, CurrencyError::InvalidDecimals { decimals: 255 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyError {
    /// Decimal scale is outside the supported range.
    ///
    /// A currency's decimal scale must be strictly less than 255. This is
    /// checked once at construction; every currency in circulation satisfies
    /// it.
    #[error("Invalid decimals {decimals}: must be less than 255")]
    InvalidDecimals {
        /// The rejected decimal scale
        decimals: u8,
    },
}
