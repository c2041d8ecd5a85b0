//! Error types for fraction division and formatting.

/// Errors that can occur when dividing or formatting a fraction.
///
/// Constructing a fraction never fails: a zero denominator is representable.
/// The failure surfaces on the operations that actually divide by it:
/// [`quotient`](crate::Fraction::quotient),
/// [`remainder`](crate::Fraction::remainder),
/// [`to_significant`](crate::Fraction::to_significant), and
/// [`to_fixed`](crate::Fraction::to_fixed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FractionError {
    /// The fraction's denominator is zero.
    #[error("Division by zero: the fraction has a zero denominator")]
    DivisionByZero,

    /// A non-positive significant-digit count was requested.
    ///
    /// [`to_significant`](crate::Fraction::to_significant) needs at least one
    /// significant digit to produce a number.
    #[error("Invalid precision {digits}: significant digits must be a positive integer")]
    InvalidPrecision {
        /// The rejected digit count
        digits: u32,
    },
}
