//! Errors raised while turning text into exact numbers.

use thiserror::Error;

/// Failure to read a [`Rational`](crate::Rational) or [`Integer`](crate::Integer)
/// from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRationalError {
    /// The text is not an optionally signed run of decimal digits.
    #[error("invalid digits in `{0}`")]
    InvalidDigits(String),
    /// A fraction was written with a zero denominator.
    #[error("zero denominator in `{0}`")]
    ZeroDenominator(String),
}
