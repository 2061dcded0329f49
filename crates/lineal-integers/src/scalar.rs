//! Coercion of heterogeneous inputs into exact rationals.
//!
//! Matrix construction accepts machine integers, decimal or fraction text,
//! and ready-made rationals interchangeably. Each input is wrapped in a
//! [`Scalar`] and resolved with [`Scalar::coerce`].

use num_traits::Zero;

use crate::{ParseRationalError, Rational};

/// One input value awaiting conversion to a [`Rational`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scalar {
    /// A machine integer.
    Int(i64),
    /// Integer, fraction (`"1/5"`) or decimal (`"0.25"`) text.
    Text(String),
    /// An exact value that needs no conversion.
    Rational(Rational),
}

impl Scalar {
    /// Resolves the input to an exact rational.
    ///
    /// Empty or whitespace-only text reads as zero.
    ///
    /// # Errors
    ///
    /// Returns [`ParseRationalError`] only for text that is not a number.
    pub fn coerce(self) -> Result<Rational, ParseRationalError> {
        match self {
            Scalar::Int(n) => Ok(Rational::from(n)),
            Scalar::Text(text) if text.trim().is_empty() => Ok(Rational::zero()),
            Scalar::Text(text) => text.parse(),
            Scalar::Rational(r) => Ok(r),
        }
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Int(i64::from(n))
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Int(i64::from(n))
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Scalar::Text(text.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(text: String) -> Self {
        Scalar::Text(text)
    }
}

impl From<Rational> for Scalar {
    fn from(r: Rational) -> Self {
        Scalar::Rational(r)
    }
}

impl From<&Rational> for Scalar {
    fn from(r: &Rational) -> Self {
        Scalar::Rational(r.clone())
    }
}
