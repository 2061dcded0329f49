//! # lineal-integers
//!
//! Arbitrary precision integer and rational arithmetic for `lineal`.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`) with text parsing
//! - Scalar coercion from integers, text and rationals (`Scalar`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
pub mod integer;
pub mod rational;
pub mod scalar;

#[cfg(test)]
mod proptests;

pub use error::ParseRationalError;
pub use integer::Integer;
pub use rational::Rational;
pub use scalar::Scalar;
