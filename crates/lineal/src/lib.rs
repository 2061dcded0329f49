//! # Lineal
//!
//! An exact-arithmetic matrix engine over the rational numbers.
//!
//! ## Features
//!
//! - **Exact Scalars**: arbitrary precision rationals, no floating point
//! - **Incremental Construction**: fill matrices row by row or cell by cell
//! - **Checked Algebra**: addition and multiplication refuse bad shapes
//! - **Echelon Forms**: classification and single-pass Gaussian elimination
//!
//! ## Quick Start
//!
//! ```rust
//! use lineal::prelude::*;
//!
//! let mut a = Matrix::new(2, 2);
//! a.add_row([1, 2]).unwrap();
//! a.add_row(["1/2", "0.25"]).unwrap();
//!
//! let product = a.multiply(&Matrix::identity(2)).unwrap();
//! assert_eq!(product, a);
//! assert_eq!(product.get(1, 1), Some(&Rational::from_i64(1, 4)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use lineal_integers as integers;
pub use lineal_matrix as matrix;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use lineal_integers::{Integer, ParseRationalError, Rational, Scalar};
    pub use lineal_matrix::{Matrix, MatrixError, ParallelConfig, Row};
}
