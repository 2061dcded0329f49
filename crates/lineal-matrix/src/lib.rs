//! # lineal-matrix
//!
//! Exact-arithmetic matrices over the rationals.
//!
//! This crate provides:
//! - Incremental construction with completeness and degeneracy tracking
//! - Dimension-checked addition and multiplication
//! - Row-echelon and reduced row-echelon classification
//! - A single-pass Gaussian eliminator
//! - Optional rayon-parallel multiplication and elimination
//!
//! ## Example
//!
//! ```
//! use lineal_matrix::Matrix;
//!
//! let mut m = Matrix::new(2, 2);
//! m.add_row([1, 2]).unwrap();
//! m.add_row(["2", "4"]).unwrap();
//! assert!(m.is_complete());
//!
//! let reduced = m.after_gaussian_elimination();
//! assert!(reduced.row(1).unwrap().is_zero_row());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algebra;
pub mod echelon;
pub mod elimination;
pub mod error;
pub mod matrix;
pub mod parallel;
pub mod row;

pub use elimination::{pivot, reduce_pair};
pub use error::MatrixError;
pub use matrix::Matrix;
pub use parallel::ParallelConfig;
pub use row::Row;

#[cfg(test)]
mod proptests;
