//! Dimension-checked addition and multiplication.
//!
//! Operands are never mutated; each successful call builds a fresh
//! [`Matrix::zeros`] of the result shape and fills it.

use std::ops::{Add, Mul};

use lineal_integers::Rational;
use tracing::debug;

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::row::Row;

impl Matrix {
    /// Rejects operands that are degenerate or carry unset cells.
    pub(crate) fn ensure_operand(&self) -> Result<(), MatrixError> {
        if self.is_degenerate() || !self.is_fully_set() {
            debug!(shape = ?self.shape(), "degenerate operand");
            return Err(MatrixError::Degenerate);
        }
        Ok(())
    }

    /// Validates a multiplication and returns the rows of `self` and the
    /// columns of `other`.
    pub(crate) fn multiplication_operands(
        &self,
        other: &Self,
    ) -> Result<(Vec<Row>, Vec<Row>), MatrixError> {
        self.ensure_operand()?;
        other.ensure_operand()?;
        if self.num_cols() != other.num_rows() {
            debug!(left = ?self.shape(), right = ?other.shape(), "multiply shape mismatch");
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let rows = self.rows().flatten().cloned().collect();
        let cols = (0..other.num_cols())
            .filter_map(|j| other.column(j))
            .collect();
        Ok((rows, cols))
    }

    /// Elementwise sum `self + other`.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::Degenerate`] if either operand is degenerate or has an
    ///   unset cell.
    /// - [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.ensure_operand()?;
        other.ensure_operand()?;
        if self.shape() != other.shape() {
            debug!(left = ?self.shape(), right = ?other.shape(), "add shape mismatch");
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut result = Self::zeros(self.num_rows(), self.num_cols());
        for (i, (a, b)) in self.rows().zip(other.rows()).enumerate() {
            let (Some(a), Some(b)) = (a, b) else {
                return Err(MatrixError::Degenerate);
            };
            for (j, (x, y)) in a.cells().iter().zip(b.cells()).enumerate() {
                let (Some(x), Some(y)) = (x, y) else {
                    return Err(MatrixError::Degenerate);
                };
                result.set_value(i, j, x + y);
            }
        }
        Ok(result)
    }

    /// Matrix product `self * other`, evaluated sequentially.
    ///
    /// The result is `self.num_rows() x other.num_cols()`; cell `(i, j)` is
    /// the dot product of row `i` of `self` with column `j` of `other`.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::Degenerate`] if either operand is degenerate or has an
    ///   unset cell.
    /// - [`MatrixError::DimensionMismatch`] if `self.num_cols() != other.num_rows()`.
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        let (rows, cols) = self.multiplication_operands(other)?;

        let mut result = Self::zeros(self.num_rows(), other.num_cols());
        for (i, row) in rows.iter().enumerate() {
            for (j, col) in cols.iter().enumerate() {
                let value = row.dot(col).ok_or(MatrixError::Degenerate)?;
                result.set_value(i, j, value);
            }
        }
        Ok(result)
    }

    /// Overwrites an in-range cell of a row that is known to exist.
    pub(crate) fn set_value(&mut self, row: usize, col: usize, value: Rational) {
        if let Some(Some(r)) = self.rows.get_mut(row) {
            r.set(col, value);
        }
    }
}

impl Add for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn add(self, other: Self) -> Self::Output {
        self.checked_add(other)
    }
}

impl Mul for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(self, other: Self) -> Self::Output {
        self.multiply(other)
    }
}
