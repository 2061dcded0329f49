//! Matrix store with incremental construction.
//!
//! A [`Matrix`] declares its shape up front and is filled row by row or cell
//! by cell. Until every row is written the matrix is *incomplete*, and until
//! every row has exactly `num_cols` cells it is *degenerate*; algebra refuses
//! degenerate operands.

use std::fmt;

use lineal_integers::{Rational, Scalar};
use num_traits::One;
use tracing::debug;

use crate::error::MatrixError;
use crate::row::Row;

/// A `num_rows x num_cols` grid of optional rows.
///
/// The default value is the canonical empty (0x0) matrix returned in place
/// of a result when an operation fails.
#[derive(Clone, Debug, Default)]
pub struct Matrix {
    /// Row slots; `None` means the row was never written.
    pub(crate) rows: Vec<Option<Row>>,
    /// Declared number of rows.
    num_rows: usize,
    /// Declared number of columns.
    num_cols: usize,
}

impl Matrix {
    /// Creates a matrix with the given shape and every row slot empty.
    #[must_use]
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            rows: vec![None; num_rows],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            rows: (0..num_rows).map(|_| Some(Row::zeros(num_cols))).collect(),
            num_rows,
            num_cols,
        }
    }

    /// Creates the 0x0 matrix.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Creates an `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for (i, slot) in m.rows.iter_mut().enumerate() {
            if let Some(row) = slot {
                row.set(i, Rational::one());
            }
        }
        m
    }

    /// Creates a complete matrix from fully populated rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Rational>>) -> Result<Self, MatrixError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != num_cols) {
            return Err(MatrixError::DimensionMismatch {
                left: (1, num_cols),
                right: (1, bad.len()),
            });
        }
        Ok(Self {
            rows: rows.into_iter().map(|r| Some(Row::from(r))).collect(),
            num_rows,
            num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns `(num_rows, num_cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// True if either dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_rows == 0 || self.num_cols == 0
    }

    /// True if the stored rows disagree with the declared shape.
    ///
    /// An empty row slot counts as a row of length zero. The 0x0 matrix is
    /// never degenerate.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        if self.num_rows == 0 && self.num_cols == 0 {
            return false;
        }
        self.rows.len() != self.num_rows
            || self
                .rows
                .iter()
                .any(|slot| slot.as_ref().map_or(0, Row::len) != self.num_cols)
    }

    /// Number of row slots that have never been written.
    #[must_use]
    pub fn empty_row_count(&self) -> usize {
        self.rows.iter().filter(|slot| slot.is_none()).count()
    }

    /// True if every row slot has been written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.empty_row_count() == 0
    }

    /// True if no row slot is empty and no cell is unset.
    #[must_use]
    pub fn is_fully_set(&self) -> bool {
        self.rows
            .iter()
            .all(|slot| slot.as_ref().is_some_and(Row::is_fully_set))
    }

    /// Writes `values` into the first empty row slot and returns its index.
    ///
    /// Cells past the end of `values` stay unset. Nothing is written unless
    /// every value coerces.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::MatrixFull`] if no row slot is empty.
    /// - [`MatrixError::DimensionMismatch`] if there are more values than columns.
    /// - [`MatrixError::Coercion`] if a value is not a number.
    pub fn add_row<I>(&mut self, values: I) -> Result<usize, MatrixError>
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        let Some(index) = self.rows.iter().position(Option::is_none) else {
            debug!(rows = self.num_rows, "add_row on a full matrix");
            return Err(MatrixError::MatrixFull);
        };

        let values = values
            .into_iter()
            .map(|v| v.into().coerce())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                debug!(row = index, %err, "add_row with a value that is not a number");
                err
            })?;
        if values.len() > self.num_cols {
            debug!(cols = self.num_cols, values = values.len(), "add_row with too many values");
            return Err(MatrixError::DimensionMismatch {
                left: (1, self.num_cols),
                right: (1, values.len()),
            });
        }

        let mut row = Row::unset(self.num_cols);
        for (col, value) in values.into_iter().enumerate() {
            row.set(col, value);
        }
        self.rows[index] = Some(row);
        Ok(index)
    }

    /// Writes a single cell, allocating its row (with every other cell unset)
    /// if the row slot is empty.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::OutOfRange`] if `(row, col)` lies outside the shape.
    /// - [`MatrixError::Coercion`] if `value` is not a number.
    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<Scalar>,
    ) -> Result<(), MatrixError> {
        let out_of_range = MatrixError::OutOfRange {
            row,
            col,
            rows: self.num_rows,
            cols: self.num_cols,
        };
        if row >= self.num_rows || col >= self.num_cols {
            debug!(row, col, rows = self.num_rows, cols = self.num_cols, "set_cell out of range");
            return Err(out_of_range);
        }

        let value = value.into().coerce().map_err(|err| {
            debug!(row, col, %err, "set_cell with a value that is not a number");
            err
        })?;
        let num_cols = self.num_cols;
        let slot = self.rows.get_mut(row).ok_or(out_of_range)?;
        slot.get_or_insert_with(|| Row::unset(num_cols)).set(col, value);
        Ok(())
    }

    /// Returns the value at `(row, col)` if it has been set.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Rational> {
        self.row(row).and_then(|r| r.get(col))
    }

    /// Returns row `index` if it has been written.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index).and_then(Option::as_ref)
    }

    /// Returns a copy of column `index`; cells from unwritten rows are unset.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<Row> {
        if index >= self.num_cols {
            return None;
        }
        Some(
            self.rows
                .iter()
                .map(|slot| slot.as_ref().and_then(|r| r.get(index)).cloned())
                .collect(),
        )
    }

    /// Iterates over the row slots in order.
    pub fn rows(&self) -> impl Iterator<Item = Option<&Row>> {
        self.rows.iter().map(Option::as_ref)
    }

    /// Swaps two rows in-place. Returns false if either index is out of range.
    pub fn swap_rows(&mut self, i: usize, j: usize) -> bool {
        if i >= self.rows.len() || j >= self.rows.len() {
            return false;
        }
        self.rows.swap(i, j);
        true
    }

    /// Cell-by-cell exact comparison.
    ///
    /// Fails closed: differing shapes, a degenerate side, an empty row slot or
    /// an unset cell all compare unequal, so an incomplete matrix is not even
    /// equal to itself.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.rows.iter().zip(&other.rows).all(|pair| match pair {
            (Some(a), Some(b)) => a
                .cells()
                .iter()
                .zip(b.cells())
                .all(|cells| matches!(cells, (Some(x), Some(y)) if x == y)),
            _ => false,
        })
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}x{} matrix", self.num_rows, self.num_cols)?;
        for slot in &self.rows {
            match slot {
                Some(row) => writeln!(f, "  {row}")?,
                None => writeln!(f, "  <empty>")?,
            }
        }
        Ok(())
    }
}
