//! Error type shared by every fallible matrix operation.

use lineal_integers::ParseRationalError;
use thiserror::Error;

/// Why a matrix operation refused to run.
///
/// Every variant is a precondition failure: the operation leaves its inputs
/// untouched, so the caller can recover and retry with different arguments.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// An operand has missing rows or cells.
    #[error("matrix is degenerate: missing rows or cells")]
    Degenerate,

    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch: {left:?} vs {right:?}")]
    DimensionMismatch {
        /// `(rows, cols)` of the left operand.
        left: (usize, usize),
        /// `(rows, cols)` of the right operand.
        right: (usize, usize),
    },

    /// A cell address lies outside the declared shape.
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} matrix")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        cols: usize,
    },

    /// Every row slot is already populated.
    #[error("matrix has no empty row left")]
    MatrixFull,

    /// An input value could not be read as a rational.
    #[error(transparent)]
    Coercion(#[from] ParseRationalError),
}
