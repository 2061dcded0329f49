//! Parallel evaluation of the independent parts of multiplication and
//! elimination.
//!
//! Every output cell of a product is its own dot product, and within one
//! elimination step every later row is reduced against the same reference
//! row. Both fan out over rayon's work-stealing pool and write disjoint
//! slots, so results match the sequential versions exactly.

use rayon::prelude::*;
use tracing::trace;

use crate::elimination::{reduce_pair, sort_descending};
use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Configuration for parallel evaluation.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum work size (product cells, or rows for elimination) before
    /// work is spread across threads.
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }
}

impl ParallelConfig {
    /// A configuration that never goes parallel.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// A configuration that always goes parallel.
    #[must_use]
    pub fn always() -> Self {
        Self {
            parallel_threshold: 0,
        }
    }
}

impl Matrix {
    /// Matrix product, computing output cells in parallel once the result
    /// has at least `config.parallel_threshold` cells.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::multiply`].
    pub fn multiply_with(&self, other: &Self, config: &ParallelConfig) -> Result<Self, MatrixError> {
        let cells = self.num_rows().saturating_mul(other.num_cols());
        if cells < config.parallel_threshold {
            return self.multiply(other);
        }

        let (rows, cols) = self.multiplication_operands(other)?;
        trace!(cells, "parallel multiply");
        let values = rows
            .par_iter()
            .map(|row| {
                cols.iter()
                    .map(|col| row.dot(col))
                    .collect::<Option<Vec<_>>>()
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(MatrixError::Degenerate)?;

        let mut result = Self::zeros(self.num_rows(), other.num_cols());
        for (i, row) in values.into_iter().enumerate() {
            for (j, value) in row.into_iter().enumerate() {
                result.set_value(i, j, value);
            }
        }
        Ok(result)
    }

    /// One elimination pass, reducing the rows below each reference row in
    /// parallel once the matrix has at least `config.parallel_threshold` rows.
    pub fn gaussian_eliminate_with(&mut self, config: &ParallelConfig) {
        if self.num_rows() < config.parallel_threshold {
            self.gaussian_eliminate();
            return;
        }

        let mut rows = std::mem::take(&mut self.rows);
        sort_descending(&mut rows);

        for i in 0..rows.len() {
            let (head, tail) = rows.split_at_mut(i + 1);
            let Some(reference) = &head[i] else {
                continue;
            };
            tail.par_iter_mut().for_each(|slot| {
                if let Some(target) = slot {
                    *target = reduce_pair(reference, target).0;
                }
            });
        }

        self.rows = rows;
    }
}
