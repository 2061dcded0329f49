//! Row-echelon classification from leading-zero counts.

use crate::matrix::Matrix;
use crate::row::Row;

impl Row {
    /// Number of zero cells before the first nonzero or unset cell.
    ///
    /// Equals [`Row::len`] for a row of zeros.
    #[must_use]
    pub fn leading_zeros(&self) -> usize {
        self.cells()
            .iter()
            .take_while(|cell| cell.as_ref().is_some_and(|v| v.signum() == 0))
            .count()
    }

    /// True if every cell is zero (vacuously true for an empty row).
    #[must_use]
    pub fn is_zero_row(&self) -> bool {
        self.leading_zeros() == self.len()
    }
}

impl Matrix {
    /// True if leading-zero counts never decrease down the matrix.
    ///
    /// Rows of zeros (and unwritten rows) are skipped wherever they appear.
    #[must_use]
    pub fn is_echelon_form(&self) -> bool {
        self.leading_zeros_ordered(false)
    }

    /// True if leading-zero counts strictly increase down the matrix.
    ///
    /// Rows of zeros (and unwritten rows) are skipped wherever they appear.
    #[must_use]
    pub fn is_reduced_echelon_form(&self) -> bool {
        self.leading_zeros_ordered(true)
    }

    fn leading_zeros_ordered(&self, strict: bool) -> bool {
        let mut previous: Option<usize> = None;
        for row in self.rows().flatten() {
            if row.is_zero_row() {
                continue;
            }
            let zeros = row.leading_zeros();
            if let Some(prev) = previous {
                if zeros < prev || (strict && zeros == prev) {
                    return false;
                }
            }
            previous = Some(zeros);
        }
        true
    }
}
