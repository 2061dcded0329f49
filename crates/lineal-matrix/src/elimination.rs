//! Single-pass Gaussian elimination.
//!
//! The pass sorts the rows in descending lexicographic order and then, for
//! each row `i`, cancels the pivot of every later row that shares row `i`'s
//! leading-zero count. Rows whose pivots do not line up are left alone, so
//! this is one forward sweep and not a full Gauss-Jordan reduction.

use lineal_integers::Rational;
use tracing::trace;

use crate::matrix::Matrix;
use crate::row::Row;

/// Cancels the shared pivot of `target` against `reference`.
///
/// If both rows have the same leading-zero count `p` and `reference` is not
/// all zeros, returns `reference - (reference[p] / target[p]) * target` and
/// `true`. Otherwise `target` comes back unchanged together with the flag
/// `lz(reference) >= lz(target)`.
///
/// A pivot or any other cell left unset also returns `target` unchanged, with
/// the flag `false`.
#[must_use]
pub fn reduce_pair(reference: &Row, target: &Row) -> (Row, bool) {
    let lz_reference = reference.leading_zeros();
    let lz_target = target.leading_zeros();
    if lz_reference != lz_target || lz_reference == reference.len() {
        return (target.clone(), lz_reference >= lz_target);
    }

    let ratio = match (pivot(reference), pivot(target)) {
        (Some(a), Some(b)) => a.checked_div(b),
        _ => None,
    };
    let Some(ratio) = ratio else {
        return (target.clone(), false);
    };

    let reduced = reference
        .cells()
        .iter()
        .zip(target.cells())
        .map(|cells| match cells {
            (Some(a), Some(b)) => Some(a - &(b * &ratio)),
            _ => None,
        })
        .collect::<Option<Row>>();

    match reduced {
        Some(row) => (row, true),
        None => (target.clone(), false),
    }
}

/// Stable sort, larger rows first. Unwritten rows sink to the bottom.
pub(crate) fn sort_descending(rows: &mut [Option<Row>]) {
    rows.sort_by(|a, b| b.cmp(a));
}

impl Matrix {
    /// Runs one elimination pass in place.
    pub fn gaussian_eliminate(&mut self) {
        let mut rows = std::mem::take(&mut self.rows);
        sort_descending(&mut rows);

        for i in 0..rows.len() {
            let (head, tail) = rows.split_at_mut(i + 1);
            let Some(reference) = &head[i] else {
                continue;
            };
            for (offset, slot) in tail.iter_mut().enumerate() {
                if let Some(target) = slot {
                    let (reduced, changed) = reduce_pair(reference, target);
                    trace!(reference = i, target = i + 1 + offset, changed, "reduce row");
                    *target = reduced;
                }
            }
        }

        self.rows = rows;
    }

    /// Consumes the matrix and returns it after one elimination pass.
    #[must_use]
    pub fn after_gaussian_elimination(mut self) -> Self {
        self.gaussian_eliminate();
        self
    }
}

/// Returns the pivot value of `row`, if it has one.
#[must_use]
pub fn pivot(row: &Row) -> Option<&Rational> {
    row.get(row.leading_zeros())
}
