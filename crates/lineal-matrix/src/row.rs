//! Row vectors of optionally-unset rational cells.

use std::fmt;

use lineal_integers::Rational;
use num_traits::Zero;

/// A fixed-length sequence of cells, each an exact rational or unset.
///
/// Rows order lexicographically: cells are compared left to right, an unset
/// cell sorts below any value, and a strict prefix sorts below the longer row.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Row {
    cells: Vec<Option<Rational>>,
}

impl Row {
    /// Creates a row of `len` unset cells.
    #[must_use]
    pub fn unset(len: usize) -> Self {
        Self {
            cells: vec![None; len],
        }
    }

    /// Creates a row of `len` zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            cells: vec![Some(Rational::zero()); len],
        }
    }

    /// Returns the number of cells, set or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the value at `index`, or `None` if unset or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Rational> {
        self.cells.get(index).and_then(Option::as_ref)
    }

    /// Writes `value` at `index`. Returns false if `index` is out of range.
    pub fn set(&mut self, index: usize, value: Rational) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = Some(value);
                true
            }
            None => false,
        }
    }

    /// Returns the raw cells.
    #[must_use]
    pub fn cells(&self) -> &[Option<Rational>] {
        &self.cells
    }

    /// Returns true if every cell holds a value.
    #[must_use]
    pub fn is_fully_set(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Elementwise product. A cell is unset if it is unset on either side.
    #[must_use]
    pub fn hadamard(&self, other: &Self) -> Self {
        self.cells
            .iter()
            .zip(&other.cells)
            .map(|(a, b)| match (a, b) {
                (Some(a), Some(b)) => Some(a * b),
                _ => None,
            })
            .collect()
    }

    /// Sum of all cells, or `None` if any cell is unset.
    #[must_use]
    pub fn sum(&self) -> Option<Rational> {
        self.cells
            .iter()
            .try_fold(Rational::zero(), |acc, cell| cell.as_ref().map(|v| acc + v))
    }

    /// Dot product, or `None` if any participating cell is unset.
    #[must_use]
    pub fn dot(&self, other: &Self) -> Option<Rational> {
        self.hadamard(other).sum()
    }
}

impl FromIterator<Option<Rational>> for Row {
    fn from_iter<T: IntoIterator<Item = Option<Rational>>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<Rational> for Row {
    fn from_iter<T: IntoIterator<Item = Rational>>(iter: T) -> Self {
        iter.into_iter().map(Some).collect()
    }
}

impl From<Vec<Rational>> for Row {
    fn from(values: Vec<Rational>) -> Self {
        values.into_iter().collect()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match cell {
                Some(value) => write!(f, "{value}")?,
                None => write!(f, "_")?,
            }
        }
        write!(f, "]")
    }
}
