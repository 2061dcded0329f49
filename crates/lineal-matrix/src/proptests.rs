//! Property-based tests for matrix algebra and elimination.

#[cfg(test)]
mod tests {
    use lineal_integers::Rational;
    use proptest::prelude::*;

    use crate::{Matrix, ParallelConfig};

    fn entry() -> impl Strategy<Value = i64> {
        -20i64..20i64
    }

    fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
        prop::collection::vec(prop::collection::vec(entry(), cols), rows).prop_map(move |data| {
            let mut m = Matrix::new(rows, cols);
            for r in data {
                m.add_row(r).unwrap();
            }
            m
        })
    }

    fn shaped_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
        (1usize..5, 1usize..5, 1usize..5)
            .prop_flat_map(|(r, k, c)| (matrix(r, k), matrix(k, c)))
    }

    fn square() -> impl Strategy<Value = Matrix> {
        (1usize..6).prop_flat_map(|n| matrix(n, n))
    }

    proptest! {
        #[test]
        fn add_is_cellwise(
            (a, b) in (1usize..5, 1usize..5).prop_flat_map(|(r, c)| (matrix(r, c), matrix(r, c)))
        ) {
            let sum = a.checked_add(&b).unwrap();
            for i in 0..a.num_rows() {
                for j in 0..a.num_cols() {
                    let expected = a.get(i, j).unwrap() + b.get(i, j).unwrap();
                    prop_assert_eq!(sum.get(i, j), Some(&expected));
                }
            }
        }

        #[test]
        fn add_commutes(
            (a, b) in (1usize..5, 1usize..5).prop_flat_map(|(r, c)| (matrix(r, c), matrix(r, c)))
        ) {
            prop_assert_eq!(a.checked_add(&b).unwrap(), b.checked_add(&a).unwrap());
        }

        #[test]
        fn zero_is_additive_identity(m in square()) {
            let n = m.num_rows();
            prop_assert_eq!(m.checked_add(&Matrix::zeros(n, n)).unwrap(), m);
        }

        #[test]
        fn identity_is_multiplicative_identity(m in square()) {
            let n = m.num_rows();
            prop_assert_eq!(Matrix::identity(n).multiply(&m).unwrap(), m.clone());
            prop_assert_eq!(m.multiply(&Matrix::identity(n)).unwrap(), m);
        }

        #[test]
        fn product_cells_are_dot_products((a, b) in shaped_pair()) {
            let c = a.multiply(&b).unwrap();
            prop_assert_eq!(c.shape(), (a.num_rows(), b.num_cols()));
            for i in 0..a.num_rows() {
                for j in 0..b.num_cols() {
                    let mut expected = Rational::from(0);
                    for k in 0..a.num_cols() {
                        expected = expected + a.get(i, k).unwrap() * b.get(k, j).unwrap();
                    }
                    prop_assert_eq!(c.get(i, j), Some(&expected));
                }
            }
        }

        #[test]
        fn parallel_multiply_matches_sequential((a, b) in shaped_pair()) {
            prop_assert_eq!(
                a.multiply_with(&b, &ParallelConfig::always()).unwrap(),
                a.multiply(&b).unwrap()
            );
        }

        #[test]
        fn equals_is_reflexive_and_symmetric(m in square()) {
            let copy = m.clone();
            prop_assert!(m.equals(&m));
            prop_assert_eq!(m.equals(&copy), copy.equals(&m));
        }

        #[test]
        fn elimination_keeps_first_row_maximal(m in square()) {
            let max = m.rows().flatten().max().cloned();
            let reduced = m.after_gaussian_elimination();
            prop_assert_eq!(reduced.row(0).cloned(), max);
        }

        #[test]
        fn elimination_keeps_matrix_complete(m in square()) {
            let reduced = m.after_gaussian_elimination();
            prop_assert!(reduced.is_complete());
            prop_assert!(!reduced.is_degenerate());
            prop_assert!(reduced.is_fully_set());
        }

        #[test]
        fn parallel_elimination_matches_sequential(m in square()) {
            let mut parallel = m.clone();
            parallel.gaussian_eliminate_with(&ParallelConfig::always());
            prop_assert_eq!(parallel, m.after_gaussian_elimination());
        }

        #[test]
        fn reduced_echelon_implies_echelon(m in square()) {
            prop_assert!(!m.is_reduced_echelon_form() || m.is_echelon_form());
        }
    }
}
