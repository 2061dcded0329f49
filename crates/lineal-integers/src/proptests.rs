//! Property-based tests for exact arithmetic and coercion.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Rational, Scalar};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        // Rational field axioms

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                &a * &(&b + &c),
                &a * &b + &a * &c
            );
        }

        #[test]
        fn rational_sub_then_add(a in rational(), b in rational()) {
            prop_assert_eq!(&(&a - &b) + &b, a);
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let product = &a * &a.recip();
            prop_assert!(product.is_one());
        }

        #[test]
        fn rational_signum_matches_order(a in rational()) {
            let expected = match a.cmp(&Rational::zero()) {
                std::cmp::Ordering::Less => -1,
                std::cmp::Ordering::Equal => 0,
                std::cmp::Ordering::Greater => 1,
            };
            prop_assert_eq!(a.signum(), expected);
        }

        // Coercion

        #[test]
        fn display_text_coerces_back(a in rational()) {
            prop_assert_eq!(Scalar::from(a.to_string()).coerce(), Ok(a));
        }

        #[test]
        fn integer_text_matches_integer(n in any::<i64>()) {
            prop_assert_eq!(Scalar::from(n.to_string()).coerce(), Scalar::from(n).coerce());
        }

        #[test]
        fn fraction_text_matches_constructor(num in small_int(), den in non_zero_int()) {
            let text = format!("{num}/{den}");
            prop_assert_eq!(Scalar::from(text).coerce(), Ok(Rational::from_i64(num, den)));
        }
    }
}
