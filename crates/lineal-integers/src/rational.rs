//! Arbitrary precision rational numbers.
//!
//! Every matrix cell in `lineal` is one of these: an exact fraction with no
//! floating-point rounding anywhere in the pipeline.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::integer::{parse_digits, split_sign};
use crate::{Integer, ParseRationalError};

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// A negative denominator moves its sign onto the numerator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        let numerator = if denominator.is_negative() {
            -numerator
        } else {
            numerator
        };
        Self(RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        ))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(dashu::integer::IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self(self.0.clone().inv())
    }

    /// Exact division, or `None` when `rhs` is zero.
    #[must_use]
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(Self(&self.0 / &rhs.0))
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

/// Reads `whole.frac` (the sign lives on `whole`) as an exact fraction over
/// a power of ten.
fn parse_decimal(text: &str, whole: &str, frac: &str) -> Result<Rational, ParseRationalError> {
    let invalid = || ParseRationalError::InvalidDigits(text.to_owned());
    let (negative, whole) = split_sign(whole);
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid());
    }

    let whole = if whole.is_empty() {
        Integer::zero()
    } else {
        parse_digits(whole).ok_or_else(invalid)?
    };
    let frac_digits = if frac.is_empty() {
        Integer::zero()
    } else {
        parse_digits(frac).ok_or_else(invalid)?
    };

    let scale = Integer::new(10).pow(frac.len());
    let magnitude = whole * &scale + frac_digits;
    let numerator = if negative { -magnitude } else { magnitude };
    Ok(Rational::new(numerator, scale))
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Accepts `"-12"`, `"1/5"`, `"-3/-4"` and `"0.25"` style text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();

        if let Some((num, den)) = text.split_once('/') {
            let invalid = |_| ParseRationalError::InvalidDigits(text.to_owned());
            let numerator = Integer::parse_decimal(num.trim()).map_err(invalid)?;
            let denominator = Integer::parse_decimal(den.trim()).map_err(invalid)?;
            if denominator.is_zero() {
                return Err(ParseRationalError::ZeroDenominator(text.to_owned()));
            }
            return Ok(Self::new(numerator, denominator));
        }

        if let Some((whole, frac)) = text.split_once('.') {
            return parse_decimal(text, whole, frac);
        }

        Integer::parse_decimal(text)
            .map(Self::from_integer)
            .map_err(|_| ParseRationalError::InvalidDigits(text.to_owned()))
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        Rational(&self.0 / &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::new(i64::from(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Rational::from_i64(1, 2);
        let b = Rational::from_i64(1, 3);

        // 1/2 + 1/3 = 5/6
        let sum = &a + &b;
        assert_eq!(sum, Rational::from_i64(5, 6));

        // 1/2 - 1/3 = 1/6
        assert_eq!(&a - &b, Rational::from_i64(1, 6));

        // 1/2 / 1/3 = 3/2
        assert_eq!(&a / &b, Rational::from_i64(3, 2));
    }

    #[test]
    fn test_reduction() {
        // 4/6 should reduce to 2/3
        let r = Rational::from_i64(4, 6);
        assert_eq!(r.numerator().to_i64(), Some(2));
        assert_eq!(r.denominator().to_i64(), Some(3));
    }

    #[test]
    fn test_negative_denominator() {
        let r = Rational::from_i64(1, -2);
        assert_eq!(r.numerator().to_i64(), Some(-1));
        assert_eq!(r.denominator().to_i64(), Some(2));
        assert_eq!(r.signum(), -1);
    }

    #[test]
    fn test_checked_div() {
        let a = Rational::from(3);
        assert_eq!(a.checked_div(&Rational::zero()), None);
        assert_eq!(a.checked_div(&Rational::from(6)), Some(Rational::from_i64(1, 2)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rational::from_i64(3, 1).to_string(), "3");
        assert_eq!(Rational::from_i64(2, 3).to_string(), "2/3");
        assert_eq!(Rational::from_i64(-2, 3).to_string(), "-2/3");
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!("1/5".parse::<Rational>(), Ok(Rational::from_i64(1, 5)));
        assert_eq!(" -6 / 4 ".parse::<Rational>(), Ok(Rational::from_i64(-3, 2)));
        assert_eq!("3/-4".parse::<Rational>(), Ok(Rational::from_i64(-3, 4)));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!("0.25".parse::<Rational>(), Ok(Rational::from_i64(1, 4)));
        assert_eq!("-.5".parse::<Rational>(), Ok(Rational::from_i64(-1, 2)));
        assert_eq!("12.".parse::<Rational>(), Ok(Rational::from(12)));
        assert_eq!("-1.125".parse::<Rational>(), Ok(Rational::from_i64(-9, 8)));
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(
            "1/0".parse::<Rational>(),
            Err(ParseRationalError::ZeroDenominator("1/0".to_owned()))
        );
        assert!("".parse::<Rational>().is_err());
        assert!(".".parse::<Rational>().is_err());
        assert!("1/2/3".parse::<Rational>().is_err());
        assert!("one".parse::<Rational>().is_err());
        assert!("1.2.3".parse::<Rational>().is_err());
    }
}
