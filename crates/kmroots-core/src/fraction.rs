//! Exact arbitrary-precision rational arithmetic.
//!
//! Peterson's recursion accumulates sums of products of fractions whose
//! numerators and denominators reach hundreds of digits, so every operation
//! here is exact and every produced value is reduced to lowest terms.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A rational number kept in lowest terms with a positive denominator.
///
/// Invariants: `denominator > 0`, `gcd(|numerator|, denominator) = 1`, and
/// zero is always represented as `0/1`. Values are never mutated after
/// construction; arithmetic returns new, normalized instances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

/// Signalled by [`Fraction::to_integer`] when the value is not an integer.
///
/// Carries the offending pair so the caller can report exactly which
/// division went wrong instead of coercing to an approximate value.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{numerator} / {denominator} is not an integer")]
pub struct NonIntegralError {
    pub numerator: BigInt,
    pub denominator: BigInt,
}

impl Fraction {
    /// Build a fraction from a raw numerator/denominator pair and reduce it.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        let numerator = numerator.into();
        let denominator = denominator.into();
        assert!(!denominator.is_zero(), "fraction denominator must be non-zero");
        Self {
            numerator,
            denominator,
        }
        .normalized()
    }

    pub fn zero() -> Self {
        Self {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    pub fn from_integer(numerator: impl Into<BigInt>) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Reduce to lowest terms via Euclidean GCD, with a positive denominator.
    fn normalized(mut self) -> Self {
        if self.numerator.is_zero() {
            self.denominator = BigInt::one();
            return self;
        }
        if self.denominator.is_negative() {
            self.numerator = -self.numerator;
            self.denominator = -self.denominator;
        }
        let gcd = self.numerator.gcd(&self.denominator);
        if !gcd.is_one() {
            self.numerator /= &gcd;
            self.denominator /= &gcd;
        }
        self
    }

    /// Multiply by an integer.
    pub fn scale(&self, factor: impl Into<BigInt>) -> Self {
        Self::new(&self.numerator * factor.into(), self.denominator.clone())
    }

    /// Extract the exact integer value.
    ///
    /// Callers invoke this only where the result is provably integral; a
    /// non-unit denominator means the surrounding computation is broken, so
    /// the offending pair is handed back for the caller to report.
    pub fn to_integer(&self) -> Result<BigInt, NonIntegralError> {
        if self.denominator.is_one() {
            Ok(self.numerator.clone())
        } else {
            Err(NonIntegralError {
                numerator: self.numerator.clone(),
                denominator: self.denominator.clone(),
            })
        }
    }
}

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, other: &Fraction) -> Fraction {
        Fraction::new(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }
}

impl Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, other: &Fraction) -> Fraction {
        Fraction::new(
            &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, other: &Fraction) -> Fraction {
        Fraction::new(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }
}

impl AddAssign<&Fraction> for Fraction {
    fn add_assign(&mut self, other: &Fraction) {
        *self = &*self + other;
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
