//! Root vectors: fixed-length integer coordinate tuples in the simple-root
//! basis of the algebra.

use num_integer::Integer;
use serde::Serialize;
use std::fmt;

/// Coordinates of a (candidate) root in the simple-root basis.
///
/// Immutable once constructed. Equality and hashing are purely structural:
/// two vectors with identical components are the same value, regardless of
/// where they were allocated. The derived `Ord` is lexicographic on the
/// components, which is the export tie-break within one height.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RootVector(Vec<i64>);

impl RootVector {
    pub fn new(components: Vec<i64>) -> Self {
        Self(components)
    }

    pub fn components(&self) -> &[i64] {
        &self.0
    }

    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Sum of components: the grading level of the recursive construction.
    pub fn height(&self) -> i64 {
        self.0.iter().sum()
    }

    /// The largest component.
    pub fn highest(&self) -> i64 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Divide every component by `factor`.
    ///
    /// Returns `None` if any component is not evenly divisible. A partial
    /// or truncated quotient is never produced; indivisibility is an
    /// expected outcome at most call sites, not an error.
    pub fn div(&self, factor: i64) -> Option<Self> {
        let mut quotient = Vec::with_capacity(self.0.len());
        for &component in &self.0 {
            if component % factor != 0 {
                return None;
            }
            quotient.push(component / factor);
        }
        Some(Self(quotient))
    }

    /// Multiply every component by `factor`.
    pub fn scale(&self, factor: i64) -> Self {
        Self(self.0.iter().map(|c| c * factor).collect())
    }

    /// Componentwise difference, or `None` if any component would go
    /// negative. Used to probe decompositions `beta = alpha + gamma`.
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        let mut difference = Vec::with_capacity(self.0.len());
        for (a, b) in self.0.iter().zip(&other.0) {
            if a < b {
                return None;
            }
            difference.push(a - b);
        }
        Some(Self(difference))
    }

    /// Greatest common divisor of the components (0 for the zero vector).
    pub fn content(&self) -> i64 {
        self.0.iter().fold(0, |acc, &c| acc.gcd(&c))
    }
}

impl<const N: usize> From<[i64; N]> for RootVector {
    fn from(components: [i64; N]) -> Self {
        Self(components.to_vec())
    }
}

impl fmt::Display for RootVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{component}")?;
        }
        write!(f, ")")
    }
}
