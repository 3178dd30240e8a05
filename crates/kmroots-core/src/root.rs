//! Root entities and the per-run cache keyed by root vector.

use crate::fraction::Fraction;
use crate::vector::RootVector;
use num_bigint::BigUint;
use num_traits::Zero;
use std::collections::HashMap;

/// A resolved cache entry: a root vector together with its finalized
/// computation state.
///
/// Entries are committed fully formed and never mutated afterwards. An
/// entry whose multiplicity is zero is not a root of the algebra — it is an
/// integer multiple of a real root, kept because its co-multiplicity feeds
/// the Peterson sums of higher heights.
#[derive(Clone, Debug)]
pub struct Root {
    vector: RootVector,
    norm: i64,
    multiplicity: BigUint,
    co_multiplicity: Fraction,
}

impl Root {
    pub fn new(
        vector: RootVector,
        norm: i64,
        multiplicity: BigUint,
        co_multiplicity: Fraction,
    ) -> Self {
        Self {
            vector,
            norm,
            multiplicity,
            co_multiplicity,
        }
    }

    pub fn vector(&self) -> &RootVector {
        &self.vector
    }

    /// The bilinear form of the vector with itself.
    pub fn norm(&self) -> i64 {
        self.norm
    }

    /// Dimension of the root space; zero for scaled non-root entries.
    pub fn multiplicity(&self) -> &BigUint {
        &self.multiplicity
    }

    /// The divisor-sum quasi-multiplicity c(α) = Σ_{d | α} mult(α/d) / d.
    pub fn co_multiplicity(&self) -> &Fraction {
        &self.co_multiplicity
    }

    pub fn height(&self) -> i64 {
        self.vector.height()
    }

    /// Whether this entry is a bona fide root of the algebra.
    pub fn is_root(&self) -> bool {
        !self.multiplicity.is_zero()
    }
}

/// Write-once cache of every resolved entry, keyed by vector, with a
/// by-height index for decomposition scans.
///
/// Grows monotonically; entries are never removed or mutated once inserted.
/// Owned exclusively by one construction run, so independent runs (tests,
/// parallel experiments) share no state.
#[derive(Debug, Default)]
pub struct RootCache {
    by_vector: HashMap<RootVector, Root>,
    by_height: Vec<Vec<RootVector>>,
}

impl RootCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_vector.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_vector.is_empty()
    }

    pub fn get(&self, vector: &RootVector) -> Option<&Root> {
        self.by_vector.get(vector)
    }

    pub fn contains(&self, vector: &RootVector) -> bool {
        self.by_vector.contains_key(vector)
    }

    /// Insert a finalized entry. Each vector is inserted at most once per
    /// run; a second insert for the same vector is a bug in the caller.
    pub fn insert(&mut self, root: Root) {
        let height = usize::try_from(root.height()).expect("root height must be positive");
        assert!(height > 0, "root height must be positive");
        if self.by_height.len() < height {
            self.by_height.resize(height, Vec::new());
        }
        self.by_height[height - 1].push(root.vector().clone());
        let previous = self.by_vector.insert(root.vector().clone(), root);
        debug_assert!(previous.is_none(), "cache entries are write-once");
    }

    /// All entries of the given height, in insertion order.
    pub fn at_height(&self, height: i64) -> impl Iterator<Item = &Root> {
        let vectors = usize::try_from(height)
            .ok()
            .and_then(|h| h.checked_sub(1))
            .and_then(|idx| self.by_height.get(idx))
            .map_or(&[] as &[RootVector], Vec::as_slice);
        vectors.iter().map(|v| {
            self.by_vector
                .get(v)
                .expect("height index out of sync with vector map")
        })
    }

    /// The highest height any entry has been committed for.
    pub fn max_height(&self) -> i64 {
        self.by_height.len() as i64
    }

    pub fn iter(&self) -> impl Iterator<Item = &Root> {
        self.by_vector.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn entry(components: [i64; 3], multiplicity: u32) -> Root {
        Root::new(
            RootVector::from(components),
            2,
            BigUint::from(multiplicity),
            Fraction::from_integer(i64::from(multiplicity)),
        )
    }

    #[test]
    fn test_insert_and_get() {
        let mut cache = RootCache::new();
        cache.insert(entry([1, 0, 0], 1));
        cache.insert(entry([1, 1, 0], 1));

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(&RootVector::from([1, 0, 0])));
        let root = cache.get(&RootVector::from([1, 1, 0])).unwrap();
        assert_eq!(root.height(), 2);
        assert!(root.is_root());
    }

    #[test]
    fn test_lookup_is_by_value_not_identity() {
        let mut cache = RootCache::new();
        cache.insert(entry([2, 1, 0], 1));
        // A freshly built vector with the same components finds the entry.
        assert!(cache.contains(&RootVector::new(vec![2, 1, 0])));
    }

    #[test]
    fn test_at_height() {
        let mut cache = RootCache::new();
        cache.insert(entry([1, 0, 0], 1));
        cache.insert(entry([0, 1, 0], 1));
        cache.insert(entry([1, 1, 0], 1));

        assert_eq!(cache.at_height(1).count(), 2);
        assert_eq!(cache.at_height(2).count(), 1);
        assert_eq!(cache.at_height(3).count(), 0);
        assert_eq!(cache.at_height(-1).count(), 0);
        assert_eq!(cache.max_height(), 2);
    }

    #[test]
    fn test_scaled_entry_is_not_a_root() {
        let scaled = Root::new(
            RootVector::from([2, 0, 0]),
            8,
            BigUint::zero(),
            Fraction::new(1, 2),
        );
        assert!(!scaled.is_root());
        assert_eq!(scaled.co_multiplicity(), &Fraction::new(1, 2));
    }
}
