//! Height-by-height construction of a positive root system via Peterson's
//! recursion.
//!
//! The central invariant: height n is never started until every entry of
//! height < n has a committed multiplicity. Within one height, candidates
//! are independent (each reads only strictly lower heights), so they may
//! be resolved concurrently; the sequential commit loop that follows is the
//! barrier separating heights.

use crate::algebra::AlgebraModel;
use kmroots_core::fraction::{Fraction, NonIntegralError};
use kmroots_core::root::{Root, RootCache};
use kmroots_core::vector::RootVector;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use rayon::prelude::*;
use tracing::debug;

/// Fatal integrity failures of one construction run.
///
/// All of these are deterministic: retrying reproduces the same failure,
/// so the run is aborted and no cache state past the failing height is
/// usable.
#[derive(Debug, thiserror::Error)]
pub enum ConstructError {
    /// The recursion produced a non-integer multiplicity. Indicates a
    /// broken admissibility predicate, bilinear form, or recursion bug;
    /// never rounded or zeroed.
    #[error("multiplicity of {vector} is not integral: {source}")]
    NonIntegral {
        vector: RootVector,
        #[source]
        source: NonIntegralError,
    },

    /// The recursion produced a negative multiplicity: the same class of
    /// integrity failure as [`ConstructError::NonIntegral`], reported
    /// distinctly.
    #[error("multiplicity of {vector} is negative: {value}")]
    NegativeMultiplicity { vector: RootVector, value: BigInt },

    /// The recursion denominator `⟨β, β⟩ − 2⟨ρ, β⟩` vanished: the candidate
    /// lies on the recursion's singular locus. For the shipped algebra this
    /// cannot happen (multiples of real roots bypass the recursion and any
    /// other candidate of height ≥ 2 has a strictly negative denominator);
    /// the guard protects other algebra models.
    #[error("recursion denominator vanishes for {vector} (norm {norm})")]
    DegenerateDenominator { vector: RootVector, norm: i64 },
}

/// Recursive construction of a positive root system, strictly by height.
pub struct RootSystem<M: AlgebraModel> {
    algebra: M,
    cache: RootCache,
    /// Highest height whose entries are all committed.
    frontier: i64,
    parallel: bool,
}

impl<M: AlgebraModel> RootSystem<M> {
    /// A fresh system with nothing resolved; candidates within one height
    /// are resolved on the rayon pool.
    pub fn new(algebra: M) -> Self {
        Self::with_parallelism(algebra, true)
    }

    pub fn with_parallelism(algebra: M, parallel: bool) -> Self {
        Self {
            algebra,
            cache: RootCache::new(),
            frontier: 0,
            parallel,
        }
    }

    pub fn algebra(&self) -> &M {
        &self.algebra
    }

    pub fn cache(&self) -> &RootCache {
        &self.cache
    }

    /// Highest height fully resolved so far (0 before construction).
    pub fn frontier(&self) -> i64 {
        self.frontier
    }

    /// Construct every root up to and including `target_height`.
    ///
    /// Idempotent over already-resolved heights: constructing to H and then
    /// to H+1 resolves only height H+1, and never revisits a committed
    /// multiplicity.
    pub fn construct(&mut self, target_height: u32) -> Result<(), ConstructError> {
        while self.frontier < i64::from(target_height) {
            self.advance()?;
        }
        Ok(())
    }

    /// Resolve the next unresolved height and return it.
    pub fn advance(&mut self) -> Result<i64, ConstructError> {
        let height = self.frontier + 1;
        if height == 1 {
            self.seed_simple_roots();
        } else {
            self.resolve_height(height)?;
        }
        self.frontier = height;
        Ok(height)
    }

    /// Every bona fide root resolved so far, ordered by increasing height
    /// and lexicographically by vector within one height.
    pub fn roots(&self) -> Vec<&Root> {
        let mut roots: Vec<&Root> = self.cache.iter().filter(|r| r.is_root()).collect();
        roots.sort_by(|a, b| {
            a.height()
                .cmp(&b.height())
                .then_with(|| a.vector().cmp(b.vector()))
        });
        roots
    }

    /// The committed multiplicity of `vector`, if it has one.
    pub fn multiplicity(&self, vector: &RootVector) -> Option<&BigUint> {
        self.cache.get(vector).map(Root::multiplicity)
    }

    /// Height 1 is seeded directly from the algebra's simple roots with
    /// multiplicity 1, bypassing the recursion.
    fn seed_simple_roots(&mut self) {
        let simple = self.algebra.simple_roots();
        debug_assert!(simple.iter().all(|v| v.height() == 1));
        for vector in simple {
            let norm = self.algebra.norm(&vector);
            self.cache
                .insert(Root::new(vector, norm, BigUint::one(), Fraction::from_integer(1)));
        }
    }

    fn resolve_height(&mut self, height: i64) -> Result<(), ConstructError> {
        let candidates: Vec<RootVector> = compositions(height, self.algebra.rank())
            .into_iter()
            .filter(|v| self.algebra.is_admissible(v))
            .collect();

        let resolved: Vec<Result<Root, ConstructError>> = if self.parallel {
            candidates
                .into_par_iter()
                .map(|v| self.resolve_candidate(v))
                .collect()
        } else {
            candidates
                .into_iter()
                .map(|v| self.resolve_candidate(v))
                .collect()
        };

        // Committing sequentially is the barrier between heights: nothing of
        // height n becomes visible until every sibling candidate resolved.
        let mut entries = 0usize;
        let mut roots = 0usize;
        for result in resolved {
            let root = result?;
            entries += 1;
            if root.is_root() {
                roots += 1;
            }
            self.cache.insert(root);
        }
        debug!(height, entries, roots, "height resolved");
        Ok(())
    }

    /// Resolve one candidate of the current height, reading exclusively
    /// from committed entries of strictly lower heights.
    fn resolve_candidate(&self, vector: RootVector) -> Result<Root, ConstructError> {
        let norm = self.algebra.norm(&vector);
        let divisor_sum = self.divisor_sum(&vector);

        if norm > self.algebra.root_norm_bound() {
            // An integer multiple of a real root: not a root itself, but its
            // co-multiplicity feeds the Peterson sums of later heights. Its
            // divisor sum is exactly c(β) since mult(β) = 0, and resolving
            // it here keeps it off the recursion's singular locus.
            return Ok(Root::new(vector, norm, BigUint::zero(), divisor_sum));
        }

        let denominator = norm - 2 * self.algebra.weyl_pairing(&vector);
        if denominator == 0 {
            return Err(ConstructError::DegenerateDenominator { vector, norm });
        }

        // c(β) = S / (⟨β, β⟩ − 2⟨ρ, β⟩), then mult(β) = c(β) − Σ_{d ≥ 2}.
        let sum = self.peterson_sum(&vector);
        let co_multiplicity = &sum * &Fraction::new(1, denominator);
        let value = (&co_multiplicity - &divisor_sum)
            .to_integer()
            .map_err(|source| ConstructError::NonIntegral {
                vector: vector.clone(),
                source,
            })?;
        let multiplicity =
            value
                .to_biguint()
                .ok_or_else(|| ConstructError::NegativeMultiplicity {
                    vector: vector.clone(),
                    value: value.clone(),
                })?;

        Ok(Root::new(vector, norm, multiplicity, co_multiplicity))
    }

    /// `S = Σ ⟨α, γ⟩ · c(α) · c(γ)` over ordered decompositions
    /// `β = α + γ` with both parts already committed.
    ///
    /// Iterating α over every cached height 1..height(β) visits each
    /// ordered pair exactly once; a decomposition whose complement is not
    /// cached contributes nothing.
    fn peterson_sum(&self, vector: &RootVector) -> Fraction {
        let mut sum = Fraction::zero();
        for height in 1..vector.height() {
            for alpha in self.cache.at_height(height) {
                let Some(gamma_vector) = vector.checked_sub(alpha.vector()) else {
                    continue;
                };
                let Some(gamma) = self.cache.get(&gamma_vector) else {
                    continue;
                };
                let pairing = self.algebra.bilinear_form(alpha.vector(), gamma.vector());
                if pairing == 0 {
                    continue;
                }
                sum += &(alpha.co_multiplicity() * gamma.co_multiplicity()).scale(pairing);
            }
        }
        sum
    }

    /// `Σ_{d ≥ 2, β/d cached} mult(β/d) / d`, the divisor tail of the
    /// quasi-multiplicity. All divisors live at strictly lower heights, so
    /// every term is already final.
    fn divisor_sum(&self, vector: &RootVector) -> Fraction {
        let mut sum = Fraction::zero();
        for divisor in 2..=vector.highest() {
            let Some(divided) = vector.div(divisor) else {
                continue;
            };
            if let Some(entry) = self.cache.get(&divided) {
                sum += &Fraction::new(BigInt::from(entry.multiplicity().clone()), divisor);
            }
        }
        sum
    }
}

/// Every composition of `total` into `rank` non-negative parts, in
/// lexicographic order of the leading components.
fn compositions(total: i64, rank: usize) -> Vec<RootVector> {
    fn recurse(remaining: i64, slot: usize, scratch: &mut [i64], out: &mut Vec<RootVector>) {
        if slot + 1 == scratch.len() {
            scratch[slot] = remaining;
            out.push(RootVector::new(scratch.to_vec()));
            return;
        }
        for value in 0..=remaining {
            scratch[slot] = value;
            recurse(remaining - value, slot + 1, scratch, out);
        }
    }

    let mut out = Vec::new();
    if rank == 0 {
        return out;
    }
    let mut scratch = vec![0i64; rank];
    recurse(total, 0, &mut scratch, &mut out);
    out
}
