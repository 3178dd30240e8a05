//! The narrow contract an algebra supplies to the recursion engine.
//!
//! Peterson's recursion is algebra-agnostic: everything specific to one
//! Kac-Moody algebra (its bilinear form, Weyl vector, simple roots, and
//! which integer vectors can carry a cache entry at all) enters through
//! this trait. The engine never hard-codes any of it.

use kmroots_core::vector::RootVector;

/// Capability set the recursion engine needs from a Kac-Moody algebra.
///
/// Implementations must be cheap to call: the engine invokes
/// `bilinear_form` once per candidate decomposition, which dominates the
/// inner loop.
pub trait AlgebraModel: Sync {
    /// Dimension of every root vector this model produces or accepts.
    fn rank(&self) -> usize;

    /// The algebra's symmetric invariant bilinear form `⟨v, w⟩`.
    fn bilinear_form(&self, v: &RootVector, w: &RootVector) -> i64;

    /// Pairing `⟨ρ, v⟩` of the algebra's Weyl vector with `v`.
    ///
    /// The Weyl vector enters the recursion only through this pairing (the
    /// denominator term `⟨β, β⟩ − 2⟨ρ, β⟩`), so the capability is exposed
    /// as the pairing rather than as coordinates.
    fn weyl_pairing(&self, v: &RootVector) -> i64;

    /// The height-1 seed roots, each with multiplicity 1.
    fn simple_roots(&self) -> Vec<RootVector>;

    /// Whether `v` may carry a cache entry.
    ///
    /// Must accept every vector that is a root of the algebra or an integer
    /// multiple of one; the engine never recurses on a rejected vector.
    fn is_admissible(&self, v: &RootVector) -> bool;

    /// The largest norm a bona fide root can have (the maximum diagonal
    /// entry of the symmetrized Cartan matrix). Admissible vectors above
    /// this bound are multiples of real roots: co-multiplicity carriers
    /// with multiplicity 0.
    fn root_norm_bound(&self) -> i64;

    /// The bilinear form of `v` with itself.
    fn norm(&self, v: &RootVector) -> i64 {
        self.bilinear_form(v, v)
    }
}
