//! Exact arithmetic and root-storage primitives for Kac-Moody root systems.
//!
//! Provides lowest-terms rational arithmetic ([`fraction::Fraction`]), the
//! root-vector value type ([`vector::RootVector`]), and the per-run root
//! cache ([`root::RootCache`]) that the recursion engine builds on.

pub mod fraction;
pub mod root;
pub mod vector;
