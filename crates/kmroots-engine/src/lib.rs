//! Recursive construction of Kac-Moody positive root systems.
//!
//! The engine ([`system::RootSystem`]) is generic over the narrow
//! [`algebra::AlgebraModel`] contract; the one model that ships is the
//! rank-3 hyperbolic Feingold-Frenkel algebra
//! ([`feingold_frenkel::FeingoldFrenkel`]). Results are exported as a plain
//! text or JSON listing ([`export`]).

pub mod algebra;
pub mod config;
pub mod export;
pub mod feingold_frenkel;
pub mod system;
