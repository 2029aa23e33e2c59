//! Exhaustive route enumeration.
//!
//! - [`Permutations`] — lazy lexicographic permutation iterator
//! - [`RouteSet`] — all `(n-1)!` closed routes anchored at the first city

mod permutations;
mod route_set;

pub use permutations::Permutations;
pub use route_set::RouteSet;
