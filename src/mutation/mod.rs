//! Incremental-cost TSP mutation operators.
//!
//! Every operator works on the path representation of a symmetric tour. It
//! reads the tour, draws cut positions and returns a [`Mutation`] carrying
//! the length the tour *would* have, computed from the handful of edges the
//! move touches. The tour is only changed when the caller commits the
//! descriptor with [`Mutation::apply`].
//!
//! # Operators
//!
//! - [`double_bridge`]: segment reversal between two cuts, 2 edges replaced
//! - [`swap`]: exchange two cities, 2 or 4 edges replaced
//! - [`displacement`]: move one city elsewhere, 3 edges replaced
//!
//! # References
//!
//! - Larrañaga et al. (1999), "Genetic Algorithms for the Travelling
//!   Salesman Problem: A Review of Representations and Operators"
//! - Burke & Bykov (2017), "The Late Acceptance Hill-Climbing Heuristic"

mod operators;
mod types;

pub use operators::{
    displacement, displacement_at, double_bridge, double_bridge_at, propose, swap, swap_at,
    MIN_CITIES,
};
pub use types::{Mutation, MutationKind};
