//! Symmetric TSP problem layer.
//!
//! The search core only needs three things from an instance: the number of
//! cities, a pairwise distance and the closed-tour length. [`TspInstance`]
//! is that seam; [`DistanceMatrix`] is the in-memory implementation used by
//! callers that already have distances or coordinates at hand.

mod matrix;
mod types;

pub use matrix::{DistanceMatrix, EdgeWeight};
pub use types::{is_valid_tour, TspInstance};
