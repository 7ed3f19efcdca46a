//! Late Acceptance Hill-Climbing for the symmetric Travelling Salesman
//! Problem.
//!
//! - **LAHC**: a single-solution local search that accepts a candidate if
//!   it beats the tour length recorded `L` iterations earlier, or is no
//!   worse than the current tour.
//! - **pLAHC**: removes the history length `L` by running a ladder of
//!   LAHC engines with geometrically growing list sizes until a target
//!   tour length is reached.
//!
//! Neighbourhoods are double-bridge (segment reversal), swap and
//! displacement, all evaluated by delta without touching the tour.
//!
//! # Quick start
//!
//! ```
//! use u_lahc::lahc::{LahcConfig, LahcRunner, StoppingCriteria};
//! use u_lahc::tsp::{DistanceMatrix, EdgeWeight};
//!
//! let coords: Vec<(f64, f64)> = (0..12)
//!     .map(|i| ((i % 4) as f64 * 10.0, (i / 4) as f64 * 10.0))
//!     .collect();
//! let m = DistanceMatrix::from_coordinates(&coords, EdgeWeight::Euc2d);
//! let config = LahcConfig::default()
//!     .with_list_size(50)
//!     .with_stopping(StoppingCriteria::max_iteration(20_000))
//!     .with_seed(42);
//!
//! let result = LahcRunner::run(&m, &config).unwrap();
//! assert!(result.best_tour_length >= 120);
//! ```
//!
//! Progress is reported through [`tracing`]; install a subscriber to see
//! per-run and per-rung summaries.

pub mod batch;
pub mod error;
pub mod lahc;
pub mod mutation;
pub mod plahc;
pub mod random;
pub mod tsp;

pub use error::LahcError;
