//! Parameter-less Late Acceptance Hill-Climbing (pLAHC).
//!
//! Removes the list-size parameter of LAHC by running a ladder of
//! independent LAHC engines. Rung `k` uses list size
//! `base * scale^k`; the ladder stops as soon as a rung reaches the
//! target tour length.
//!
//! # Reference
//!
//! Bazargani, M. & Lobo, F.G. (2017). "Parameter-less Late Acceptance
//! Hill-Climbing", *Proceedings of GECCO '17*, 219-226.

mod config;
mod ladder;
mod runner;
mod types;

pub use config::PlahcConfig;
pub use ladder::Plahc;
pub use runner::{PlahcResult, PlahcRunner};
pub use types::{EscalationEvent, ProgressRecord};
