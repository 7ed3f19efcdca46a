//! Late Acceptance Hill-Climbing (LAHC).
//!
//! A single-solution trajectory metaheuristic. A candidate is accepted if
//! it is no worse than the current solution, or better than the current
//! solution was `list_size` iterations ago. The lengths seen in the past
//! live in a fixed-size circular history, which makes the list size the
//! only tuning parameter.
//!
//! # References
//!
//! - Burke & Bykov (2008), "A Late Acceptance Strategy in Hill-Climbing for
//!   Exam Timetabling Problems"
//! - Burke & Bykov (2017), "The Late Acceptance Hill-Climbing Heuristic"

mod config;
mod engine;
mod history;
mod runner;
mod types;

pub use config::{LahcConfig, StoppingCriteria, CONVERGENCE_WARMUP, MAX_LIST_SIZE};
pub use engine::LahcEngine;
pub use history::AcceptanceHistory;
pub use runner::{LahcResult, LahcRunner};
pub use types::{EngineState, Improvement};
