//! Records produced by a LAHC engine.

/// Snapshot taken every time the engine finds a new best tour.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Improvement {
    /// Iteration at which the snapshot was taken.
    pub iteration: u64,
    /// Best tour length at that point.
    pub best_tour_length: i64,
    /// Mean of the acceptance history at that point.
    pub list_average: f64,
}

/// Lifecycle of a [`LahcEngine`](super::LahcEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Constructed, no iteration performed yet.
    Initializing,
    /// At least one iteration performed.
    Running,
    /// The stopping rule fired; the engine no longer changes.
    Stopped,
}
