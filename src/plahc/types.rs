//! Per-rung records of the pLAHC ladder.

/// Outcome of one rung of the list-size ladder.
///
/// An event is registered when its engine is created and filled in once
/// that engine has run to completion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EscalationEvent {
    /// List size of this rung's engine.
    pub list_size: usize,
    /// Global iteration count when the rung started.
    pub starting_iteration: u64,
    /// Global iteration count when the rung finished.
    pub ending_iteration: u64,
    /// Iterations performed by the rung.
    pub iterations: u64,
    /// Length of the rung's improvement trace.
    pub improvements: u64,
    /// Best tour length the rung reached.
    pub best_tour_length: i64,
    /// Mean of the rung's acceptance history when it stopped.
    pub final_list_average: f64,
}

impl EscalationEvent {
    pub(crate) fn pending(list_size: usize, starting_iteration: u64, best: i64, avg: f64) -> Self {
        Self {
            list_size,
            starting_iteration,
            ending_iteration: starting_iteration,
            iterations: 0,
            improvements: 0,
            best_tour_length: best,
            final_list_average: avg,
        }
    }
}

/// One entry of the ladder-wide progress trace built by
/// [`Plahc::progress`](super::Plahc::progress).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressRecord {
    /// Global iteration: the rung's starting iteration plus its local one.
    pub iteration: u64,
    /// Running count of records, starting at 1.
    pub improvement: u64,
    /// Best tour length seen so far across the ladder.
    pub best_tour_length: i64,
    /// List size of the rung holding that best.
    pub best_list_size: usize,
    /// History mean recorded with that best.
    pub best_list_average: f64,
    /// List size of the rung this record comes from.
    pub list_size: usize,
    /// The rung's own best at this record.
    pub rung_best_tour_length: i64,
    /// The rung's history mean at this record.
    pub list_average: f64,
}
