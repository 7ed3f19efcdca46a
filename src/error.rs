//! Error type shared by the engine, the orchestrator and the problem layer.

use thiserror::Error;

/// Errors reported while building or running a search.
///
/// All variants describe configuration or input defects. The search loop
/// itself never fails once an engine has been constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LahcError {
    /// A configuration field is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configured combination of stopping criteria has no policy.
    #[error("unsupported stopping criteria: {0}")]
    UnsupportedStoppingCriteria(String),

    /// A supplied tour is not a permutation of `0..n`.
    #[error("tour is not a permutation of 0..{num_cities}")]
    InvalidTour { num_cities: usize },

    /// The instance is too small for the mutation operators.
    #[error("instance has {found} cities, at least {min} are required")]
    TooFewCities { found: usize, min: usize },

    /// A distance matrix failed validation.
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),

    /// An external acceptance history was empty.
    #[error("acceptance history seed must not be empty")]
    EmptyHistory,

    /// The next rung of the list-size ladder does not fit in `usize`.
    #[error("list size {base} * {scale}^{index} overflows")]
    ListSizeOverflow {
        base: usize,
        scale: usize,
        index: u32,
    },
}
