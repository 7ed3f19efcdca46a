//! LAHC configuration and stopping criteria.

use crate::error::LahcError;
use crate::mutation::MutationKind;

/// Iterations always performed before the point-of-convergence test applies.
pub const CONVERGENCE_WARMUP: u64 = 100_000;

/// Largest acceptance history a `Vec<i64>` can address.
pub const MAX_LIST_SIZE: usize = isize::MAX as usize / std::mem::size_of::<i64>();

/// Independent stopping flags, each with its own parameter.
///
/// Only some combinations describe a policy; see [`LahcConfig::validate`].
///
/// # Examples
///
/// ```
/// use u_lahc::lahc::StoppingCriteria;
///
/// let stop = StoppingCriteria::default()
///     .with_point_of_convergence(2.0)
///     .with_solution_quality(7542);
/// assert_eq!(stop.solution_quality, Some(7542));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoppingCriteria {
    /// Stop after exactly this many iterations. Takes precedence over the
    /// other flags when set.
    pub max_iteration: Option<u64>,

    /// Target tour length. The search stops once the best length is at or
    /// below it.
    pub solution_quality: Option<i64>,

    /// Convergence ratio `R`, in percent. After the warm-up the search
    /// stops once the idle streak reaches `R`% of all iterations.
    pub point_of_convergence: Option<f64>,
}

impl StoppingCriteria {
    /// Stop after `n` iterations.
    pub fn max_iteration(n: u64) -> Self {
        Self::default().with_max_iteration(n)
    }

    /// Stop at the point of convergence with ratio `r` (percent).
    pub fn point_of_convergence(r: f64) -> Self {
        Self::default().with_point_of_convergence(r)
    }

    pub fn with_max_iteration(mut self, n: u64) -> Self {
        self.max_iteration = Some(n);
        self
    }

    pub fn with_solution_quality(mut self, target: i64) -> Self {
        self.solution_quality = Some(target);
        self
    }

    pub fn with_point_of_convergence(mut self, r: f64) -> Self {
        self.point_of_convergence = Some(r);
        self
    }
}

/// The single stopping policy an engine evaluates before each iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum StopRule {
    MaxIteration(u64),
    Convergence { factor: f64 },
    ConvergenceOrQuality { factor: f64, target: i64 },
}

impl StopRule {
    pub(crate) fn from_criteria(criteria: &StoppingCriteria) -> Result<Self, LahcError> {
        if let Some(n) = criteria.max_iteration {
            return Ok(StopRule::MaxIteration(n));
        }
        match (criteria.point_of_convergence, criteria.solution_quality) {
            (Some(r), quality) => {
                if !r.is_finite() || r <= 0.0 {
                    return Err(LahcError::InvalidConfig(format!(
                        "point_of_convergence must be a positive percentage, got {r}"
                    )));
                }
                let factor = 100.0 / r;
                Ok(match quality {
                    Some(target) => StopRule::ConvergenceOrQuality { factor, target },
                    None => StopRule::Convergence { factor },
                })
            }
            (None, Some(_)) => Err(LahcError::UnsupportedStoppingCriteria(
                "solution_quality alone cannot stop a LAHC run".into(),
            )),
            (None, None) => Err(LahcError::UnsupportedStoppingCriteria(
                "no stopping criterion configured".into(),
            )),
        }
    }

    /// Returns `true` while the search should perform another iteration.
    pub(crate) fn should_continue(&self, iteration: u64, idle: u64, best: i64) -> bool {
        match *self {
            StopRule::MaxIteration(n) => iteration < n,
            StopRule::Convergence { factor } => not_converged(iteration, idle, factor),
            StopRule::ConvergenceOrQuality { factor, target } => {
                not_converged(iteration, idle, factor) && best > target
            }
        }
    }
}

#[inline]
fn not_converged(iteration: u64, idle: u64, factor: f64) -> bool {
    iteration < CONVERGENCE_WARMUP || (idle as f64) * factor < iteration as f64
}

/// Configuration for a single LAHC engine.
///
/// # Examples
///
/// ```
/// use u_lahc::lahc::{LahcConfig, StoppingCriteria};
///
/// let config = LahcConfig::default()
///     .with_list_size(5000)
///     .with_stopping(StoppingCriteria::point_of_convergence(2.0))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LahcConfig {
    /// Length of the acceptance history. Must be in `1..=MAX_LIST_SIZE`.
    pub list_size: usize,

    /// When to stop.
    pub stopping: StoppingCriteria,

    /// Operator used to draw candidates.
    pub mutation: MutationKind,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for LahcConfig {
    fn default() -> Self {
        Self {
            list_size: 1000,
            stopping: StoppingCriteria::point_of_convergence(2.0),
            mutation: MutationKind::DoubleBridge,
            seed: None,
        }
    }
}

impl LahcConfig {
    pub fn with_list_size(mut self, n: usize) -> Self {
        self.list_size = n;
        self
    }

    pub fn with_stopping(mut self, stopping: StoppingCriteria) -> Self {
        self.stopping = stopping;
        self
    }

    pub fn with_mutation(mut self, kind: MutationKind) -> Self {
        self.mutation = kind;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`LahcError::InvalidConfig`] for a list size outside
    /// `1..=MAX_LIST_SIZE` or a bad ratio,
    /// [`LahcError::UnsupportedStoppingCriteria`] when the flags do not
    /// form a policy.
    pub fn validate(&self) -> Result<(), LahcError> {
        if self.list_size == 0 {
            return Err(LahcError::InvalidConfig("list_size must be at least 1".into()));
        }
        if self.list_size > MAX_LIST_SIZE {
            return Err(LahcError::InvalidConfig(format!(
                "list_size {} exceeds {MAX_LIST_SIZE}",
                self.list_size
            )));
        }
        StopRule::from_criteria(&self.stopping).map(|_| ())
    }
}
