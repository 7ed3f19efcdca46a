//! pLAHC configuration.

use crate::error::LahcError;
use crate::lahc::{LahcConfig, StoppingCriteria};

/// Configuration for the parameter-less LAHC driver.
///
/// The driver runs one double-bridge LAHC engine per rung with list size
/// `base_list_size * list_scaling_size^k`, `k = 0, 1, 2, ...`. Every rung
/// uses `stopping` for its own termination; the driver itself only looks
/// at `stopping.solution_quality`.
///
/// # Examples
///
/// ```
/// use u_lahc::plahc::PlahcConfig;
///
/// let config = PlahcConfig::new(7542)
///     .with_base_list_size(1)
///     .with_list_scaling_size(10)
///     .with_seed(42);
/// assert_eq!(config.list_size_at(3).unwrap(), 1000);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlahcConfig {
    /// List size of the first rung. Must be at least 1.
    pub base_list_size: usize,

    /// Growth factor between rungs. Must be at least 2.
    pub list_scaling_size: usize,

    /// Stopping criteria shared by every rung. `solution_quality` is
    /// also the driver's own target and must be set.
    pub stopping: StoppingCriteria,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl PlahcConfig {
    /// Rungs stop at their point of convergence (2 %) or at `target`; the
    /// ladder stops once any rung reaches `target`.
    pub fn new(target: i64) -> Self {
        Self {
            base_list_size: 1,
            list_scaling_size: 10,
            stopping: StoppingCriteria::point_of_convergence(2.0).with_solution_quality(target),
            seed: None,
        }
    }

    pub fn with_base_list_size(mut self, n: usize) -> Self {
        self.base_list_size = n;
        self
    }

    pub fn with_list_scaling_size(mut self, n: usize) -> Self {
        self.list_scaling_size = n;
        self
    }

    pub fn with_stopping(mut self, stopping: StoppingCriteria) -> Self {
        self.stopping = stopping;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// List size of rung `index`.
    ///
    /// # Errors
    /// [`LahcError::ListSizeOverflow`] if the size does not fit in `usize`.
    pub fn list_size_at(&self, index: u32) -> Result<usize, LahcError> {
        self.list_scaling_size
            .checked_pow(index)
            .and_then(|factor| self.base_list_size.checked_mul(factor))
            .ok_or(LahcError::ListSizeOverflow {
                base: self.base_list_size,
                scale: self.list_scaling_size,
                index,
            })
    }

    /// Validated engine configuration for rung `index`.
    ///
    /// # Errors
    /// [`LahcError::ListSizeOverflow`] as for [`Self::list_size_at`], and
    /// [`LahcError::InvalidConfig`] for a size above
    /// [`MAX_LIST_SIZE`](crate::lahc::MAX_LIST_SIZE).
    pub(crate) fn rung(&self, index: u32) -> Result<LahcConfig, LahcError> {
        let config = LahcConfig::default()
            .with_list_size(self.list_size_at(index)?)
            .with_stopping(self.stopping);
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`LahcError::InvalidConfig`] for out-of-range sizes,
    /// [`LahcError::UnsupportedStoppingCriteria`] when no solution-quality
    /// target is set or the rungs' criteria do not form a policy.
    pub fn validate(&self) -> Result<(), LahcError> {
        if self.base_list_size == 0 {
            return Err(LahcError::InvalidConfig(
                "base_list_size must be at least 1".into(),
            ));
        }
        if self.list_scaling_size < 2 {
            return Err(LahcError::InvalidConfig(format!(
                "list_scaling_size must be at least 2, got {}",
                self.list_scaling_size
            )));
        }
        if self.stopping.solution_quality.is_none() {
            return Err(LahcError::UnsupportedStoppingCriteria(
                "pLAHC only stops on solution_quality".into(),
            ));
        }
        self.rung(0).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_valid() {
        assert!(PlahcConfig::new(100).validate().is_ok());
    }

    #[test]
    fn test_list_size_ladder() {
        let config = PlahcConfig::new(0)
            .with_base_list_size(5)
            .with_list_scaling_size(3);
        let sizes: Vec<usize> = (0..4).map(|k| config.list_size_at(k).unwrap()).collect();
        assert_eq!(sizes, vec![5, 15, 45, 135]);
    }

    #[test]
    fn test_list_size_overflow() {
        let config = PlahcConfig::new(0).with_list_scaling_size(10);
        assert!(matches!(
            config.list_size_at(40),
            Err(LahcError::ListSizeOverflow { index: 40, .. })
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_unaddressable_rung_rejected() {
        let config = PlahcConfig::new(0).with_list_scaling_size(1 << 61);
        assert!(config.rung(0).is_ok());
        assert_eq!(config.list_size_at(1).unwrap(), 1 << 61);
        assert!(matches!(config.rung(1), Err(LahcError::InvalidConfig(_))));
        assert!(matches!(
            config.rung(2),
            Err(LahcError::ListSizeOverflow { index: 2, .. })
        ));
    }

    #[test]
    fn test_bad_sizes_rejected() {
        assert!(PlahcConfig::new(0).with_base_list_size(0).validate().is_err());
        assert!(PlahcConfig::new(0).with_list_scaling_size(1).validate().is_err());
    }

    #[test]
    fn test_requires_solution_quality() {
        let config = PlahcConfig::new(0).with_stopping(StoppingCriteria::point_of_convergence(2.0));
        assert!(matches!(
            config.validate(),
            Err(LahcError::UnsupportedStoppingCriteria(_))
        ));
    }

    #[test]
    fn test_quality_alone_cannot_stop_rungs() {
        let stopping = StoppingCriteria::default().with_solution_quality(10);
        let config = PlahcConfig::new(0).with_stopping(stopping);
        assert!(matches!(
            config.validate(),
            Err(LahcError::UnsupportedStoppingCriteria(_))
        ));
    }

    #[test]
    fn test_max_iteration_rungs_allowed() {
        let config = PlahcConfig::new(0)
            .with_stopping(StoppingCriteria::max_iteration(500).with_solution_quality(10));
        assert!(config.validate().is_ok());
    }
}
