//! One-shot pLAHC execution.

use super::config::PlahcConfig;
use super::ladder::Plahc;
use super::types::{EscalationEvent, ProgressRecord};
use crate::error::LahcError;
use crate::lahc::Improvement;
use crate::random::create_rng;
use crate::tsp::TspInstance;

/// Result of a pLAHC run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlahcResult {
    /// Best tour found over all rungs.
    pub best_tour: Vec<usize>,

    /// Length of the best tour.
    pub best_tour_length: i64,

    /// List size of the rung that found the best tour.
    pub best_list_size: usize,

    /// Iterations summed over all rungs.
    pub total_iterations: u64,

    /// Trace records summed over all rungs.
    pub total_improvements: u64,

    /// One event per completed rung.
    pub events: Vec<EscalationEvent>,

    /// Improvement trace of every rung, in rung order.
    pub traces: Vec<Vec<Improvement>>,

    /// All traces merged on the global iteration axis.
    pub progress: Vec<ProgressRecord>,
}

impl<P: TspInstance + ?Sized> Plahc<'_, P> {
    /// Snapshot of the ladder's outcome.
    pub fn to_result(&self) -> PlahcResult {
        PlahcResult {
            best_tour: self.best_tour().to_vec(),
            best_tour_length: self.best_tour_length(),
            best_list_size: self.best_list_size(),
            total_iterations: self.total_iterations(),
            total_improvements: self.total_improvements(),
            events: self.events().to_vec(),
            traces: self
                .race_track()
                .iter()
                .map(|engine| engine.improvements().to_vec())
                .collect(),
            progress: self.progress(),
        }
    }
}

/// Executes a pLAHC search from a seeded generator.
pub struct PlahcRunner;

impl PlahcRunner {
    /// Runs pLAHC until a rung reaches the configured target.
    ///
    /// Uses `config.seed`, or a random seed when it is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_lahc::plahc::{PlahcConfig, PlahcRunner};
    /// use u_lahc::tsp::{DistanceMatrix, EdgeWeight};
    ///
    /// let coords = [(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (20.0, 10.0), (0.0, 10.0)];
    /// let m = DistanceMatrix::from_coordinates(&coords, EdgeWeight::Euc2d);
    /// let config = PlahcConfig::new(62).with_seed(42);
    ///
    /// let result = PlahcRunner::run(&m, &config).unwrap();
    /// assert!(result.best_tour_length <= 62);
    /// assert_eq!(result.events.len(), result.traces.len());
    /// ```
    pub fn run<P: TspInstance + ?Sized>(
        problem: &P,
        config: &PlahcConfig,
    ) -> Result<PlahcResult, LahcError> {
        config.validate()?;
        let mut rng = create_rng(config.seed.unwrap_or_else(rand::random));
        let mut plahc = Plahc::new(problem, config, &mut rng)?;
        plahc.run(&mut rng)?;
        Ok(plahc.to_result())
    }
}
