//! One-shot LAHC execution.

use super::config::LahcConfig;
use super::engine::LahcEngine;
use super::types::Improvement;
use crate::error::LahcError;
use crate::random::create_rng;
use crate::tsp::TspInstance;

/// Result of a LAHC run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LahcResult {
    /// Best tour found.
    pub best_tour: Vec<usize>,

    /// Length of the best tour.
    pub best_tour_length: i64,

    /// Iterations performed.
    pub iterations: u64,

    /// Improvement trace, ending with a record for the final iteration.
    pub improvements: Vec<Improvement>,

    /// Mean of the acceptance history when the run stopped.
    pub final_list_average: f64,

    /// Whether every history slot held the same length at the end.
    pub list_converged: bool,
}

impl<P: TspInstance + ?Sized> LahcEngine<'_, P> {
    /// Snapshot of the engine's outcome.
    pub fn to_result(&self) -> LahcResult {
        LahcResult {
            best_tour: self.best_tour().to_vec(),
            best_tour_length: self.best_tour_length(),
            iterations: self.num_iterations(),
            improvements: self.improvements().to_vec(),
            final_list_average: self.list_average(),
            list_converged: self.list_converge(),
        }
    }
}

/// Executes a LAHC search from a seeded generator.
pub struct LahcRunner;

impl LahcRunner {
    /// Runs LAHC from a random tour.
    ///
    /// Uses `config.seed`, or a random seed when it is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_lahc::lahc::{LahcConfig, LahcRunner, StoppingCriteria};
    /// use u_lahc::tsp::{DistanceMatrix, EdgeWeight};
    ///
    /// let coords = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (5.0, 12.0)];
    /// let m = DistanceMatrix::from_coordinates(&coords, EdgeWeight::Euc2d);
    /// let config = LahcConfig::default()
    ///     .with_list_size(3)
    ///     .with_stopping(StoppingCriteria::max_iteration(1_000))
    ///     .with_seed(7);
    ///
    /// let result = LahcRunner::run(&m, &config).unwrap();
    /// assert_eq!(result.iterations, 1_000);
    /// assert_eq!(result.improvements.last().unwrap().iteration, 1_000);
    /// ```
    pub fn run<P: TspInstance + ?Sized>(
        problem: &P,
        config: &LahcConfig,
    ) -> Result<LahcResult, LahcError> {
        config.validate()?;
        let mut rng = create_rng(config.seed.unwrap_or_else(rand::random));
        let mut engine = LahcEngine::new(problem, config, &mut rng)?;
        engine.run(&mut rng);
        Ok(engine.to_result())
    }

    /// Runs LAHC from a given tour and an external history seed.
    pub fn run_from<P: TspInstance + ?Sized>(
        problem: &P,
        config: &LahcConfig,
        tour: Vec<usize>,
        history: &[i64],
    ) -> Result<LahcResult, LahcError> {
        let mut rng = create_rng(config.seed.unwrap_or_else(rand::random));
        let mut engine = LahcEngine::with_tour(problem, config, tour, history)?;
        engine.run(&mut rng);
        Ok(engine.to_result())
    }
}
