//! Repeated independent runs of one instance.
//!
//! Run `k` uses seed `base_seed + k`, so a batch is reproducible and its
//! runs are independent of each other. With the `parallel` feature the
//! runs execute on rayon's global pool; results always come back in run
//! order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::LahcError;
use crate::lahc::{LahcConfig, LahcResult, LahcRunner};
use crate::plahc::{PlahcConfig, PlahcResult, PlahcRunner};
use crate::tsp::TspInstance;

/// Runs LAHC `runs` times. `config.seed` is ignored.
///
/// # Errors
/// The first configuration or instance error; an invalid configuration
/// fails every run the same way.
///
/// # Examples
///
/// ```
/// use u_lahc::batch::run_lahc_batch;
/// use u_lahc::lahc::{LahcConfig, StoppingCriteria};
/// use u_lahc::tsp::{DistanceMatrix, EdgeWeight};
///
/// let coords = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
/// let m = DistanceMatrix::from_coordinates(&coords, EdgeWeight::Euc2d);
/// let config = LahcConfig::default()
///     .with_list_size(2)
///     .with_stopping(StoppingCriteria::max_iteration(200));
///
/// let results = run_lahc_batch(&m, &config, 4, 100).unwrap();
/// assert_eq!(results.len(), 4);
/// ```
pub fn run_lahc_batch<P: TspInstance + ?Sized>(
    problem: &P,
    config: &LahcConfig,
    runs: usize,
    base_seed: u64,
) -> Result<Vec<LahcResult>, LahcError> {
    config.validate()?;
    let one = |run: usize| {
        let config = config.clone().with_seed(run_seed(base_seed, run));
        LahcRunner::run(problem, &config)
    };

    #[cfg(feature = "parallel")]
    let results = (0..runs).into_par_iter().map(one).collect();
    #[cfg(not(feature = "parallel"))]
    let results = (0..runs).map(one).collect();

    results
}

/// Runs pLAHC `runs` times. `config.seed` is ignored.
///
/// # Errors
/// As [`run_lahc_batch`], plus [`LahcError::ListSizeOverflow`] from any
/// run.
pub fn run_plahc_batch<P: TspInstance + ?Sized>(
    problem: &P,
    config: &PlahcConfig,
    runs: usize,
    base_seed: u64,
) -> Result<Vec<PlahcResult>, LahcError> {
    config.validate()?;
    let one = |run: usize| {
        let config = config.clone().with_seed(run_seed(base_seed, run));
        PlahcRunner::run(problem, &config)
    };

    #[cfg(feature = "parallel")]
    let results = (0..runs).into_par_iter().map(one).collect();
    #[cfg(not(feature = "parallel"))]
    let results = (0..runs).map(one).collect();

    results
}

fn run_seed(base_seed: u64, run: usize) -> u64 {
    base_seed.wrapping_add(run as u64)
}
