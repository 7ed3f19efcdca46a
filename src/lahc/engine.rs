//! LAHC engine.
//!
//! # Algorithm (Burke & Bykov)
//!
//! Each iteration:
//!
//! 1. Draw a candidate move and its length without touching the tour
//! 2. Accept if the candidate beats the history slot for this iteration
//!    (`iteration mod list_size`) or is no worse than the current tour
//! 3. Lower the slot to the current length if the current tour beats it
//! 4. Record a new global best, or extend the idle streak
//!
//! # Reference
//!
//! Burke, E.K. & Bykov, Y. (2017). "The late acceptance Hill-Climbing
//! heuristic", *European Journal of Operational Research* 258(1), 70-78.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use super::config::{LahcConfig, StopRule};
use super::history::AcceptanceHistory;
use super::types::{EngineState, Improvement};
use crate::error::LahcError;
use crate::mutation::{propose, Mutation, MutationKind, MIN_CITIES};
use crate::tsp::{is_valid_tour, TspInstance};

/// One LAHC search: a tour, its acceptance history and the improvement
/// trace.
///
/// The engine borrows the problem instance read-only and draws randomness
/// from the generator passed to [`run`](Self::run) or
/// [`permutate`](Self::permutate).
///
/// # Examples
///
/// ```
/// use u_lahc::lahc::{LahcConfig, LahcEngine, StoppingCriteria};
/// use u_lahc::random::create_rng;
/// use u_lahc::tsp::{DistanceMatrix, EdgeWeight};
///
/// let coords: Vec<(f64, f64)> = (0..8)
///     .map(|i| {
///         let a = i as f64 * std::f64::consts::TAU / 8.0;
///         (100.0 * a.cos(), 100.0 * a.sin())
///     })
///     .collect();
/// let m = DistanceMatrix::from_coordinates(&coords, EdgeWeight::Euc2d);
/// let config = LahcConfig::default()
///     .with_list_size(10)
///     .with_stopping(StoppingCriteria::max_iteration(5_000));
///
/// let mut rng = create_rng(42);
/// let mut engine = LahcEngine::new(&m, &config, &mut rng).unwrap();
/// engine.run(&mut rng);
/// assert_eq!(engine.num_iterations(), 5_000);
/// ```
pub struct LahcEngine<'a, P: TspInstance + ?Sized> {
    problem: &'a P,
    rule: StopRule,
    mutation: MutationKind,
    tour: Vec<usize>,
    best_tour: Vec<usize>,
    tour_length: i64,
    best_tour_length: i64,
    history: AcceptanceHistory,
    slot: usize,
    iteration: u64,
    idle_iteration: u64,
    improvements: Vec<Improvement>,
    state: EngineState,
}

impl<'a, P: TspInstance + ?Sized> LahcEngine<'a, P> {
    /// Starts from a uniformly random tour; every history slot holds its
    /// length.
    ///
    /// # Errors
    /// Configuration errors from [`LahcConfig::validate`], or
    /// [`LahcError::TooFewCities`] for instances below
    /// [`MIN_CITIES`].
    pub fn new<R: Rng>(
        problem: &'a P,
        config: &LahcConfig,
        rng: &mut R,
    ) -> Result<Self, LahcError> {
        let rule = Self::check(problem, config)?;
        let mut tour: Vec<usize> = (0..problem.num_cities()).collect();
        tour.shuffle(rng);
        let length = problem.tour_length(&tour);
        let history = AcceptanceHistory::filled(config.list_size, length)?;
        Ok(Self::assemble(problem, config, rule, tour, length, history))
    }

    /// Starts from `tour`; the history is seeded by cycling through
    /// `history` and sorting the result from longest to shortest.
    ///
    /// # Errors
    /// As [`new`](Self::new), plus [`LahcError::InvalidTour`] if `tour` is
    /// not a permutation and [`LahcError::EmptyHistory`] if `history` is
    /// empty.
    pub fn with_tour(
        problem: &'a P,
        config: &LahcConfig,
        tour: Vec<usize>,
        history: &[i64],
    ) -> Result<Self, LahcError> {
        let rule = Self::check(problem, config)?;
        let n = problem.num_cities();
        if !is_valid_tour(&tour, n) {
            return Err(LahcError::InvalidTour { num_cities: n });
        }
        let length = problem.tour_length(&tour);
        let history = AcceptanceHistory::seeded(config.list_size, history)?;
        Ok(Self::assemble(problem, config, rule, tour, length, history))
    }

    fn check(problem: &P, config: &LahcConfig) -> Result<StopRule, LahcError> {
        config.validate()?;
        let n = problem.num_cities();
        if n < MIN_CITIES {
            return Err(LahcError::TooFewCities {
                found: n,
                min: MIN_CITIES,
            });
        }
        StopRule::from_criteria(&config.stopping)
    }

    fn assemble(
        problem: &'a P,
        config: &LahcConfig,
        rule: StopRule,
        tour: Vec<usize>,
        length: i64,
        history: AcceptanceHistory,
    ) -> Self {
        Self {
            problem,
            rule,
            mutation: config.mutation,
            best_tour: tour.clone(),
            tour,
            tour_length: length,
            best_tour_length: length,
            history,
            slot: 0,
            iteration: 0,
            idle_iteration: 0,
            improvements: Vec::new(),
            state: EngineState::Initializing,
        }
    }

    /// Runs until the stopping rule fires.
    ///
    /// The trace starts with a snapshot of the starting point and always
    /// ends with a record for the final iteration. Calling `run` on a
    /// stopped engine does nothing.
    pub fn run<R: Rng>(&mut self, rng: &mut R) {
        if self.state == EngineState::Stopped {
            return;
        }
        self.state = EngineState::Running;
        self.push_improvement();

        while self
            .rule
            .should_continue(self.iteration, self.idle_iteration, self.best_tour_length)
        {
            self.iterate(rng);
        }

        if self
            .improvements
            .last()
            .map_or(true, |last| last.iteration != self.iteration)
        {
            self.push_improvement();
        }
        self.state = EngineState::Stopped;

        info!(
            list_size = self.history.len(),
            iterations = self.iteration,
            improvements = self.improvements.len(),
            best_tour_length = self.best_tour_length,
            list_average = self.history.average(),
            "LAHC run finished"
        );
    }

    /// One iteration of the main loop.
    fn iterate<R: Rng>(&mut self, rng: &mut R) {
        let candidate = self.draw(rng);
        let slot_value = self.history.get(self.slot);
        if candidate.length < slot_value || candidate.length <= self.tour_length {
            self.commit(candidate);
        }
        self.close_iteration();
    }

    /// Performs a single iteration for an external driver.
    ///
    /// Unlike [`run`](Self::run), a candidate that merely equals the
    /// history slot is accepted, and the stopping rule is not evaluated.
    /// Returns `false` without doing anything once the engine has stopped.
    pub fn permutate<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.state == EngineState::Stopped {
            return false;
        }
        self.state = EngineState::Running;

        let candidate = self.draw(rng);
        if candidate.length <= self.history.get(self.slot) || candidate.length <= self.tour_length {
            self.commit(candidate);
        }
        self.close_iteration();
        true
    }

    #[inline]
    fn draw<R: Rng>(&self, rng: &mut R) -> Mutation {
        propose(self.mutation, &self.tour, self.tour_length, self.problem, rng)
    }

    #[inline]
    fn commit(&mut self, mutation: Mutation) {
        mutation.apply(&mut self.tour);
        self.tour_length = mutation.length;
        debug_assert!(is_valid_tour(&self.tour, self.problem.num_cities()));
    }

    /// History update, best-tour bookkeeping and slot advance shared by
    /// both iteration entry points.
    fn close_iteration(&mut self) {
        if self.tour_length < self.history.get(self.slot) {
            self.history.set(self.slot, self.tour_length);
        }

        if self.tour_length < self.best_tour_length {
            self.best_tour_length = self.tour_length;
            self.best_tour.copy_from_slice(&self.tour);
            self.idle_iteration = 0;
            self.push_improvement();
            debug!(
                iteration = self.iteration,
                best_tour_length = self.best_tour_length,
                "new best tour"
            );
        } else {
            self.idle_iteration += 1;
        }

        self.iteration += 1;
        self.slot = (self.iteration % self.history.len() as u64) as usize;
    }

    fn push_improvement(&mut self) {
        self.improvements.push(Improvement {
            iteration: self.iteration,
            best_tour_length: self.best_tour_length,
            list_average: self.history.average(),
        });
    }

    pub fn best_tour(&self) -> &[usize] {
        &self.best_tour
    }

    pub fn current_tour(&self) -> &[usize] {
        &self.tour
    }

    pub fn best_tour_length(&self) -> i64 {
        self.best_tour_length
    }

    pub fn current_tour_length(&self) -> i64 {
        self.tour_length
    }

    /// Mean of the acceptance history.
    pub fn list_average(&self) -> f64 {
        self.history.average()
    }

    /// `true` iff every history slot holds the same length.
    pub fn list_converge(&self) -> bool {
        self.history.is_converged()
    }

    /// Value of one history slot.
    ///
    /// # Panics
    /// Panics if `index >= list_size()`.
    pub fn list_val(&self, index: usize) -> i64 {
        self.history.get(index)
    }

    pub fn list_size(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &AcceptanceHistory {
        &self.history
    }

    pub fn num_iterations(&self) -> u64 {
        self.iteration
    }

    /// Consecutive iterations without a new best tour.
    pub fn idle_iterations(&self) -> u64 {
        self.idle_iteration
    }

    /// The improvement trace, oldest first.
    pub fn improvements(&self) -> &[Improvement] {
        &self.improvements
    }

    pub fn state(&self) -> EngineState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lahc::{StoppingCriteria, CONVERGENCE_WARMUP};
    use crate::random::create_rng;
    use crate::tsp::{DistanceMatrix, EdgeWeight};

    /// Cities on a circle: the only 2-opt local optimum is the hull order.
    fn circle(n: usize, radius: f64) -> DistanceMatrix {
        let coords: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let a = i as f64 * std::f64::consts::TAU / n as f64;
                (radius * a.cos(), radius * a.sin())
            })
            .collect();
        DistanceMatrix::from_coordinates(&coords, EdgeWeight::Euc2d)
    }

    fn uniform(n: usize, w: i64) -> DistanceMatrix {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0 } else { w }).collect())
            .collect();
        DistanceMatrix::new(rows).unwrap()
    }

    fn random_instance(n: usize, seed: u64) -> DistanceMatrix {
        let mut rng = create_rng(seed);
        let coords: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
            .collect();
        DistanceMatrix::from_coordinates(&coords, EdgeWeight::Euc2d)
    }

    fn brute_force_optimum(m: &DistanceMatrix) -> i64 {
        fn permute(m: &DistanceMatrix, tour: &mut Vec<usize>, k: usize, best: &mut i64) {
            if k == tour.len() {
                *best = (*best).min(m.tour_length(tour));
                return;
            }
            for i in k..tour.len() {
                tour.swap(k, i);
                permute(m, tour, k + 1, best);
                tour.swap(k, i);
            }
        }
        let mut tour: Vec<usize> = (0..m.num_cities()).collect();
        let mut best = i64::MAX;
        // fix city 0 in front, rotations are equivalent
        permute(m, &mut tour, 1, &mut best);
        best
    }

    fn config(list_size: usize, stopping: StoppingCriteria) -> LahcConfig {
        LahcConfig::default()
            .with_list_size(list_size)
            .with_stopping(stopping)
    }

    #[test]
    fn test_new_initial_state() {
        let m = random_instance(12, 1);
        let mut rng = create_rng(42);
        let engine =
            LahcEngine::new(&m, &config(7, StoppingCriteria::max_iteration(10)), &mut rng).unwrap();

        assert_eq!(engine.state(), EngineState::Initializing);
        assert_eq!(engine.list_size(), 7);
        assert!(is_valid_tour(engine.current_tour(), 12));
        assert_eq!(engine.best_tour(), engine.current_tour());
        let len = m.tour_length(engine.current_tour());
        assert_eq!(engine.current_tour_length(), len);
        assert_eq!(engine.best_tour_length(), len);
        assert!((0..7).all(|i| engine.list_val(i) == len));
        assert!(engine.list_converge());
        assert!(engine.improvements().is_empty());
    }

    #[test]
    fn test_too_few_cities() {
        let m = uniform(2, 1);
        let mut rng = create_rng(0);
        let err = LahcEngine::new(&m, &LahcConfig::default(), &mut rng).err();
        assert_eq!(err, Some(LahcError::TooFewCities { found: 2, min: 3 }));
    }

    #[test]
    fn test_unsupported_criteria_rejected_at_construction() {
        let m = uniform(5, 1);
        let mut rng = create_rng(0);
        let stop = StoppingCriteria::default().with_solution_quality(3);
        let err = LahcEngine::new(&m, &config(3, stop), &mut rng).err();
        assert!(matches!(err, Some(LahcError::UnsupportedStoppingCriteria(_))));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_unaddressable_list_size_is_an_error() {
        let m = uniform(5, 1);
        let mut rng = create_rng(0);
        let cfg = config(1 << 62, StoppingCriteria::max_iteration(10));
        let err = LahcEngine::new(&m, &cfg, &mut rng).err();
        assert!(matches!(err, Some(LahcError::InvalidConfig(_))));
        let err = LahcEngine::with_tour(&m, &cfg, vec![0, 1, 2, 3, 4], &[5]).err();
        assert!(matches!(err, Some(LahcError::InvalidConfig(_))));
    }

    #[test]
    fn test_with_tour_seeds_sorted_history() {
        let m = random_instance(6, 2);
        let tour = vec![5, 4, 3, 2, 1, 0];
        let engine = LahcEngine::with_tour(
            &m,
            &config(5, StoppingCriteria::max_iteration(10)),
            tour.clone(),
            &[10, 30, 20],
        )
        .unwrap();

        assert_eq!(engine.current_tour(), &tour[..]);
        assert_eq!(engine.current_tour_length(), m.tour_length(&tour));
        assert_eq!(engine.history().values(), &[30, 30, 20, 10, 10]);
    }

    #[test]
    fn test_with_tour_rejects_invalid() {
        let m = random_instance(4, 3);
        let res = LahcEngine::with_tour(&m, &LahcConfig::default(), vec![0, 1, 1, 2], &[1]);
        assert_eq!(res.err(), Some(LahcError::InvalidTour { num_cities: 4 }));

        let res = LahcEngine::with_tour(&m, &LahcConfig::default(), vec![0, 1, 2, 3], &[]);
        assert_eq!(res.err(), Some(LahcError::EmptyHistory));
    }

    #[test]
    fn test_max_iteration_exact() {
        let m = random_instance(30, 4);
        let mut rng = create_rng(42);
        let mut engine =
            LahcEngine::new(&m, &config(50, StoppingCriteria::max_iteration(1000)), &mut rng)
                .unwrap();
        engine.run(&mut rng);

        assert_eq!(engine.num_iterations(), 1000);
        assert_eq!(engine.state(), EngineState::Stopped);
        assert_eq!(engine.improvements().last().unwrap().iteration, 1000);
    }

    #[test]
    fn test_run_keeps_invariants() {
        let m = random_instance(40, 5);
        let mut rng = create_rng(7);
        let mut engine =
            LahcEngine::new(&m, &config(20, StoppingCriteria::max_iteration(20_000)), &mut rng)
                .unwrap();
        let start = engine.current_tour_length();
        engine.run(&mut rng);

        // tours
        assert!(is_valid_tour(engine.current_tour(), 40));
        assert!(is_valid_tour(engine.best_tour(), 40));
        assert_eq!(engine.current_tour_length(), m.tour_length(engine.current_tour()));
        assert_eq!(engine.best_tour_length(), m.tour_length(engine.best_tour()));
        assert!(engine.best_tour_length() < start);
        assert!(engine.best_tour_length() <= engine.current_tour_length());

        // trace
        let trace = engine.improvements();
        assert_eq!(trace[0].iteration, 0);
        assert_eq!(trace[0].best_tour_length, start);
        for w in trace.windows(2) {
            assert!(w[1].best_tour_length <= w[0].best_tour_length);
            assert!(w[1].iteration >= w[0].iteration);
        }
        assert_eq!(trace.last().unwrap().iteration, engine.num_iterations());
        assert_eq!(trace.last().unwrap().best_tour_length, engine.best_tour_length());

        // history
        assert_eq!(engine.list_size(), 20);
        let mean = (0..20).map(|i| engine.list_val(i) as f64).sum::<f64>() / 20.0;
        assert!((engine.list_average() - mean).abs() < 1e-9);
        let all_equal = (1..20).all(|i| engine.list_val(i) == engine.list_val(0));
        assert_eq!(engine.list_converge(), all_equal);
    }

    #[test]
    fn test_seeded_run_is_deterministic() {
        let m = circle(5, 100.0);
        let stop = StoppingCriteria::max_iteration(2_000);

        let mut rng_a = create_rng(2024);
        let mut a = LahcEngine::new(&m, &config(3, stop), &mut rng_a).unwrap();
        a.run(&mut rng_a);

        let mut rng_b = create_rng(2024);
        let mut b = LahcEngine::new(&m, &config(3, stop), &mut rng_b).unwrap();
        b.run(&mut rng_b);

        assert_eq!(a.best_tour(), b.best_tour());
        assert_eq!(a.current_tour(), b.current_tour());
        assert_eq!(a.best_tour_length(), b.best_tour_length());
        assert_eq!(a.improvements(), b.improvements());
    }

    #[test]
    fn test_five_city_reaches_optimum() {
        let m = circle(5, 100.0);
        let optimum = brute_force_optimum(&m);
        let mut rng = create_rng(2024);
        let mut engine =
            LahcEngine::new(&m, &config(3, StoppingCriteria::max_iteration(2_000)), &mut rng)
                .unwrap();
        engine.run(&mut rng);

        assert_eq!(engine.best_tour_length(), optimum);
        assert_eq!(m.tour_length(engine.best_tour()), optimum);
    }

    #[test]
    fn test_point_of_convergence_stops_at_warmup_when_idle() {
        // Every tour has the same length, so no iteration is ever a new best
        // and the idle streak equals the iteration count.
        let m = uniform(5, 10);
        let mut rng = create_rng(9);
        let mut engine =
            LahcEngine::new(&m, &config(3, StoppingCriteria::point_of_convergence(20.0)), &mut rng)
                .unwrap();
        engine.run(&mut rng);

        assert_eq!(engine.num_iterations(), CONVERGENCE_WARMUP);
        assert_eq!(engine.idle_iterations(), CONVERGENCE_WARMUP);
        // idle * (100 / R) >= iteration at the stop
        assert!(engine.idle_iterations() as f64 * 5.0 >= engine.num_iterations() as f64);
        assert_eq!(engine.improvements().len(), 2);
    }

    #[test]
    fn test_five_city_reference_trace() {
        let m = DistanceMatrix::new(vec![
            vec![0, 3, 9, 7, 4],
            vec![3, 0, 5, 8, 6],
            vec![9, 5, 0, 2, 10],
            vec![7, 8, 2, 0, 1],
            vec![4, 6, 10, 1, 0],
        ])
        .unwrap();
        let tour = vec![0, 2, 4, 1, 3];
        assert_eq!(m.tour_length(&tour), 40);
        let mut engine =
            LahcEngine::with_tour(&m, &config(3, StoppingCriteria::max_iteration(25)), tour, &[40])
                .unwrap();
        let mut rng = create_rng(42);
        engine.run(&mut rng);

        assert_eq!(engine.current_tour(), &[2, 1, 0, 4, 3]);
        assert_eq!(engine.current_tour_length(), 15);
        assert_eq!(engine.best_tour(), &[2, 1, 0, 4, 3]);
        assert_eq!(engine.best_tour_length(), 15);
        assert_eq!(engine.history().values(), &[15, 15, 15]);
        assert_eq!(engine.idle_iterations(), 11);

        let expected = [
            (0, 40, 40.0),
            (0, 34, 38.0),
            (9, 26, 94.0 / 3.0),
            (13, 15, 67.0 / 3.0),
            (25, 15, 15.0),
        ];
        let trace = engine.improvements();
        assert_eq!(trace.len(), expected.len());
        for (rec, &(iteration, best, avg)) in trace.iter().zip(expected.iter()) {
            assert_eq!(rec.iteration, iteration);
            assert_eq!(rec.best_tour_length, best);
            assert!((rec.list_average - avg).abs() < 1e-9, "{rec:?}");
        }
    }

    #[test]
    fn test_point_of_convergence_after_late_best() {
        let n = 100;
        let rows = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        let (a, b) = (i.min(j), i.max(j));
                        if a == b {
                            0
                        } else {
                            1 + ((a * b * 31 + a + b) % 100) as i64
                        }
                    })
                    .collect()
            })
            .collect();
        let m = DistanceMatrix::new(rows).unwrap();
        let tour: Vec<usize> = (0..n).collect();
        let start = m.tour_length(&tour);
        let stop = StoppingCriteria::point_of_convergence(20.0);
        let mut engine = LahcEngine::with_tour(&m, &config(1000, stop), tour, &[start]).unwrap();
        let mut rng = create_rng(7);
        engine.run(&mut rng);

        let stopped_at = engine.num_iterations();
        let idle = engine.idle_iterations();
        let trace = engine.improvements();
        let last_best = trace[trace.len() - 2].iteration;
        assert_eq!(trace.last().unwrap().iteration, stopped_at);
        assert!(last_best > CONVERGENCE_WARMUP);
        assert_eq!(idle, stopped_at - 1 - last_best);
        // first iteration where idle * (100 / R) >= iteration
        assert!(idle as f64 * 5.0 >= stopped_at as f64);
        assert!(((idle - 1) as f64) * 5.0 < (stopped_at - 1) as f64);
        assert_eq!(stopped_at, 540_420);
    }

    #[test]
    fn test_quality_target_stops_early() {
        let m = circle(8, 100.0);
        let optimum = brute_force_optimum(&m);
        let stop = StoppingCriteria::point_of_convergence(2.0).with_solution_quality(optimum);
        let mut rng = create_rng(11);
        let mut engine = LahcEngine::new(&m, &config(5, stop), &mut rng).unwrap();
        engine.run(&mut rng);

        assert_eq!(engine.best_tour_length(), optimum);
        assert!(engine.num_iterations() < CONVERGENCE_WARMUP);
        assert_eq!(engine.improvements().last().unwrap().iteration, engine.num_iterations());
    }

    #[test]
    fn test_run_on_stopped_engine_is_noop() {
        let m = random_instance(10, 6);
        let mut rng = create_rng(1);
        let mut engine =
            LahcEngine::new(&m, &config(5, StoppingCriteria::max_iteration(100)), &mut rng)
                .unwrap();
        engine.run(&mut rng);
        let trace_len = engine.improvements().len();

        engine.run(&mut rng);
        assert!(!engine.permutate(&mut rng));
        assert_eq!(engine.num_iterations(), 100);
        assert_eq!(engine.improvements().len(), trace_len);
    }

    #[test]
    fn test_permutate_single_steps() {
        let m = random_instance(25, 7);
        let mut rng = create_rng(3);
        let mut engine =
            LahcEngine::new(&m, &config(10, StoppingCriteria::max_iteration(1)), &mut rng)
                .unwrap();
        let start = engine.best_tour_length();

        for i in 0..5_000u64 {
            assert!(engine.permutate(&mut rng));
            assert_eq!(engine.num_iterations(), i + 1);
        }
        assert_eq!(engine.state(), EngineState::Running);
        assert!(is_valid_tour(engine.current_tour(), 25));
        assert_eq!(engine.current_tour_length(), m.tour_length(engine.current_tour()));
        assert!(engine.best_tour_length() < start);
        assert_eq!(engine.best_tour_length(), m.tour_length(engine.best_tour()));
        for w in engine.improvements().windows(2) {
            assert!(w[1].best_tour_length < w[0].best_tour_length);
        }
    }

    #[test]
    fn test_other_operators_drive_engine() {
        let m = random_instance(20, 8);
        for kind in [MutationKind::Swap, MutationKind::Displacement] {
            let mut rng = create_rng(5);
            let cfg = config(10, StoppingCriteria::max_iteration(5_000)).with_mutation(kind);
            let mut engine = LahcEngine::new(&m, &cfg, &mut rng).unwrap();
            let start = engine.current_tour_length();
            engine.run(&mut rng);
            assert!(is_valid_tour(engine.best_tour(), 20));
            assert_eq!(engine.best_tour_length(), m.tour_length(engine.best_tour()));
            assert!(engine.best_tour_length() < start, "{kind:?} made no progress");
        }
    }
}
