//! The pLAHC list-size ladder.

use rand::Rng;
use tracing::{debug, info, warn};

use super::config::PlahcConfig;
use super::types::{EscalationEvent, ProgressRecord};
use crate::error::LahcError;
use crate::lahc::LahcEngine;
use crate::tsp::TspInstance;

/// Parameter-less LAHC: runs LAHC engines with growing list sizes until
/// one of them reaches the target tour length.
///
/// Engines are kept in creation order ("race track"); event `k` describes
/// engine `k`. Each engine starts from its own random tour.
///
/// # Examples
///
/// ```
/// use u_lahc::plahc::{Plahc, PlahcConfig};
/// use u_lahc::random::create_rng;
/// use u_lahc::tsp::{DistanceMatrix, EdgeWeight};
///
/// let coords = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
/// let m = DistanceMatrix::from_coordinates(&coords, EdgeWeight::Euc2d);
///
/// let mut rng = create_rng(3);
/// let mut plahc = Plahc::new(&m, &PlahcConfig::new(40), &mut rng).unwrap();
/// plahc.run(&mut rng).unwrap();
/// assert_eq!(plahc.best_tour_length(), 40);
/// ```
pub struct Plahc<'a, P: TspInstance + ?Sized> {
    problem: &'a P,
    config: PlahcConfig,
    target: i64,
    race_track: Vec<LahcEngine<'a, P>>,
    events: Vec<EscalationEvent>,
    current_index: usize,
    total_iteration: u64,
    total_improvements: u64,
    best_tour_length: i64,
    best_index: usize,
    finished: bool,
}

impl<'a, P: TspInstance + ?Sized> Plahc<'a, P> {
    /// Creates the first rung with `base_list_size`.
    ///
    /// # Errors
    /// Configuration errors from [`PlahcConfig::validate`], or
    /// [`LahcError::TooFewCities`].
    pub fn new<R: Rng>(
        problem: &'a P,
        config: &PlahcConfig,
        rng: &mut R,
    ) -> Result<Self, LahcError> {
        config.validate()?;
        let target = config.stopping.solution_quality.ok_or_else(|| {
            LahcError::UnsupportedStoppingCriteria("pLAHC only stops on solution_quality".into())
        })?;

        let first = LahcEngine::new(problem, &config.rung(0)?, rng)?;
        let best_tour_length = first.best_tour_length();
        let mut plahc = Self {
            problem,
            config: config.clone(),
            target,
            race_track: Vec::new(),
            events: Vec::new(),
            current_index: 0,
            total_iteration: 0,
            total_improvements: 0,
            best_tour_length,
            best_index: 0,
            finished: false,
        };
        plahc.register(first);
        Ok(plahc)
    }

    /// Climbs the ladder until a rung reaches the target.
    ///
    /// The engine prepared for the rung after the successful one is
    /// discarded along with its event. Once `run` has returned, calling it
    /// again does nothing, whether it succeeded or failed.
    ///
    /// A target below the instance's optimum is never reached: the ladder
    /// keeps growing the list until the next rung cannot be built, which
    /// is reported as an error.
    ///
    /// # Errors
    /// [`LahcError::ListSizeOverflow`] if the next list size does not fit
    /// in `usize`, [`LahcError::InvalidConfig`] if it cannot be allocated.
    /// Completed rungs stay queryable and no pending rung is left behind.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> Result<(), LahcError> {
        if self.finished {
            return Ok(());
        }
        while self.total_iteration == 0 || self.best_tour_length > self.target {
            if let Err(e) = self.escalate(rng) {
                self.finished = true;
                warn!(
                    rungs = self.events.len(),
                    total_iterations = self.total_iteration,
                    best_tour_length = self.best_tour_length,
                    error = %e,
                    "pLAHC stopped before reaching the target"
                );
                return Err(e);
            }
        }
        self.events.pop();
        self.race_track.pop();
        self.finished = true;

        info!(
            rungs = self.events.len(),
            total_iterations = self.total_iteration,
            best_tour_length = self.best_tour_length,
            best_list_size = self.best_list_size(),
            "pLAHC finished"
        );
        Ok(())
    }

    /// Runs the current rung to completion and prepares the next one.
    fn escalate<R: Rng>(&mut self, rng: &mut R) -> Result<(), LahcError> {
        let index = self.current_index;
        let engine = &mut self.race_track[index];
        engine.run(rng);

        let iterations = engine.num_iterations();
        let improvements = engine.improvements().len() as u64;
        let best = engine.best_tour_length();
        self.total_iteration += iterations;
        self.total_improvements += improvements;

        let event = &mut self.events[index];
        event.ending_iteration = self.total_iteration;
        event.iterations = iterations;
        event.improvements = improvements;
        event.best_tour_length = best;
        event.final_list_average = engine.list_average();

        if best < self.best_tour_length {
            self.best_tour_length = best;
            self.best_index = index;
        }
        info!(
            rung = index,
            list_size = event.list_size,
            iterations,
            rung_best = best,
            best_tour_length = self.best_tour_length,
            "pLAHC rung finished"
        );

        let next_index =
            u32::try_from(index + 1).map_err(|_| LahcError::ListSizeOverflow {
                base: self.config.base_list_size,
                scale: self.config.list_scaling_size,
                index: u32::MAX,
            })?;
        let next = LahcEngine::new(self.problem, &self.config.rung(next_index)?, rng)?;
        self.register(next);
        self.current_index = index + 1;
        Ok(())
    }

    fn register(&mut self, engine: LahcEngine<'a, P>) {
        let event = EscalationEvent::pending(
            engine.list_size(),
            self.total_iteration,
            engine.best_tour_length(),
            engine.list_average(),
        );
        debug!(
            list_size = event.list_size,
            starting_iteration = event.starting_iteration,
            "rung registered"
        );
        self.events.push(event);
        self.race_track.push(engine);
    }

    /// One event per rung, in creation order.
    pub fn events(&self) -> &[EscalationEvent] {
        &self.events
    }

    /// Engines in creation order.
    pub fn race_track(&self) -> &[LahcEngine<'a, P>] {
        &self.race_track
    }

    /// Sum of the iterations of all completed rungs.
    pub fn total_iterations(&self) -> u64 {
        self.total_iteration
    }

    /// Sum of the trace lengths of all completed rungs.
    pub fn total_improvements(&self) -> u64 {
        self.total_improvements
    }

    pub fn best_tour_length(&self) -> i64 {
        self.best_tour_length
    }

    pub fn best_tour(&self) -> &[usize] {
        self.race_track[self.best_index].best_tour()
    }

    /// Index of the rung holding the best tour.
    pub fn best_index(&self) -> usize {
        self.best_index
    }

    pub fn best_list_size(&self) -> usize {
        self.race_track[self.best_index].list_size()
    }

    /// Target tour length.
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Improvement traces of all rungs merged into one ladder-wide trace.
    ///
    /// Rungs are taken in creation order and each record's iteration is
    /// shifted by its rung's starting iteration. The running best moves to
    /// a rung whenever one of its records reaches or beats it.
    pub fn progress(&self) -> Vec<ProgressRecord> {
        let mut records = Vec::with_capacity(self.total_improvements as usize);
        let mut best: Option<(i64, usize, f64)> = None;
        for (event, engine) in self.events.iter().zip(&self.race_track) {
            for rec in engine.improvements() {
                let (best_len, best_size, best_avg) = match best {
                    Some(b) if b.0 < rec.best_tour_length => b,
                    _ => (rec.best_tour_length, event.list_size, rec.list_average),
                };
                best = Some((best_len, best_size, best_avg));
                records.push(ProgressRecord {
                    iteration: event.starting_iteration + rec.iteration,
                    improvement: records.len() as u64 + 1,
                    best_tour_length: best_len,
                    best_list_size: best_size,
                    best_list_average: best_avg,
                    list_size: event.list_size,
                    rung_best_tour_length: rec.best_tour_length,
                    list_average: rec.list_average,
                });
            }
        }
        records
    }
}
