//! SA execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{BestTracking, SaConfig};
use super::types::SaProblem;
use crate::error::RoutingError;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The reported solution, see [`BestTracking`].
    pub best: S,

    /// Cost of `best`.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature after the last iteration.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of accepted moves that strictly lowered the current cost.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// `best_cost` sampled every 100 iterations, plus the final value.
    pub cost_history: Vec<f64>,
}

/// How a run ended.
#[derive(Debug, Clone)]
pub enum SaOutcome<S: Clone> {
    Completed(SaResult<S>),
    /// [`SaProblem::initial_solution`] returned `None`; nothing was searched.
    SeedFailed,
}

const HISTORY_INTERVAL: usize = 100;

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with an RNG seeded from `config.seed` (OS entropy if unset).
    pub fn run<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
    ) -> Result<SaOutcome<P::Solution>, RoutingError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs SA with an optional cancellation token.
    pub fn run_with_cancel<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaOutcome<P::Solution>, RoutingError> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(problem, config, &mut rng, cancel.as_deref())
    }

    /// Runs SA drawing all randomness from `rng`. `config.seed` is ignored.
    ///
    /// Each iteration cools first, then evaluates one neighbor. A neighbor is
    /// accepted when it is strictly cheaper than the current solution, or
    /// otherwise with probability `exp((current - candidate) / max(T, floor))`.
    /// The uniform draw is only made for non-improving neighbors.
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> Result<SaOutcome<P::Solution>, RoutingError> {
        config.validate().map_err(RoutingError::InvalidConfig)?;

        let Some(mut current) = problem.initial_solution(rng) else {
            log::debug!("initial solution could not be constructed");
            return Ok(SaOutcome::SeedFailed);
        };
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        let mut cost_history = vec![best_cost];

        for _ in 0..config.iterations {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                break;
            }

            temperature *= config.cooling_rate;

            let neighbor = problem.neighbor(&current, rng);
            let neighbor_cost = problem.cost(&neighbor);

            let improving = neighbor_cost < current_cost;
            let accept = improving || {
                let t = temperature.max(config.temperature_floor);
                let probability = ((current_cost - neighbor_cost) / t).exp();
                rng.random::<f64>() < probability
            };

            if accept {
                if improving {
                    improving_moves += 1;
                }
                accepted_moves += 1;
                current = neighbor;
                current_cost = neighbor_cost;

                let replace = match config.best_tracking {
                    BestTracking::LastAccepted => true,
                    BestTracking::GlobalBest => current_cost < best_cost,
                };
                if replace {
                    best = current.clone();
                    best_cost = current_cost;
                }
                log::trace!("accepted cost {current_cost:.3} at T={temperature:.6}");
            }

            total_iterations += 1;

            if total_iterations % HISTORY_INTERVAL == 0 {
                cost_history.push(best_cost);
            }
        }

        if cost_history
            .last()
            .is_none_or(|&last| last.to_bits() != best_cost.to_bits())
        {
            cost_history.push(best_cost);
        }

        log::debug!(
            "annealing finished: {total_iterations} iterations, {accepted_moves} accepted, best cost {best_cost:.3}"
        );

        Ok(SaOutcome::Completed(SaResult {
            best,
            best_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            cost_history,
        }))
    }
}

/// Seeded `StdRng`, or one drawn from OS entropy.
pub(crate) fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Integer line: cost |x - target|, neighbor x +/- 1 ----

    struct LineProblem {
        target: i64,
    }

    impl SaProblem for LineProblem {
        type Solution = i64;

        fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Option<i64> {
            Some(0)
        }

        fn cost(&self, x: &i64) -> f64 {
            (x - self.target).abs() as f64
        }

        fn neighbor<R: Rng>(&self, x: &i64, rng: &mut R) -> i64 {
            if rng.random_bool(0.5) {
                x + 1
            } else {
                x - 1
            }
        }
    }

    // ---- Always steps uphill by one ----

    struct UphillProblem;

    impl SaProblem for UphillProblem {
        type Solution = u32;

        fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Option<u32> {
            Some(0)
        }

        fn cost(&self, x: &u32) -> f64 {
            *x as f64
        }

        fn neighbor<R: Rng>(&self, x: &u32, _rng: &mut R) -> u32 {
            x + 1
        }
    }

    // ---- Neighbors are always infeasible ----

    struct DeadEndProblem;

    impl SaProblem for DeadEndProblem {
        type Solution = Option<u8>;

        fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Option<Option<u8>> {
            Some(Some(1))
        }

        fn cost(&self, x: &Option<u8>) -> f64 {
            x.map_or(f64::INFINITY, f64::from)
        }

        fn neighbor<R: Rng>(&self, _x: &Option<u8>, _rng: &mut R) -> Option<u8> {
            None
        }
    }

    struct NoSeedProblem;

    impl SaProblem for NoSeedProblem {
        type Solution = ();

        fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Option<()> {
            None
        }

        fn cost(&self, _: &()) -> f64 {
            0.0
        }

        fn neighbor<R: Rng>(&self, _: &(), _rng: &mut R) {}
    }

    fn completed<S: Clone>(outcome: SaOutcome<S>) -> SaResult<S> {
        match outcome {
            SaOutcome::Completed(result) => result,
            SaOutcome::SeedFailed => panic!("expected a completed run"),
        }
    }

    #[test]
    fn test_sa_line_converges() {
        let problem = LineProblem { target: 12 };
        let config = SaConfig::default()
            .with_iterations(5000)
            .with_initial_temperature(10.0)
            .with_cooling_rate(0.99)
            .with_best_tracking(BestTracking::GlobalBest)
            .with_seed(42);

        let result = completed(SaRunner::run(&problem, &config).unwrap());

        assert_eq!(result.best, 12, "expected target, got {}", result.best);
        assert_eq!(result.best_cost, 0.0);
        assert!(result.improving_moves > 0);
    }

    #[test]
    fn test_sa_runs_exact_iteration_count() {
        let problem = LineProblem { target: 3 };
        let config = SaConfig::default().with_iterations(250).with_seed(1);

        let result = completed(SaRunner::run(&problem, &config).unwrap());

        assert_eq!(result.iterations, 250);
        assert!(!result.cancelled);
        let expected_t = 1000.0 * 0.995f64.powi(250);
        assert!((result.final_temperature - expected_t).abs() < 1e-6);
    }

    #[test]
    fn test_sa_zero_iterations_returns_seed() {
        let problem = LineProblem { target: 3 };
        let config = SaConfig::default().with_iterations(0).with_seed(1);

        let result = completed(SaRunner::run(&problem, &config).unwrap());

        assert_eq!(result.best, 0);
        assert_eq!(result.best_cost, 3.0);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.cost_history, vec![3.0]);
    }

    #[test]
    fn test_sa_seed_failure() {
        let config = SaConfig::default().with_seed(1);
        let outcome = SaRunner::run(&NoSeedProblem, &config).unwrap();
        assert!(matches!(outcome, SaOutcome::SeedFailed));
    }

    #[test]
    fn test_sa_invalid_config() {
        let config = SaConfig::default().with_cooling_rate(2.0);
        let err = SaRunner::run(&LineProblem { target: 0 }, &config).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidConfig(_)));
    }

    #[test]
    fn test_sa_cancellation() {
        let problem = LineProblem { target: 5 };
        let config = SaConfig::default().with_seed(42);

        // Set before running so the first check fires.
        let cancel = Arc::new(AtomicBool::new(true));

        let result = completed(SaRunner::run_with_cancel(&problem, &config, Some(cancel)).unwrap());
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.best, 0);
    }

    #[test]
    fn test_sa_last_accepted_can_regress() {
        let config = SaConfig::default()
            .with_iterations(100)
            .with_initial_temperature(1e12)
            .with_cooling_rate(1.0)
            .with_seed(42);

        let result = completed(SaRunner::run(&UphillProblem, &config).unwrap());

        assert!(result.accepted_moves > 90);
        assert_eq!(result.improving_moves, 0);
        assert_eq!(result.best_cost, result.best as f64);
        assert!(result.best_cost > 0.0);
    }

    #[test]
    fn test_sa_global_best_keeps_minimum() {
        let config = SaConfig::default()
            .with_iterations(100)
            .with_initial_temperature(1e12)
            .with_cooling_rate(1.0)
            .with_best_tracking(BestTracking::GlobalBest)
            .with_seed(42);

        let result = completed(SaRunner::run(&UphillProblem, &config).unwrap());

        assert!(result.accepted_moves > 90);
        assert_eq!(result.best, 0);
        for window in result.cost_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn test_sa_never_accepts_infeasible() {
        let config = SaConfig::default()
            .with_iterations(500)
            .with_initial_temperature(1e12)
            .with_seed(3);

        let result = completed(SaRunner::run(&DeadEndProblem, &config).unwrap());

        assert_eq!(result.accepted_moves, 0);
        assert_eq!(result.best, Some(1));
    }

    #[test]
    fn test_sa_same_seed_same_result() {
        let problem = LineProblem { target: 40 };
        let config = SaConfig::default().with_iterations(1000).with_seed(9);

        let a = completed(SaRunner::run(&problem, &config).unwrap());
        let b = completed(SaRunner::run(&problem, &config).unwrap());

        assert_eq!(a.best, b.best);
        assert_eq!(a.accepted_moves, b.accepted_moves);
        assert_eq!(a.cost_history, b.cost_history);
    }
}
