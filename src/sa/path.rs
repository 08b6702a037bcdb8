//! Route search by simulated annealing.
//!
//! # Moves
//!
//! - **Seed**: a random walk from the start, each step choosing uniformly
//!   among unvisited neighbors of the tail, until the destination is reached.
//!   A walk that gets stuck is not retried.
//! - **Mutation**: pick an interior position `i`, replace `path[i]` with an
//!   unvisited neighbor of `path[i - 1]`, drop the old suffix and random-walk
//!   forward again. The new walk may get stuck short of the destination.
//!
//! A path that does not end at the destination costs `f64::INFINITY`, so
//! the acceptance rule never takes it over a complete path.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::seq::IndexedRandom;
use rand::Rng;

use super::config::SaConfig;
use super::runner::{create_rng, SaOutcome, SaResult, SaRunner};
use super::types::SaProblem;
use crate::error::RoutingError;
use crate::graph::{City, Graph};
use crate::search::SearchResult;

/// Paths between two fixed nodes of a [`Graph`], as an [`SaProblem`].
///
/// Solutions are node-index sequences starting at `start`.
pub struct RoutePathProblem<'g> {
    graph: &'g Graph,
    start: usize,
    end: usize,
}

impl<'g> RoutePathProblem<'g> {
    pub fn new(graph: &'g Graph, start: usize, end: usize) -> Self {
        Self { graph, start, end }
    }

    /// Random-walks forward from the tail of `path` until `end` or a dead end.
    fn extend<R: Rng>(&self, path: &mut Vec<usize>, visited: &mut [bool], rng: &mut R) {
        while let Some(&tail) = path.last() {
            if tail == self.end {
                break;
            }
            let Some(next) = self.pick_unvisited(tail, visited, rng) else {
                break;
            };
            visited[next] = true;
            path.push(next);
        }
    }

    fn pick_unvisited<R: Rng>(
        &self,
        node: usize,
        visited: &[bool],
        rng: &mut R,
    ) -> Option<usize> {
        let open: Vec<usize> = self
            .graph
            .neighbors(node)
            .iter()
            .map(|&(n, _)| n)
            .filter(|&n| !visited[n])
            .collect();
        open.choose(rng).copied()
    }
}

impl SaProblem for RoutePathProblem<'_> {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Option<Vec<usize>> {
        let mut visited = vec![false; self.graph.node_count()];
        let mut path = vec![self.start];
        visited[self.start] = true;
        self.extend(&mut path, &mut visited, rng);
        (path.last() == Some(&self.end)).then_some(path)
    }

    fn cost(&self, path: &Vec<usize>) -> f64 {
        if path.last() != Some(&self.end) {
            return f64::INFINITY;
        }
        self.graph.path_distance(path)
    }

    fn neighbor<R: Rng>(&self, path: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        if path.len() <= 2 {
            return path.clone();
        }

        let i = rng.random_range(1..=path.len() - 2);

        let mut visited = vec![false; self.graph.node_count()];
        for &node in path {
            visited[node] = true;
        }
        let Some(replacement) = self.pick_unvisited(path[i - 1], &visited, rng) else {
            return path.clone();
        };

        // The dropped suffix is free to be revisited by the new walk.
        for &node in &path[i..] {
            visited[node] = false;
        }
        let mut candidate = path[..i].to_vec();
        candidate.push(replacement);
        visited[replacement] = true;
        self.extend(&mut candidate, &mut visited, rng);
        candidate
    }
}

/// How an annealing search ended.
#[derive(Debug, Clone)]
pub enum AnnealingOutcome {
    /// A complete path, with run statistics.
    Found(SaResult<Vec<City>>),
    /// The seed walk got stuck before reaching the destination.
    SeedFailed,
    /// Start or end is not a node of the graph.
    MissingEndpoint,
}

impl AnnealingOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, AnnealingOutcome::Found(_))
    }

    /// Collapses both failure tags into "no path".
    pub fn into_search_result(self) -> SearchResult {
        match self {
            AnnealingOutcome::Found(result) => SearchResult::found(result.best, result.best_cost),
            AnnealingOutcome::SeedFailed | AnnealingOutcome::MissingEndpoint => {
                SearchResult::no_path()
            }
        }
    }
}

/// Simulated-annealing route search between two cities.
pub struct AnnealingPathSolver;

impl AnnealingPathSolver {
    /// Runs with an RNG seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_roadpath::graph::{GraphBuilder, GraphDescription, Route};
    /// use u_roadpath::sa::{AnnealingPathSolver, SaConfig};
    ///
    /// let description = GraphDescription::default()
    ///     .with_cities(["A", "B", "C"])
    ///     .with_route(Route::ok("A", "B", 2.0))
    ///     .with_route(Route::ok("B", "C", 3.0));
    /// let graph = GraphBuilder::build(&description).unwrap();
    ///
    /// let config = SaConfig::default().with_iterations(100).with_seed(42);
    /// let result = AnnealingPathSolver::solve(&graph, "A", "C", &config)
    ///     .unwrap()
    ///     .into_search_result();
    /// assert_eq!(result.distance, Some(5.0));
    /// ```
    pub fn solve(
        graph: &Graph,
        start: &str,
        end: &str,
        config: &SaConfig,
    ) -> Result<AnnealingOutcome, RoutingError> {
        Self::solve_with_cancel(graph, start, end, config, None)
    }

    /// Runs with an optional cancellation token, checked once per iteration.
    pub fn solve_with_cancel(
        graph: &Graph,
        start: &str,
        end: &str,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealingOutcome, RoutingError> {
        let mut rng = create_rng(config.seed);
        Self::search(graph, start, end, config, &mut rng, cancel.as_deref())
    }

    /// Runs drawing all randomness from `rng`. `config.seed` is ignored.
    pub fn solve_with_rng<R: Rng>(
        graph: &Graph,
        start: &str,
        end: &str,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<AnnealingOutcome, RoutingError> {
        Self::search(graph, start, end, config, rng, None)
    }

    fn search<R: Rng>(
        graph: &Graph,
        start: &str,
        end: &str,
        config: &SaConfig,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> Result<AnnealingOutcome, RoutingError> {
        config.validate().map_err(RoutingError::InvalidConfig)?;

        let (Some(source), Some(target)) = (graph.index_of(start), graph.index_of(end)) else {
            return Ok(AnnealingOutcome::MissingEndpoint);
        };

        if source == target {
            return Ok(AnnealingOutcome::Found(SaResult {
                best: vec![start.to_string()],
                best_cost: 0.0,
                iterations: 0,
                final_temperature: config.initial_temperature,
                accepted_moves: 0,
                improving_moves: 0,
                cancelled: false,
                cost_history: vec![0.0],
            }));
        }

        let problem = RoutePathProblem::new(graph, source, target);
        match SaRunner::run_with_rng(&problem, config, rng, cancel)? {
            SaOutcome::Completed(result) => Ok(AnnealingOutcome::Found(SaResult {
                best: graph.path_cities(&result.best),
                best_cost: result.best_cost,
                iterations: result.iterations,
                final_temperature: result.final_temperature,
                accepted_moves: result.accepted_moves,
                improving_moves: result.improving_moves,
                cancelled: result.cancelled,
                cost_history: result.cost_history,
            })),
            SaOutcome::SeedFailed => {
                log::debug!("seed walk from {start:?} got stuck before {end:?}");
                Ok(AnnealingOutcome::SeedFailed)
            }
        }
    }
}
