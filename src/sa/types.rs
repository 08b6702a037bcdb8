//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The user implements seed construction, neighbor generation and cost
/// evaluation. The SA runner handles temperature, acceptance and the
/// bookkeeping of the reported solution.
///
/// # Minimization
///
/// SA minimizes the cost function. A cost of `f64::INFINITY` marks an
/// infeasible solution, which is never accepted over a finite one.
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Creates a random initial solution, or `None` if the attempt failed.
    ///
    /// The runner makes exactly one attempt.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Option<Self::Solution>;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of the current solution.
    ///
    /// Returning an unchanged clone is allowed when no move applies.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
