//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! [`SaRunner`] is the generic loop over any [`SaProblem`].
//! [`AnnealingPathSolver`] applies it to routes between two cities, with
//! random-walk seeding and suffix-rewalk mutation.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod path;
mod runner;
mod types;

pub use config::{BestTracking, SaConfig};
pub use path::{AnnealingOutcome, AnnealingPathSolver, RoutePathProblem};
pub use runner::{SaOutcome, SaResult, SaRunner};
pub use types::SaProblem;
