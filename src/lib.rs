//! Path search over partially closed road networks.
//!
//! Provides two strategies over the same graph model:
//!
//! - **Exact (Dijkstra)**: minimum total-distance path via a binary-heap
//!   search on an explicit adjacency list.
//! - **Simulated Annealing (SA)**: random-walk seed, suffix-rewalk mutation
//!   and temperature-driven acceptance of worse routes, cooling geometrically.
//!
//! # Architecture
//!
//! A caller-owned [`GraphDescription`] (cities plus routes marked `ok` or
//! `closed`) is turned into a fresh [`graph::Graph`] on every call; closed
//! routes never become edges. Both solvers report a [`SearchResult`], where
//! "no path" is an ordinary outcome and only malformed input is an error.
//!
//! # Examples
//!
//! ```
//! use u_roadpath::{shortest_path, GraphDescription, Route};
//!
//! let description = GraphDescription::default()
//!     .with_cities(["A", "B", "C", "D"])
//!     .with_route(Route::ok("A", "B", 1.0))
//!     .with_route(Route::closed("B", "C", 1.0))
//!     .with_route(Route::ok("A", "C", 5.0))
//!     .with_route(Route::ok("C", "D", 1.0));
//!
//! let result = shortest_path(&description, "A", "D").unwrap();
//! assert_eq!(result.distance, Some(6.0));
//! ```

pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod sa;
mod search;

pub use error::{InvalidInput, RoutingError};
pub use graph::{City, GraphDescription, Route, RouteStatus};
pub use sa::SaConfig;
pub use search::SearchResult;

use dijkstra::ExactPathSolver;
use graph::GraphBuilder;
use sa::AnnealingPathSolver;

/// Builds the graph and returns the exact shortest path from `start` to `end`.
///
/// # Errors
///
/// [`RoutingError::InvalidInput`] if the description is malformed.
pub fn shortest_path(
    description: &GraphDescription,
    start: &str,
    end: &str,
) -> Result<SearchResult, RoutingError> {
    let graph = GraphBuilder::build(description)?;
    Ok(ExactPathSolver::solve(&graph, start, end))
}

/// Builds the graph and searches a path by simulated annealing.
///
/// `SaConfig::default()` runs 5000 iterations from temperature 1000 with
/// cooling rate 0.995. A stuck seed walk and missing endpoints both yield
/// [`SearchResult::no_path`].
///
/// # Errors
///
/// [`RoutingError::InvalidInput`] for a malformed description,
/// [`RoutingError::InvalidConfig`] for an invalid `config`.
pub fn annealing_path(
    description: &GraphDescription,
    start: &str,
    end: &str,
    config: &SaConfig,
) -> Result<SearchResult, RoutingError> {
    let graph = GraphBuilder::build(description)?;
    AnnealingPathSolver::solve(&graph, start, end, config).map(|o| o.into_search_result())
}
