//! Binary-heap Dijkstra over [`Graph`] adjacency lists.
//!
//! # Determinism
//!
//! Heap entries are ordered by `(distance, node index)`, so among equally
//! distant frontier nodes the one listed first in the description is settled
//! first. A node's predecessor only changes on a strictly shorter distance,
//! which makes the returned path for a given graph fully reproducible.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::Graph;
use crate::search::SearchResult;

#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    cost: f64,
    node: usize,
}

impl Eq for State {}

// Reversed for a min-heap.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest-path search with non-negative weights.
pub struct ExactPathSolver;

impl ExactPathSolver {
    /// Finds the minimum total-weight path from `start` to `end`.
    ///
    /// Returns [`SearchResult::no_path`] when either endpoint is not a node
    /// or `end` cannot be reached. `start == end` yields `[start]` with
    /// distance 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_roadpath::dijkstra::ExactPathSolver;
    /// use u_roadpath::graph::{GraphBuilder, GraphDescription, Route};
    ///
    /// let description = GraphDescription::default()
    ///     .with_cities(["A", "B", "C"])
    ///     .with_route(Route::ok("A", "B", 1.0))
    ///     .with_route(Route::ok("B", "C", 1.0))
    ///     .with_route(Route::ok("A", "C", 5.0));
    /// let graph = GraphBuilder::build(&description).unwrap();
    ///
    /// let result = ExactPathSolver::solve(&graph, "A", "C");
    /// assert_eq!(result.distance, Some(2.0));
    /// ```
    pub fn solve(graph: &Graph, start: &str, end: &str) -> SearchResult {
        let (Some(source), Some(target)) = (graph.index_of(start), graph.index_of(end)) else {
            return SearchResult::no_path();
        };

        let (dist, prev) = Self::search(graph, source, Some(target));
        if dist[target].is_infinite() {
            return SearchResult::no_path();
        }

        let mut path = vec![target];
        let mut node = target;
        while let Some(p) = prev[node] {
            path.push(p);
            node = p;
        }
        path.reverse();

        SearchResult::found(graph.path_cities(&path), dist[target])
    }

    /// Distances from `start` to every node, indexed like the graph.
    ///
    /// Unreachable nodes get `f64::INFINITY`. Returns `None` if `start` is
    /// not a node.
    pub fn distances_from(graph: &Graph, start: &str) -> Option<Vec<f64>> {
        let source = graph.index_of(start)?;
        Some(Self::search(graph, source, None).0)
    }

    fn search(
        graph: &Graph,
        source: usize,
        target: Option<usize>,
    ) -> (Vec<f64>, Vec<Option<usize>>) {
        let n = graph.node_count();
        let mut dist = vec![f64::INFINITY; n];
        let mut prev = vec![None; n];
        let mut heap = BinaryHeap::new();

        dist[source] = 0.0;
        heap.push(State {
            cost: 0.0,
            node: source,
        });

        while let Some(State { cost, node }) = heap.pop() {
            if Some(node) == target {
                break;
            }
            if cost > dist[node] {
                continue;
            }
            for &(next, weight) in graph.neighbors(node) {
                let next_cost = cost + weight;
                if next_cost < dist[next] {
                    dist[next] = next_cost;
                    prev[next] = Some(node);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
            }
        }

        (dist, prev)
    }
}
