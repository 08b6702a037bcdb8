//! In-memory road graph and its construction from a description.

use std::collections::HashMap;

use super::description::{City, GraphDescription};
use crate::error::{InvalidInput, RoutingError};

/// Undirected weighted graph over the listed cities.
///
/// Nodes are indexed by their position in the description's city list.
/// Adjacency lists keep edges in the order their first OK route appeared.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    cities: Vec<City>,
    index: HashMap<City, usize>,
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl Graph {
    /// Number of nodes, isolated ones included.
    pub fn node_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn contains(&self, city: &str) -> bool {
        self.index.contains_key(city)
    }

    pub fn index_of(&self, city: &str) -> Option<usize> {
        self.index.get(city).copied()
    }

    /// Returns the city at node index `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node >= node_count()`.
    pub fn city(&self, node: usize) -> &str {
        &self.cities[node]
    }

    /// `(neighbor, weight)` pairs of `node`.
    pub fn neighbors(&self, node: usize) -> &[(usize, f64)] {
        &self.adjacency[node]
    }

    /// Weight of the edge between `a` and `b`, if any.
    pub fn weight(&self, a: usize, b: usize) -> Option<f64> {
        self.adjacency
            .get(a)?
            .iter()
            .find(|&&(n, _)| n == b)
            .map(|&(_, w)| w)
    }

    /// Sum of edge weights along `path`.
    ///
    /// Returns `f64::INFINITY` for a path with fewer than two nodes or with
    /// a step between non-adjacent nodes.
    pub fn path_distance(&self, path: &[usize]) -> f64 {
        if path.len() < 2 {
            return f64::INFINITY;
        }
        let mut total = 0.0;
        for step in path.windows(2) {
            match self.weight(step[0], step[1]) {
                Some(w) => total += w,
                None => return f64::INFINITY,
            }
        }
        total
    }

    /// Checks that `path` is non-empty, has no repeated node and only
    /// steps along edges.
    pub fn is_simple_path(&self, path: &[usize]) -> bool {
        if path.is_empty() || path.iter().any(|&n| n >= self.node_count()) {
            return false;
        }
        let mut seen = vec![false; self.node_count()];
        for &node in path {
            if seen[node] {
                return false;
            }
            seen[node] = true;
        }
        path.windows(2).all(|s| self.weight(s[0], s[1]).is_some())
    }

    /// Maps node indices back to city identifiers.
    pub fn path_cities(&self, path: &[usize]) -> Vec<City> {
        path.iter().map(|&n| self.cities[n].clone()).collect()
    }

    fn connect(&mut self, a: usize, b: usize, weight: f64) {
        Self::upsert(&mut self.adjacency[a], b, weight);
        Self::upsert(&mut self.adjacency[b], a, weight);
    }

    // Last write wins on repeated pairs.
    fn upsert(edges: &mut Vec<(usize, f64)>, to: usize, weight: f64) {
        match edges.iter_mut().find(|(n, _)| *n == to) {
            Some(edge) => edge.1 = weight,
            None => edges.push((to, weight)),
        }
    }
}

/// Builds a [`Graph`] from a [`GraphDescription`].
///
/// Every listed city becomes a node. Each OK route adds an undirected edge,
/// a repeated unordered pair overwrites the earlier weight. Closed routes
/// never become edges but are still validated.
///
/// # Errors
///
/// [`RoutingError::InvalidInput`] when a city is listed twice, a route names
/// a city missing from the list, or a distance is not finite and positive.
///
/// # Examples
///
/// ```
/// use u_roadpath::graph::{GraphBuilder, GraphDescription, Route};
///
/// let description = GraphDescription::default()
///     .with_cities(["A", "B", "C"])
///     .with_route(Route::ok("A", "B", 1.0))
///     .with_route(Route::closed("B", "C", 1.0));
/// let graph = GraphBuilder::build(&description).unwrap();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 1);
/// ```
pub struct GraphBuilder;

impl GraphBuilder {
    pub fn build(description: &GraphDescription) -> Result<Graph, RoutingError> {
        let node_count = description.cities.len();
        let mut graph = Graph {
            cities: Vec::with_capacity(node_count),
            index: HashMap::with_capacity(node_count),
            adjacency: vec![Vec::new(); node_count],
        };

        for city in &description.cities {
            if graph.index.contains_key(city) {
                return Err(InvalidInput::DuplicateCity(city.clone()).into());
            }
            graph.index.insert(city.clone(), graph.cities.len());
            graph.cities.push(city.clone());
        }

        let mut closed = 0usize;
        for route in &description.routes {
            let lookup = |city: &City| {
                graph.index_of(city).ok_or_else(|| InvalidInput::UnknownCity {
                    from: route.from.clone(),
                    to: route.to.clone(),
                    city: city.clone(),
                })
            };
            let from = lookup(&route.from)?;
            let to = lookup(&route.to)?;

            if !route.distance.is_finite() || route.distance <= 0.0 {
                return Err(InvalidInput::InvalidDistance {
                    from: route.from.clone(),
                    to: route.to.clone(),
                    distance: route.distance,
                }
                .into());
            }

            if !route.is_open() {
                closed += 1;
                continue;
            }
            if from == to {
                log::debug!("ignoring self-loop route at {:?}", route.from);
                continue;
            }
            graph.connect(from, to, route.distance);
        }

        log::debug!(
            "built graph: {} cities, {} edges, {} closed routes skipped",
            graph.node_count(),
            graph.edge_count(),
            closed
        );

        Ok(graph)
    }
}
