//! Solver output shared by both strategies.

use crate::graph::City;

/// A found path with its total distance, or "no path".
///
/// `path` and `distance` are either both present or both absent. "No path"
/// is an ordinary outcome: the endpoints are disconnected, missing from the
/// graph, or the annealing seed walk got stuck.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub path: Option<Vec<City>>,
    pub distance: Option<f64>,
}

impl SearchResult {
    pub fn found(path: Vec<City>, distance: f64) -> Self {
        Self {
            path: Some(path),
            distance: Some(distance),
        }
    }

    pub fn no_path() -> Self {
        Self::default()
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}
