//! Error types.
//!
//! Only malformed input is an error. An unreachable destination is a
//! normal outcome and is reported through [`SearchResult`](crate::SearchResult).

use thiserror::Error;

use crate::graph::City;

/// A malformed graph description.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("city {0:?} is listed more than once")]
    DuplicateCity(City),

    #[error("route {from:?} -> {to:?} references unknown city {city:?}")]
    UnknownCity { from: City, to: City, city: City },

    #[error("route {from:?} -> {to:?} has invalid distance {distance}")]
    InvalidDistance { from: City, to: City, distance: f64 },
}

/// Errors surfaced by graph construction and the solvers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("invalid annealing config: {0}")]
    InvalidConfig(String),
}

impl RoutingError {
    /// Returns `true` for errors caused by the graph description.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, RoutingError::InvalidInput(_))
    }
}
