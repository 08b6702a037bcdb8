//! Road network model.
//!
//! A [`GraphDescription`] lists cities and routes as the caller knows them.
//! [`GraphBuilder`] turns it into a [`Graph`]: an undirected adjacency list
//! over every listed city, with closed routes left out.

mod description;
mod network;

pub use description::{City, GraphDescription, Route, RouteStatus};
pub use network::{Graph, GraphBuilder};
