//! Exact shortest paths (Dijkstra).
//!
//! Classic single-source search with a binary heap. All route distances are
//! positive, so the first time the destination is settled its distance is
//! the true minimum.
//!
//! # References
//!
//! - Dijkstra, E. W. (1959). "A note on two problems in connexion with graphs",
//!   *Numerische Mathematik* 1, 269-271.

mod runner;

pub use runner::ExactPathSolver;
