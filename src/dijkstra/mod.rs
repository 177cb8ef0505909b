//! Exact shortest paths (Dijkstra).
//!
//! Classic label-setting search with a binary heap keyed by tentative
//! distance. Correct for the strictly positive weights that
//! [`validate`](crate::graph::validate) enforces.
//!
//! # References
//!
//! - Dijkstra (1959), "A Note on Two Problems in Connexion with Graphs"

mod solver;

pub use solver::{DijkstraSolver, PathEntry, PathResult};
