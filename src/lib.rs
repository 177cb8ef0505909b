//! Shortest paths on weighted undirected graphs.
//!
//! Two solvers share one graph representation:
//!
//! - **Dijkstra**: exact single-pair and single-source shortest paths.
//! - **Ant Colony Optimization (ACO)**: a stochastic population search
//!   that converges toward a near-optimal path and records its progress.
//!
//! Both read a [`GraphModel`](graph::GraphModel), the dense adjacency
//! matrix plus id/index maps derived from a [`Graph`](graph::Graph)
//! snapshot. The [`engine`] module wraps validation, limits and solver
//! dispatch into the operations a service layer calls.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for snapshots, configs and results.
//!   A missing path serializes its distance as `null`; solver timings
//!   serialize as `duration_seconds`, a float number of seconds.
//! - `parallel`: build each ACO iteration's ants on the rayon pool.
//!
//! # Logging
//!
//! Events are emitted through `tracing`; install a subscriber to see them.

pub mod aco;
pub mod dijkstra;
#[cfg(feature = "serde")]
mod duration;
pub mod engine;
pub mod error;
pub mod graph;
mod random;
