//! Graph snapshots, their matrix form, validation and generators.
//!
//! # Key Types
//!
//! - [`Graph`], [`Node`], [`Edge`]: the snapshot a caller hands in
//! - [`GraphModel`]: [`IndexMaps`] plus [`AdjacencyMatrix`], built once
//!   per search and read by both solvers
//!
//! # Utilities
//!
//! - [`validate`]: first well-formedness violation, if any
//! - [`generate_random`] / [`RandomGraphConfig`]: synthetic test graphs
//! - [`generate_fixed_example`]: a small deterministic road network
//! - [`path_distance`]: length of an explicit node path

mod generate;
mod model;
mod types;
mod validate;

pub use generate::{generate_fixed_example, generate_random, RandomGraphConfig};
pub use model::{path_distance, AdjacencyMatrix, GraphModel, IndexMaps};
pub use types::{Edge, Graph, Node};
pub use validate::validate;
