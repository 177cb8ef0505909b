//! Caller-facing surface: one function per collaborator operation.
//!
//! [`Engine`] takes a raw [`Graph`](crate::graph::Graph) snapshot, checks
//! it against [`EngineConfig`] limits, validates it, builds the matrix
//! form and hands it to the requested solver. ACO parameters a request
//! leaves unset come from [`EngineConfig::aco`].

mod config;
mod service;

pub use config::{AcoOverrides, EngineConfig};
pub use service::{
    check, Algorithm, Comparison, Engine, SearchOutcome, SearchRequest, ValidationReport,
};
