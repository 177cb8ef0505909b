//! Ant Colony Optimization (ACO) for point-to-point shortest paths.
//!
//! Each iteration releases a population of ants from the start node.
//! An ant repeatedly steps to an unvisited neighbor chosen with
//! probability proportional to `pheromone^alpha * (1/weight)^beta`
//! (with a bonus for stepping onto the target) until it reaches the
//! target or runs out of moves. Successful ants reinforce the edges they
//! used in proportion to `q / length`, while every edge evaporates.
//! Pheromone is clamped to `[0.1, 10.0]` to keep the search from
//! collapsing onto a single path.
//!
//! The answer is the best tour over all iterations, not the last one.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: population size, exponents, evaporation, seed
//! - [`AntColony`]: owns the pheromone state and runs the loop
//! - [`AcoResult`] / [`ConvergenceSample`]: best path plus history
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Stützle & Hoos (2000), "MAX-MIN Ant System"

mod config;
mod matrices;
mod runner;

pub use config::AcoConfig;
pub use matrices::{HeuristicMatrix, PheromoneMatrix};
pub use runner::{AcoResult, AntColony, ConvergenceSample, SAMPLE_INTERVAL};
