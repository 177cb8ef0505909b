//! ACO iteration loop.
//!
//! [`AntColony`] repeats: construct one tour per ant → track the running
//! best → evaporate/deposit/clamp pheromone → sample convergence.

use super::config::AcoConfig;
use super::matrices::{HeuristicMatrix, PheromoneMatrix};
use crate::error::SearchError;
use crate::graph::{AdjacencyMatrix, GraphModel, IndexMaps};
use crate::random::{create_rng, rng_from};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Convergence samples are taken every this many iterations, plus the last.
pub const SAMPLE_INTERVAL: usize = 10;

/// Extra weight on the heuristic term for a step straight onto the target.
const TARGET_BONUS: f64 = 2.0;

/// Snapshot of the search state after one iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceSample {
    /// Zero-based iteration index.
    pub iteration: usize,

    /// Running best distance, `None` while no ant has reached the target.
    pub best_distance: Option<f64>,

    /// Running best path, empty while no ant has reached the target.
    pub best_path: Vec<String>,

    /// Mean length of this iteration's successful tours, `None` if every
    /// ant failed.
    pub avg_distance: Option<f64>,
}

/// Result of an ACO run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Best path found over all iterations, empty if none.
    pub path: Vec<String>,

    /// Length of `path`, `None` if no ant ever reached the target.
    pub distance: Option<f64>,

    /// Wall-clock time spent in the solver.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "duration_seconds", with = "crate::duration::seconds")
    )]
    pub elapsed: Duration,

    /// Iterations executed.
    pub iterations: usize,

    /// Samples at iterations 0, 10, 20, ... and the final iteration.
    pub history: Vec<ConvergenceSample>,

    /// Parameters the run used.
    pub config: AcoConfig,
}

impl AcoResult {
    /// Returns `true` if a path was found.
    pub fn is_found(&self) -> bool {
        self.distance.is_some()
    }

    pub fn duration_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// A successful ant: node indices and total length.
type Tour = (Vec<usize>, f64);

/// Ant Colony Optimization over a [`GraphModel`].
///
/// The pheromone matrix belongs to this instance and is reset at the
/// start of every search.
///
/// # Usage
///
/// ```
/// use pathweave::aco::{AcoConfig, AntColony};
/// use pathweave::graph::{generate_fixed_example, GraphModel};
///
/// let model = GraphModel::build(&generate_fixed_example()).unwrap();
/// let config = AcoConfig::default().with_iterations(30).with_seed(42);
/// let mut colony = AntColony::new(&model, config).unwrap();
///
/// let result = colony.find_shortest_path("kyiv", "odesa").unwrap();
/// assert_eq!(result.path.first().map(String::as_str), Some("kyiv"));
/// assert_eq!(result.path.last().map(String::as_str), Some("odesa"));
/// ```
#[derive(Debug, Clone)]
pub struct AntColony<'a> {
    matrix: &'a AdjacencyMatrix,
    maps: &'a IndexMaps,
    config: AcoConfig,
    pheromone: PheromoneMatrix,
    heuristic: HeuristicMatrix,
}

impl<'a> AntColony<'a> {
    /// Creates a colony for `model`.
    ///
    /// # Errors
    /// [`SearchError::InvalidParameters`] if `config` fails
    /// [`AcoConfig::validate`].
    pub fn new(model: &'a GraphModel, config: AcoConfig) -> Result<Self, SearchError> {
        Self::from_parts(&model.matrix, &model.maps, config)
    }

    /// Creates a colony from a matrix and the maps that index it.
    pub fn from_parts(
        matrix: &'a AdjacencyMatrix,
        maps: &'a IndexMaps,
        config: AcoConfig,
    ) -> Result<Self, SearchError> {
        config.validate().map_err(SearchError::InvalidParameters)?;
        debug_assert_eq!(matrix.size(), maps.len());
        Ok(Self {
            matrix,
            maps,
            pheromone: PheromoneMatrix::new(matrix.size()),
            heuristic: HeuristicMatrix::from_adjacency(matrix),
            config,
        })
    }

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Pheromone levels as left by the most recent search.
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// Searches with an RNG seeded from [`AcoConfig::seed`].
    ///
    /// # Errors
    /// [`SearchError::UnknownIdentifier`] if either id is not a node.
    pub fn find_shortest_path(&mut self, start: &str, end: &str) -> Result<AcoResult, SearchError> {
        let mut rng = rng_from(self.config.seed);
        self.find_shortest_path_with_rng(start, end, &mut rng)
    }

    /// Searches drawing all randomness from `rng`.
    ///
    /// Each ant gets its own generator seeded from `rng`, so the outcome
    /// does not depend on whether ants are built in parallel.
    pub fn find_shortest_path_with_rng<R: Rng>(
        &mut self,
        start: &str,
        end: &str,
        rng: &mut R,
    ) -> Result<AcoResult, SearchError> {
        let started = Instant::now();
        let source = self.resolve(start)?;
        let target = self.resolve(end)?;

        self.pheromone.reset();

        let iterations = self.config.iterations;
        let mut best: Option<Tour> = None;
        let mut history = Vec::with_capacity(iterations / SAMPLE_INTERVAL + 2);

        for iteration in 0..iterations {
            let seeds: Vec<u64> = (0..self.config.num_ants).map(|_| rng.random()).collect();
            let tours = self.construct_all(&seeds, source, target);

            for (path, length) in tours.iter().flatten() {
                if best.as_ref().is_none_or(|(_, b)| *length < *b) {
                    best = Some((path.clone(), *length));
                }
            }

            self.pheromone.update(
                self.config.evaporation,
                self.config.q,
                tours.iter().flatten().map(|(p, l)| (p.as_slice(), *l)),
            );
            tracing::trace!(
                iteration,
                successful = tours.iter().filter(|t| t.is_some()).count(),
                "pheromone updated"
            );

            if iteration % SAMPLE_INTERVAL == 0 || iteration + 1 == iterations {
                let sample = self.sample(iteration, best.as_ref(), &tours);
                tracing::debug!(
                    iteration,
                    best = ?sample.best_distance,
                    avg = ?sample.avg_distance,
                    "aco convergence sample"
                );
                history.push(sample);
            }
        }

        let elapsed = started.elapsed();
        let (path, distance) = match best {
            Some((path, length)) => (self.maps.to_ids(&path), Some(length)),
            None => {
                tracing::warn!(start, end, iterations, "no ant reached the target");
                (Vec::new(), None)
            }
        };

        Ok(AcoResult {
            path,
            distance,
            elapsed,
            iterations,
            history,
            config: self.config.clone(),
        })
    }

    fn resolve(&self, id: &str) -> Result<usize, SearchError> {
        self.maps
            .index_of(id)
            .ok_or_else(|| SearchError::UnknownIdentifier(id.to_string()))
    }

    /// Builds one tour per seed. Failed ants yield `None`.
    fn construct_all(&self, seeds: &[u64], source: usize, target: usize) -> Vec<Option<Tour>> {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return seeds
                .par_iter()
                .map(|&s| self.construct(source, target, &mut create_rng(s)))
                .collect();
        }

        seeds
            .iter()
            .map(|&s| self.construct(source, target, &mut create_rng(s)))
            .collect()
    }

    /// Walks one ant from `source` until it reaches `target` or gets stuck.
    fn construct<R: Rng>(&self, source: usize, target: usize, rng: &mut R) -> Option<Tour> {
        let mut visited = vec![false; self.matrix.size()];
        let mut path = vec![source];
        let mut length = 0.0;
        let mut current = source;
        visited[source] = true;

        while current != target {
            let next = self.choose_next(current, target, &visited, rng)?;
            length += self.matrix.get(current, next);
            visited[next] = true;
            path.push(next);
            current = next;
        }

        Some((path, length))
    }

    /// Roulette-wheel choice among unvisited neighbors of `current`.
    ///
    /// Weight of neighbor `n` is `tau^alpha * eta^beta`, doubled when `n`
    /// is the target. Falls back to a uniform draw if every weight is 0.
    fn choose_next<R: Rng>(
        &self,
        current: usize,
        target: usize,
        visited: &[bool],
        rng: &mut R,
    ) -> Option<usize> {
        let candidates: Vec<(usize, f64)> = self
            .matrix
            .neighbors(current)
            .filter(|&(n, _)| !visited[n])
            .map(|(n, _)| {
                let tau = self.pheromone.get(current, n).powf(self.config.alpha);
                let mut eta = self.heuristic.get(current, n).powf(self.config.beta);
                if n == target {
                    eta *= TARGET_BONUS;
                }
                (n, tau * eta)
            })
            .collect();

        if candidates.is_empty() {
            return None;
        }

        let total: f64 = candidates.iter().map(|&(_, w)| w).sum();
        if !(total > 0.0 && total.is_finite()) {
            return Some(candidates[rng.random_range(0..candidates.len())].0);
        }

        let mut r = rng.random::<f64>() * total;
        for &(n, w) in &candidates {
            r -= w;
            if r < 0.0 {
                return Some(n);
            }
        }
        candidates.last().map(|&(n, _)| n)
    }

    fn sample(
        &self,
        iteration: usize,
        best: Option<&Tour>,
        tours: &[Option<Tour>],
    ) -> ConvergenceSample {
        let lengths: Vec<f64> = tours.iter().flatten().map(|(_, l)| *l).collect();
        let avg_distance =
            (!lengths.is_empty()).then(|| lengths.iter().sum::<f64>() / lengths.len() as f64);

        ConvergenceSample {
            iteration,
            best_distance: best.map(|(_, l)| *l),
            best_path: best.map(|(p, _)| self.maps.to_ids(p)).unwrap_or_default(),
            avg_distance,
        }
    }
}
