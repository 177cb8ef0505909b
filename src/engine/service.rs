//! Request-level entry points.

use super::config::{AcoOverrides, EngineConfig};
use crate::aco::{AcoResult, AntColony};
use crate::dijkstra::{DijkstraSolver, PathEntry, PathResult};
use crate::error::SearchError;
use crate::graph::{self, Graph, GraphModel, RandomGraphConfig};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Which solver to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Dijkstra,
    #[cfg_attr(feature = "serde", serde(rename = "ACO"))]
    Aco,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => f.write_str("Dijkstra"),
            Algorithm::Aco => f.write_str("ACO"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Dijkstra" => Ok(Algorithm::Dijkstra),
            "ACO" => Ok(Algorithm::Aco),
            other => Err(SearchError::InvalidParameters(format!(
                "unknown algorithm: {other}"
            ))),
        }
    }
}

/// A single search request against one graph snapshot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchRequest {
    pub algorithm: Algorithm,
    pub start: String,
    pub end: String,
    /// Ignored by Dijkstra.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameters: AcoOverrides,
}

impl SearchRequest {
    pub fn new(algorithm: Algorithm, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            algorithm,
            start: start.into(),
            end: end.into(),
            parameters: AcoOverrides::default(),
        }
    }

    pub fn with_parameters(mut self, parameters: AcoOverrides) -> Self {
        self.parameters = parameters;
        self
    }
}

/// Result of [`Engine::search`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    Dijkstra(PathResult),
    Aco(AcoResult),
}

impl SearchOutcome {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            SearchOutcome::Dijkstra(_) => Algorithm::Dijkstra,
            SearchOutcome::Aco(_) => Algorithm::Aco,
        }
    }

    pub fn path(&self) -> &[String] {
        match self {
            SearchOutcome::Dijkstra(r) => &r.path,
            SearchOutcome::Aco(r) => &r.path,
        }
    }

    pub fn distance(&self) -> Option<f64> {
        match self {
            SearchOutcome::Dijkstra(r) => r.distance,
            SearchOutcome::Aco(r) => r.distance,
        }
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            SearchOutcome::Dijkstra(r) => r.elapsed,
            SearchOutcome::Aco(r) => r.elapsed,
        }
    }
}

/// Both solvers on the same instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    pub aco: AcoResult,
    pub dijkstra: PathResult,

    /// `|aco - dijkstra|`, `None` unless both found a path.
    pub distance_difference: Option<f64>,

    /// ACO time minus Dijkstra time, in seconds.
    pub time_difference: f64,

    /// Whether both returned the same node sequence.
    pub same_path: bool,
}

/// Outcome of [`check`] in `{ok, message}` form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    pub ok: bool,
    pub message: String,
}

/// Validates `graph` and reports the result as a message.
///
/// ```
/// use pathweave::engine::check;
/// use pathweave::graph::{Graph, Node};
///
/// let report = check(&Graph::new("g").with_node(Node::new("A", "A")));
/// assert!(!report.ok);
/// assert!(report.message.contains("at least 2 nodes"));
/// ```
pub fn check(graph: &Graph) -> ValidationReport {
    match graph::validate(graph) {
        Ok(()) => ValidationReport {
            ok: true,
            message: "graph is valid".into(),
        },
        Err(e) => ValidationReport {
            ok: false,
            message: e.to_string(),
        },
    }
}

/// Validates, limits and dispatches searches over graph snapshots.
///
/// Every call builds a fresh [`GraphModel`]; nothing is kept between
/// calls, so an `Engine` can be shared across threads.
///
/// Snapshots must be connected. A disconnected graph fails in
/// [`Engine::prepare`] with [`ValidationError::Disconnected`] wrapped in
/// [`SearchError::Validation`], so results returned here always carry a
/// distance. To get a "no path" result (`distance: None`) for an
/// unreachable target, build a [`GraphModel`] and call
/// [`DijkstraSolver`] or [`AntColony`] directly.
///
/// [`ValidationError::Disconnected`]: crate::error::ValidationError::Disconnected
///
/// # Usage
///
/// ```
/// use pathweave::engine::{Algorithm, Engine, SearchRequest};
/// use pathweave::graph::generate_fixed_example;
///
/// let engine = Engine::default();
/// let graph = generate_fixed_example();
///
/// let outcome = engine
///     .search(&graph, &SearchRequest::new(Algorithm::Dijkstra, "kyiv", "odesa"))
///     .unwrap();
/// assert_eq!(outcome.distance(), Some(475.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// # Errors
    /// [`SearchError::InvalidParameters`] if `config` fails validation.
    pub fn new(config: EngineConfig) -> Result<Self, SearchError> {
        config.validate().map_err(SearchError::InvalidParameters)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Checks limits, validates and builds the matrix form of `graph`.
    pub fn prepare(&self, graph: &Graph) -> Result<GraphModel, SearchError> {
        if graph.nodes.len() > self.config.max_nodes {
            return Err(SearchError::LimitExceeded {
                what: "nodes",
                actual: graph.nodes.len(),
                limit: self.config.max_nodes,
            });
        }
        if graph.edges.len() > self.config.max_edges {
            return Err(SearchError::LimitExceeded {
                what: "edges",
                actual: graph.edges.len(),
                limit: self.config.max_edges,
            });
        }
        graph::validate(graph)?;
        Ok(GraphModel::build(graph)?)
    }

    /// Runs the solver named by `request`.
    pub fn search(&self, graph: &Graph, request: &SearchRequest) -> Result<SearchOutcome, SearchError> {
        tracing::debug!(
            graph = %graph.name,
            algorithm = %request.algorithm,
            start = %request.start,
            end = %request.end,
            "search requested"
        );
        match request.algorithm {
            Algorithm::Dijkstra => self
                .dijkstra(graph, &request.start, &request.end)
                .map(SearchOutcome::Dijkstra),
            Algorithm::Aco => self
                .aco(graph, &request.start, &request.end, &request.parameters)
                .map(SearchOutcome::Aco),
        }
    }

    pub fn dijkstra(&self, graph: &Graph, start: &str, end: &str) -> Result<PathResult, SearchError> {
        let model = self.prepare(graph)?;
        DijkstraSolver::new(&model).find_shortest_path(start, end)
    }

    pub fn aco(
        &self,
        graph: &Graph,
        start: &str,
        end: &str,
        overrides: &AcoOverrides,
    ) -> Result<AcoResult, SearchError> {
        let model = self.prepare(graph)?;
        let config = overrides.apply(&self.config.aco);
        AntColony::new(&model, config)?.find_shortest_path(start, end)
    }

    /// Dijkstra from `start` to every other node.
    pub fn all_shortest_paths(
        &self,
        graph: &Graph,
        start: &str,
    ) -> Result<BTreeMap<String, PathEntry>, SearchError> {
        let model = self.prepare(graph)?;
        DijkstraSolver::new(&model).find_all_shortest_paths(start)
    }

    /// Runs both solvers on one model and compares them.
    pub fn compare(
        &self,
        graph: &Graph,
        start: &str,
        end: &str,
        overrides: &AcoOverrides,
    ) -> Result<Comparison, SearchError> {
        let model = self.prepare(graph)?;
        let config = overrides.apply(&self.config.aco);
        let aco = AntColony::new(&model, config)?.find_shortest_path(start, end)?;
        let dijkstra = DijkstraSolver::new(&model).find_shortest_path(start, end)?;

        let distance_difference = match (aco.distance, dijkstra.distance) {
            (Some(a), Some(d)) => Some((a - d).abs()),
            _ => None,
        };
        let time_difference = aco.duration_seconds() - dijkstra.duration_seconds();
        let same_path = aco.path == dijkstra.path;

        Ok(Comparison {
            aco,
            dijkstra,
            distance_difference,
            time_difference,
            same_path,
        })
    }

    /// Generates a random graph, capping `node_count` at `max_nodes`.
    pub fn generate_random(&self, config: &RandomGraphConfig) -> Result<Graph, SearchError> {
        let mut config = config.clone();
        config.node_count = config.node_count.min(self.config.max_nodes);
        config.validate().map_err(SearchError::InvalidParameters)?;
        Ok(config.generate())
    }
}
