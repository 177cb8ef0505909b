//! Engine configuration and per-request ACO overrides.

use crate::aco::AcoConfig;
use std::str::FromStr;

/// Defaults and limits applied by [`Engine`](super::Engine).
///
/// # Examples
///
/// ```
/// use pathweave::engine::EngineConfig;
///
/// let config = EngineConfig::default().with_max_nodes(50);
/// assert_eq!(config.max_nodes, 50);
/// assert_eq!(config.max_edges, 500);
/// assert_eq!(config.aco.num_ants, 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// ACO parameters used for any field a request leaves unset.
    pub aco: AcoConfig,

    /// Largest graph, in nodes, the engine will search or generate.
    pub max_nodes: usize,

    /// Largest graph, in edges, the engine will search.
    pub max_edges: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            aco: AcoConfig::default(),
            max_nodes: 100,
            max_edges: 500,
        }
    }
}

impl EngineConfig {
    /// Reads overrides from the process environment.
    ///
    /// | variable              | field             |
    /// |-----------------------|-------------------|
    /// | `DEFAULT_NUM_ANTS`    | `aco.num_ants`    |
    /// | `DEFAULT_ALPHA`       | `aco.alpha`       |
    /// | `DEFAULT_BETA`        | `aco.beta`        |
    /// | `DEFAULT_EVAPORATION` | `aco.evaporation` |
    /// | `DEFAULT_ITERATIONS`  | `aco.iterations`  |
    /// | `MAX_GRAPH_NODES`     | `max_nodes`       |
    /// | `MAX_GRAPH_EDGES`     | `max_edges`       |
    ///
    /// Unset or unparsable variables keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reads through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();
        let aco = AcoConfig {
            num_ants: read(&lookup, "DEFAULT_NUM_ANTS", d.aco.num_ants),
            alpha: read(&lookup, "DEFAULT_ALPHA", d.aco.alpha),
            beta: read(&lookup, "DEFAULT_BETA", d.aco.beta),
            evaporation: read(&lookup, "DEFAULT_EVAPORATION", d.aco.evaporation),
            iterations: read(&lookup, "DEFAULT_ITERATIONS", d.aco.iterations),
            ..d.aco
        };
        Self {
            aco,
            max_nodes: read(&lookup, "MAX_GRAPH_NODES", d.max_nodes),
            max_edges: read(&lookup, "MAX_GRAPH_EDGES", d.max_edges),
        }
    }

    pub fn with_aco(mut self, aco: AcoConfig) -> Self {
        self.aco = aco;
        self
    }

    pub fn with_max_nodes(mut self, n: usize) -> Self {
        self.max_nodes = n;
        self
    }

    pub fn with_max_edges(mut self, n: usize) -> Self {
        self.max_edges = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_nodes < 2 {
            return Err(format!("max_nodes must be at least 2, got {}", self.max_nodes));
        }
        self.aco.validate()
    }
}

fn read<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "ignoring unparsable setting");
            default
        }),
        None => default,
    }
}

/// Per-request ACO parameters. Unset fields fall back to
/// [`EngineConfig::aco`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AcoOverrides {
    pub num_ants: Option<usize>,
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub evaporation: Option<f64>,
    pub iterations: Option<usize>,
    pub seed: Option<u64>,
}

impl AcoOverrides {
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = Some(n);
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = Some(beta);
        self
    }

    pub fn with_evaporation(mut self, rate: f64) -> Self {
        self.evaporation = Some(rate);
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = Some(n);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fills every unset field from `base`.
    pub fn apply(&self, base: &AcoConfig) -> AcoConfig {
        AcoConfig {
            num_ants: self.num_ants.unwrap_or(base.num_ants),
            alpha: self.alpha.unwrap_or(base.alpha),
            beta: self.beta.unwrap_or(base.beta),
            evaporation: self.evaporation.unwrap_or(base.evaporation),
            iterations: self.iterations.unwrap_or(base.iterations),
            seed: self.seed.or(base.seed),
            ..base.clone()
        }
    }
}
