//! Synthetic graph generators.

use super::types::{Edge, Graph, Node};
use crate::random::rng_from;
use rand::Rng;
use std::f64::consts::PI;

const LAYOUT_CENTER: (f64, f64) = (400.0, 300.0);
const LAYOUT_RADIUS: f64 = 200.0;

/// Parameters for [`generate_random`].
///
/// # Examples
///
/// ```
/// use pathweave::graph::RandomGraphConfig;
///
/// let config = RandomGraphConfig::default()
///     .with_node_count(20)
///     .with_connectivity(0.4)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// let graph = config.generate();
/// assert_eq!(graph.nodes.len(), 20);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomGraphConfig {
    /// Number of nodes to place.
    pub node_count: usize,

    /// Probability in [0, 1] that any given pair of nodes is joined.
    pub connectivity: f64,

    /// Lower bound of the uniform weight distribution.
    pub min_weight: f64,

    /// Upper bound of the uniform weight distribution.
    pub max_weight: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            node_count: 10,
            connectivity: 0.3,
            min_weight: 1.0,
            max_weight: 100.0,
            seed: None,
        }
    }
}

impl RandomGraphConfig {
    pub fn with_node_count(mut self, n: usize) -> Self {
        self.node_count = n;
        self
    }

    pub fn with_connectivity(mut self, p: f64) -> Self {
        self.connectivity = p;
        self
    }

    pub fn with_weight_range(mut self, min: f64, max: f64) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.node_count < 2 {
            return Err(format!(
                "node_count must be at least 2, got {}",
                self.node_count
            ));
        }
        if !(0.0..=1.0).contains(&self.connectivity) {
            return Err(format!(
                "connectivity must be in [0, 1], got {}",
                self.connectivity
            ));
        }
        if !(self.min_weight > 0.0 && self.min_weight.is_finite()) {
            return Err(format!(
                "min_weight must be positive, got {}",
                self.min_weight
            ));
        }
        if !(self.max_weight >= self.min_weight && self.max_weight.is_finite()) {
            return Err(format!(
                "max_weight must be finite and >= min_weight, got {}",
                self.max_weight
            ));
        }
        Ok(())
    }

    /// Generates a graph with an RNG built from `seed`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`validate`](Self::validate)
    /// first to get a descriptive error).
    pub fn generate(&self) -> Graph {
        self.validate().expect("invalid RandomGraphConfig");
        let mut rng = rng_from(self.seed);
        generate_random(self, &mut rng)
    }
}

/// Generates a random Erdős–Rényi style graph.
///
/// Nodes `node_0 .. node_{n-1}` are spread evenly on a circle. Each
/// unordered pair is joined with probability `connectivity`, weight drawn
/// uniformly from `[min_weight, max_weight]` and rounded to two decimals.
///
/// When fewer than `n - 1` edges came out, every node `i < n - 1` that has
/// no edge at all is chained to `i + 1`. That repair does not guarantee
/// connectivity; validate the result before searching it.
///
/// `config.seed` is ignored; randomness comes from `rng`.
pub fn generate_random<R: Rng>(config: &RandomGraphConfig, rng: &mut R) -> Graph {
    let n = config.node_count;
    let mut graph = Graph::new(format!("Random Graph ({n} nodes)"));

    for i in 0..n {
        let angle = 2.0 * PI * i as f64 / n as f64;
        graph.nodes.push(
            Node::new(node_id(i), format!("V{i}")).at(
                LAYOUT_CENTER.0 + LAYOUT_RADIUS * angle.cos(),
                LAYOUT_CENTER.1 + LAYOUT_RADIUS * angle.sin(),
            ),
        );
    }

    for i in 0..n {
        for j in (i + 1)..n {
            if rng.random::<f64>() < config.connectivity {
                let w = sample_weight(config, rng);
                graph.edges.push(Edge::new(node_id(i), node_id(j), w));
            }
        }
    }

    if graph.edges.len() + 1 < n {
        let mut added = 0usize;
        for i in 0..n - 1 {
            let id = node_id(i);
            if !graph.edges.iter().any(|e| e.touches(&id)) {
                let w = sample_weight(config, rng);
                graph.edges.push(Edge::new(id, node_id(i + 1), w));
                added += 1;
            }
        }
        tracing::warn!(
            nodes = n,
            added,
            "sparse random graph, chained isolated nodes to their successor"
        );
    }

    graph
}

/// A small fixed road network between eight Ukrainian cities.
///
/// Weights are approximate road distances in kilometres.
pub fn generate_fixed_example() -> Graph {
    let cities = [
        ("kyiv", "Kyiv", 500.0, 200.0),
        ("lviv", "Lviv", 100.0, 250.0),
        ("odesa", "Odesa", 400.0, 500.0),
        ("kharkiv", "Kharkiv", 700.0, 200.0),
        ("dnipro", "Dnipro", 650.0, 350.0),
        ("rivne", "Rivne", 250.0, 150.0),
        ("zhytomyr", "Zhytomyr", 350.0, 150.0),
        ("vinnytsia", "Vinnytsia", 350.0, 300.0),
    ];
    let roads = [
        ("kyiv", "lviv", 540.0),
        ("kyiv", "odesa", 475.0),
        ("kyiv", "kharkiv", 480.0),
        ("kyiv", "dnipro", 480.0),
        ("kyiv", "rivne", 310.0),
        ("kyiv", "zhytomyr", 140.0),
        ("kyiv", "vinnytsia", 270.0),
        ("lviv", "rivne", 210.0),
        ("lviv", "vinnytsia", 380.0),
        ("odesa", "vinnytsia", 340.0),
        ("kharkiv", "dnipro", 220.0),
        ("rivne", "zhytomyr", 180.0),
        ("zhytomyr", "vinnytsia", 130.0),
    ];

    let mut graph = Graph::new("Cities of Ukraine");
    graph.nodes = cities
        .iter()
        .map(|&(id, label, x, y)| Node::new(id, label).at(x, y))
        .collect();
    graph.edges = roads
        .iter()
        .map(|&(a, b, w)| Edge::new(a, b, w))
        .collect();
    graph
}

fn node_id(i: usize) -> String {
    format!("node_{i}")
}

fn sample_weight<R: Rng>(config: &RandomGraphConfig, rng: &mut R) -> f64 {
    let w = rng.random_range(config.min_weight..=config.max_weight);
    ((w * 100.0).round() / 100.0).max(config.min_weight)
}
