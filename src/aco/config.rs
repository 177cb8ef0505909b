//! ACO configuration.

/// Configuration for the [`AntColony`](super::AntColony) solver.
///
/// # Defaults
///
/// ```
/// use pathweave::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.num_ants, 50);
/// assert_eq!(config.iterations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use pathweave::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(20)
///     .with_alpha(1.0)
///     .with_beta(3.0)
///     .with_evaporation(0.3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Ants released per iteration.
    pub num_ants: usize,

    /// Exponent on pheromone in the transition weight.
    ///
    /// Higher values make ants follow reinforced edges more closely.
    pub alpha: f64,

    /// Exponent on the inverse-weight heuristic in the transition weight.
    ///
    /// Higher values make ants greedier for short edges.
    pub beta: f64,

    /// Fraction of pheromone removed from every edge each iteration, in [0, 1].
    pub evaporation: f64,

    /// Number of iterations to run.
    pub iterations: usize,

    /// Deposit constant: a successful ant adds `q / length` to each edge
    /// it used.
    pub q: f64,

    /// Build each iteration's ants on the rayon pool.
    ///
    /// Only takes effect with the `parallel` feature. Results for a
    /// given seed are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 50,
            alpha: 1.0,
            beta: 5.0,
            evaporation: 0.5,
            iterations: 100,
            q: 100.0,
            parallel: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation(mut self, rate: f64) -> Self {
        self.evaporation = rate;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_ants == 0 {
            return Err("num_ants must be at least 1".into());
        }
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        if !(self.alpha >= 0.0 && self.alpha.is_finite()) {
            return Err(format!("alpha must be non-negative, got {}", self.alpha));
        }
        if !(self.beta >= 0.0 && self.beta.is_finite()) {
            return Err(format!("beta must be non-negative, got {}", self.beta));
        }
        if !(0.0..=1.0).contains(&self.evaporation) {
            return Err(format!(
                "evaporation must be in [0, 1], got {}",
                self.evaporation
            ));
        }
        if !(self.q > 0.0 && self.q.is_finite()) {
            return Err(format!("q must be positive, got {}", self.q));
        }
        Ok(())
    }
}
