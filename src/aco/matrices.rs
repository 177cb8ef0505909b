//! Pheromone and heuristic matrices.

use crate::graph::AdjacencyMatrix;

/// Per-edge pheromone levels, stored row-major.
///
/// Every entry starts at [`INITIAL`](Self::INITIAL) and stays inside
/// `[MIN, MAX]` after each [`update`](Self::update).
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    pub const INITIAL: f64 = 1.0;
    pub const MIN: f64 = 0.1;
    pub const MAX: f64 = 10.0;

    pub fn new(size: usize) -> Self {
        Self {
            data: vec![Self::INITIAL; size * size],
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }

    /// All entries, row-major.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copies the matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.size.max(1)).map(<[f64]>::to_vec).collect()
    }

    /// Resets every entry to `INITIAL`.
    pub fn reset(&mut self) {
        self.data.fill(Self::INITIAL);
    }

    /// One iteration boundary: evaporate, deposit, clamp.
    ///
    /// Every entry is scaled by `1 - evaporation`. Each `(path, length)`
    /// tour then adds `q / length` to both orientations of every edge it
    /// traversed. Finally all entries are clamped into `[MIN, MAX]`.
    pub fn update<'p, I>(&mut self, evaporation: f64, q: f64, tours: I)
    where
        I: IntoIterator<Item = (&'p [usize], f64)>,
    {
        let keep = 1.0 - evaporation;
        for v in &mut self.data {
            *v *= keep;
        }

        for (path, length) in tours {
            if path.len() < 2 || !(length > 0.0) {
                continue;
            }
            let deposit = q / length;
            for step in path.windows(2) {
                let (a, b) = (step[0], step[1]);
                self.data[a * self.size + b] += deposit;
                self.data[b * self.size + a] += deposit;
            }
        }

        for v in &mut self.data {
            *v = v.clamp(Self::MIN, Self::MAX);
        }
    }
}

/// Static edge desirability: `1 / weight` for edges, `0` elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicMatrix {
    data: Vec<f64>,
    size: usize,
}

impl HeuristicMatrix {
    pub fn from_adjacency(matrix: &AdjacencyMatrix) -> Self {
        let size = matrix.size();
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for (j, w) in matrix.neighbors(i) {
                data[i * size + j] = 1.0 / w;
            }
        }
        Self { data, size }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }
}
