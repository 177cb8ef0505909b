//! Dense matrix representation consumed by the solvers.

use super::types::Graph;
use crate::error::ModelError;
use std::collections::HashMap;

/// Bidirectional mapping between node ids and matrix indices.
///
/// Indices follow the order nodes appear in the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexMaps {
    ids: Vec<String>,
    index: HashMap<String, usize>,
}

impl IndexMaps {
    /// Assigns indices `0..n` to `ids` in order.
    ///
    /// A repeated id keeps its first index.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(ids.len());
        for (i, id) in ids.iter().enumerate() {
            index.entry(id.clone()).or_insert(i);
        }
        Self { ids, index }
    }

    /// Matrix index of `id`, if it is a node.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Node id at matrix index `idx`.
    ///
    /// # Panics
    /// Panics if `idx` is out of range, which means the caller mixed up
    /// maps and matrices from different graphs.
    pub fn id_of(&self, idx: usize) -> &str {
        &self.ids[idx]
    }

    /// All ids in index order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Converts a path of indices into node ids.
    pub fn to_ids(&self, path: &[usize]) -> Vec<String> {
        path.iter().map(|&i| self.ids[i].clone()).collect()
    }
}

/// Square, symmetric matrix of edge weights stored row-major.
///
/// Absent edges hold [`AdjacencyMatrix::NO_EDGE`] (`+∞`), so they lose
/// every `<` comparison and poison any sum they take part in. The
/// diagonal is zero.
///
/// # Examples
///
/// ```
/// use pathweave::graph::AdjacencyMatrix;
///
/// let mut m = AdjacencyMatrix::new(3);
/// m.set_symmetric(0, 2, 7.5);
/// assert_eq!(m.weight(2, 0), Some(7.5));
/// assert_eq!(m.weight(0, 1), None);
/// assert_eq!(m.get(1, 1), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    data: Vec<f64>,
    size: usize,
}

impl AdjacencyMatrix {
    /// Sentinel for "no edge".
    pub const NO_EDGE: f64 = f64::INFINITY;

    /// Creates a `size × size` matrix with no edges.
    pub fn new(size: usize) -> Self {
        let mut data = vec![Self::NO_EDGE; size * size];
        for i in 0..size {
            data[i * size + i] = 0.0;
        }
        Self { data, size }
    }

    /// Builds a matrix from explicit rows.
    ///
    /// Returns `None` if the rows do not form a square matrix.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            data: rows.iter().flatten().copied().collect(),
            size,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw entry, `NO_EDGE` when `i` and `j` are not adjacent.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }

    /// Weight of the edge `i — j`, or `None` when there is none.
    ///
    /// The diagonal is never reported as an edge.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> Option<f64> {
        let w = self.get(i, j);
        (i != j && w.is_finite()).then_some(w)
    }

    /// Stores `w` at both `(i, j)` and `(j, i)`.
    #[inline]
    pub fn set_symmetric(&mut self, i: usize, j: usize, w: f64) {
        self.data[i * self.size + j] = w;
        self.data[j * self.size + i] = w;
    }

    /// Neighbors of `i` with their weights, in index order.
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..self.size).filter_map(move |j| self.weight(i, j).map(|w| (j, w)))
    }

    /// Returns `true` if `m[i][j] == m[j][i]` everywhere.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

/// Index maps plus adjacency matrix for one graph snapshot.
#[derive(Debug, Clone)]
pub struct GraphModel {
    pub maps: IndexMaps,
    pub matrix: AdjacencyMatrix,
}

impl GraphModel {
    /// Derives the matrix representation of `graph`.
    ///
    /// Each edge fills both orientations; a later edge between the same
    /// pair overwrites an earlier one. Self-loops are ignored so the
    /// diagonal stays zero.
    ///
    /// # Errors
    /// [`ModelError::UnknownNodeReference`] for a dangling endpoint and
    /// [`ModelError::NonPositiveWeight`] for a weight that is not a
    /// strictly positive finite number.
    pub fn build(graph: &Graph) -> Result<Self, ModelError> {
        let maps = IndexMaps::new(graph.nodes.iter().map(|n| n.id.as_str()));
        let mut matrix = AdjacencyMatrix::new(maps.len());

        for edge in &graph.edges {
            let i = maps
                .index_of(&edge.from)
                .ok_or_else(|| ModelError::UnknownNodeReference(edge.from.clone()))?;
            let j = maps
                .index_of(&edge.to)
                .ok_or_else(|| ModelError::UnknownNodeReference(edge.to.clone()))?;
            if !(edge.weight > 0.0 && edge.weight.is_finite()) {
                return Err(ModelError::NonPositiveWeight {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    weight: edge.weight,
                });
            }
            if i != j {
                matrix.set_symmetric(i, j, edge.weight);
            }
        }

        Ok(Self { maps, matrix })
    }

    /// Total weight along `path`, see [`path_distance`].
    pub fn path_distance<S: AsRef<str>>(&self, path: &[S]) -> Option<f64> {
        path_distance(path, &self.matrix, &self.maps)
    }
}

/// Sums edge weights along consecutive nodes of `path`.
///
/// Paths shorter than two nodes have length `0.0`. Returns `None` when a
/// consecutive pair is not adjacent or an id is unknown.
///
/// # Examples
///
/// ```
/// use pathweave::graph::{path_distance, AdjacencyMatrix, IndexMaps};
///
/// let inf = f64::INFINITY;
/// let m = AdjacencyMatrix::from_rows(&[
///     vec![0.0, 10.0, inf],
///     vec![10.0, 0.0, 20.0],
///     vec![inf, 20.0, 0.0],
/// ])
/// .unwrap();
/// let maps = IndexMaps::new(["A", "B", "C"]);
/// assert_eq!(path_distance(&["A", "B", "C"], &m, &maps), Some(30.0));
/// assert_eq!(path_distance(&["A", "C"], &m, &maps), None);
/// ```
pub fn path_distance<S: AsRef<str>>(
    path: &[S],
    matrix: &AdjacencyMatrix,
    maps: &IndexMaps,
) -> Option<f64> {
    if path.len() < 2 {
        return Some(0.0);
    }
    let mut total = 0.0;
    for pair in path.windows(2) {
        let i = maps.index_of(pair[0].as_ref())?;
        let j = maps.index_of(pair[1].as_ref())?;
        total += matrix.weight(i, j)?;
    }
    Some(total)
}
