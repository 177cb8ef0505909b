//! Dijkstra search over a dense adjacency matrix.

use crate::error::SearchError;
use crate::graph::{AdjacencyMatrix, GraphModel, IndexMaps};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};
use std::time::{Duration, Instant};

/// Result of a single-pair search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Node ids from start to end, empty when no path exists.
    pub path: Vec<String>,

    /// Total path weight, `None` when no path exists.
    pub distance: Option<f64>,

    /// Wall-clock time spent in the solver.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "duration_seconds", with = "crate::duration::seconds")
    )]
    pub elapsed: Duration,
}

impl PathResult {
    /// Returns `true` if a path was found.
    pub fn is_found(&self) -> bool {
        self.distance.is_some()
    }

    pub fn duration_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// One destination in a single-source result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathEntry {
    pub path: Vec<String>,
    pub distance: Option<f64>,
}

/// Exact shortest paths on a [`GraphModel`].
///
/// Neighbor scans walk a full matrix row, so a search costs O(V²)
/// regardless of edge count.
///
/// # Tie-breaking
///
/// The queue pops the lowest tentative distance first and, among equal
/// distances, the lowest matrix index. A predecessor is only replaced on
/// strict improvement. Among equal-length paths the one reaching the
/// target through the earliest finalized vertex wins.
///
/// # Examples
///
/// ```
/// use pathweave::dijkstra::DijkstraSolver;
/// use pathweave::graph::{Edge, Graph, GraphModel, Node};
///
/// let graph = Graph::new("g")
///     .with_node(Node::new("A", "A"))
///     .with_node(Node::new("B", "B"))
///     .with_node(Node::new("C", "C"))
///     .with_edge(Edge::new("A", "B", 1.0))
///     .with_edge(Edge::new("B", "C", 2.0))
///     .with_edge(Edge::new("A", "C", 5.0));
/// let model = GraphModel::build(&graph).unwrap();
///
/// let result = DijkstraSolver::new(&model).find_shortest_path("A", "C").unwrap();
/// assert_eq!(result.path, ["A", "B", "C"]);
/// assert_eq!(result.distance, Some(3.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DijkstraSolver<'a> {
    matrix: &'a AdjacencyMatrix,
    maps: &'a IndexMaps,
}

impl<'a> DijkstraSolver<'a> {
    pub fn new(model: &'a GraphModel) -> Self {
        Self::from_parts(&model.matrix, &model.maps)
    }

    /// Creates a solver from a matrix and the maps that index it.
    pub fn from_parts(matrix: &'a AdjacencyMatrix, maps: &'a IndexMaps) -> Self {
        debug_assert_eq!(matrix.size(), maps.len());
        Self { matrix, maps }
    }

    /// Shortest path from `start` to `end`.
    ///
    /// An unreachable `end` is reported as an empty path with no
    /// distance, not as an error.
    ///
    /// # Errors
    /// [`SearchError::UnknownIdentifier`] if either id is not a node.
    pub fn find_shortest_path(&self, start: &str, end: &str) -> Result<PathResult, SearchError> {
        let started = Instant::now();
        let source = self.resolve(start)?;
        let target = self.resolve(end)?;

        let (path, distance) = self.shortest_path_indices(source, target);
        let elapsed = started.elapsed();

        tracing::debug!(
            start,
            end,
            distance = ?distance,
            hops = path.len().saturating_sub(1),
            "dijkstra search finished"
        );

        Ok(PathResult {
            path: self.maps.to_ids(&path),
            distance,
            elapsed,
        })
    }

    /// Shortest paths from `start` to every other node.
    ///
    /// Unreachable nodes are included with an empty path and no distance.
    /// The start node itself is not part of the map.
    ///
    /// # Errors
    /// [`SearchError::UnknownIdentifier`] if `start` is not a node.
    pub fn find_all_shortest_paths(
        &self,
        start: &str,
    ) -> Result<BTreeMap<String, PathEntry>, SearchError> {
        let source = self.resolve(start)?;
        let search = self.search(source, None);

        let results: BTreeMap<String, PathEntry> = (0..self.matrix.size())
            .filter(|&idx| idx != source)
            .map(|idx| {
                let path = search.path_to(source, idx);
                let entry = PathEntry {
                    path: self.maps.to_ids(&path),
                    distance: (!path.is_empty()).then_some(search.distance[idx]),
                };
                (self.maps.id_of(idx).to_string(), entry)
            })
            .collect();

        tracing::debug!(
            start,
            reachable = results.values().filter(|e| e.distance.is_some()).count(),
            "dijkstra single-source search finished"
        );
        Ok(results)
    }

    /// Index-level single-pair search: `(path, distance)`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn shortest_path_indices(&self, source: usize, target: usize) -> (Vec<usize>, Option<f64>) {
        let search = self.search(source, Some(target));
        let path = search.path_to(source, target);
        let distance = (!path.is_empty()).then_some(search.distance[target]);
        (path, distance)
    }

    fn resolve(&self, id: &str) -> Result<usize, SearchError> {
        self.maps
            .index_of(id)
            .ok_or_else(|| SearchError::UnknownIdentifier(id.to_string()))
    }

    /// Runs the relaxation loop, stopping early once `target` is final.
    fn search(&self, source: usize, target: Option<usize>) -> Search {
        let n = self.matrix.size();
        let mut distance = vec![f64::INFINITY; n];
        let mut predecessor = vec![None; n];
        let mut visited = vec![false; n];
        let mut heap = BinaryHeap::new();

        distance[source] = 0.0;
        heap.push(State {
            cost: 0.0,
            node: source,
        });

        while let Some(State { cost, node }) = heap.pop() {
            if visited[node] {
                continue;
            }
            visited[node] = true;

            if Some(node) == target {
                break;
            }

            for (neighbor, weight) in self.matrix.neighbors(node) {
                if visited[neighbor] {
                    continue;
                }
                let candidate = cost + weight;
                if candidate < distance[neighbor] {
                    distance[neighbor] = candidate;
                    predecessor[neighbor] = Some(node);
                    heap.push(State {
                        cost: candidate,
                        node: neighbor,
                    });
                }
            }
        }

        Search {
            distance,
            predecessor,
        }
    }
}

struct Search {
    distance: Vec<f64>,
    predecessor: Vec<Option<usize>>,
}

impl Search {
    /// Walks predecessors back from `target`; empty when unreachable.
    fn path_to(&self, source: usize, target: usize) -> Vec<usize> {
        if self.predecessor[target].is_none() && target != source {
            return Vec::new();
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessor[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}

/// Heap entry, ordered so that `BinaryHeap` pops the smallest cost and
/// then the smallest node index.
#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    cost: f64,
    node: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{generate_fixed_example, Edge, Graph, Node};

    /// A --10-- B, A --5-- C, B --15-- D, C --20-- D
    fn diamond() -> Graph {
        Graph::new("diamond")
            .with_node(Node::new("A", "A"))
            .with_node(Node::new("B", "B"))
            .with_node(Node::new("C", "C"))
            .with_node(Node::new("D", "D"))
            .with_edge(Edge::new("A", "B", 10.0))
            .with_edge(Edge::new("A", "C", 5.0))
            .with_edge(Edge::new("B", "D", 15.0))
            .with_edge(Edge::new("C", "D", 20.0))
    }

    #[test]
    fn test_direct_edge() {
        let model = GraphModel::build(&diamond()).unwrap();
        let r = DijkstraSolver::new(&model).find_shortest_path("A", "B").unwrap();
        assert_eq!(r.path, ["A", "B"]);
        assert_eq!(r.distance, Some(10.0));
        assert!(r.is_found());
    }

    #[test]
    fn test_equal_length_tie_is_deterministic() {
        let model = GraphModel::build(&diamond()).unwrap();
        let solver = DijkstraSolver::new(&model);
        let r = solver.find_shortest_path("A", "D").unwrap();
        assert_eq!(r.distance, Some(25.0));
        assert_eq!(r.path, ["A", "C", "D"]);

        for _ in 0..5 {
            assert_eq!(solver.find_shortest_path("A", "D").unwrap().path, r.path);
        }
    }

    #[test]
    fn test_same_start_and_end() {
        let model = GraphModel::build(&diamond()).unwrap();
        let r = DijkstraSolver::new(&model).find_shortest_path("A", "A").unwrap();
        assert_eq!(r.path, ["A"]);
        assert_eq!(r.distance, Some(0.0));
    }

    #[test]
    fn test_unreachable_target() {
        let mut g = diamond();
        g.remove_edge("B", "D");
        g.remove_edge("C", "D");
        let model = GraphModel::build(&g).unwrap();
        let r = DijkstraSolver::new(&model).find_shortest_path("A", "D").unwrap();
        assert!(r.path.is_empty());
        assert_eq!(r.distance, None);
        assert!(!r.is_found());
    }

    #[test]
    fn test_unknown_identifier() {
        let model = GraphModel::build(&diamond()).unwrap();
        let solver = DijkstraSolver::new(&model);
        assert_eq!(
            solver.find_shortest_path("A", "Z").unwrap_err(),
            SearchError::UnknownIdentifier("Z".into())
        );
        assert!(solver.find_all_shortest_paths("Q").is_err());
    }

    #[test]
    fn test_longer_detour_beats_heavy_edge() {
        let g = Graph::new("detour")
            .with_node(Node::new("s", "s"))
            .with_node(Node::new("a", "a"))
            .with_node(Node::new("b", "b"))
            .with_node(Node::new("t", "t"))
            .with_edge(Edge::new("s", "t", 100.0))
            .with_edge(Edge::new("s", "a", 1.0))
            .with_edge(Edge::new("a", "b", 1.0))
            .with_edge(Edge::new("b", "t", 1.0));
        let model = GraphModel::build(&g).unwrap();
        let r = DijkstraSolver::new(&model).find_shortest_path("s", "t").unwrap();
        assert_eq!(r.path, ["s", "a", "b", "t"]);
        assert_eq!(r.distance, Some(3.0));
    }

    #[test]
    fn test_all_shortest_paths() {
        let model = GraphModel::build(&diamond()).unwrap();
        let all = DijkstraSolver::new(&model)
            .find_all_shortest_paths("A")
            .unwrap();

        assert_eq!(all.len(), 3);
        assert!(!all.contains_key("A"));
        assert_eq!(all["B"].distance, Some(10.0));
        assert_eq!(all["C"].distance, Some(5.0));
        assert_eq!(all["D"].distance, Some(25.0));
        assert_eq!(all["C"].path, ["A", "C"]);
    }

    #[test]
    fn test_all_shortest_paths_reports_unreachable() {
        let g = diamond().with_node(Node::new("E", "E"));
        let model = GraphModel::build(&g).unwrap();
        let all = DijkstraSolver::new(&model)
            .find_all_shortest_paths("A")
            .unwrap();
        assert_eq!(all["E"].distance, None);
        assert!(all["E"].path.is_empty());
    }

    #[test]
    fn test_fixed_example_routes() {
        let model = GraphModel::build(&generate_fixed_example()).unwrap();
        let solver = DijkstraSolver::new(&model);

        // rivne -> zhytomyr -> vinnytsia beats kyiv detours
        let r = solver.find_shortest_path("rivne", "vinnytsia").unwrap();
        assert_eq!(r.path, ["rivne", "zhytomyr", "vinnytsia"]);
        assert_eq!(r.distance, Some(310.0));

        let r = solver.find_shortest_path("lviv", "kharkiv").unwrap();
        assert_eq!(r.path, ["lviv", "rivne", "kyiv", "kharkiv"]);
        assert_eq!(r.distance, Some(1000.0));
    }

    #[test]
    fn test_state_ordering_pops_smallest_then_lowest_index() {
        let mut heap = BinaryHeap::new();
        heap.push(State { cost: 5.0, node: 3 });
        heap.push(State { cost: 2.0, node: 4 });
        heap.push(State { cost: 2.0, node: 1 });
        assert_eq!(heap.pop().unwrap().node, 1);
        assert_eq!(heap.pop().unwrap().node, 4);
        assert_eq!(heap.pop().unwrap().node, 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialized_shape() {
        let g = diamond().with_node(Node::new("E", "E"));
        let model = GraphModel::build(&g).unwrap();
        let solver = DijkstraSolver::new(&model);

        let found = serde_json::to_value(solver.find_shortest_path("A", "D").unwrap()).unwrap();
        assert_eq!(found["distance"], 25.0);
        assert!(found["duration_seconds"].is_f64());
        assert!(found.get("elapsed").is_none());

        let missing = serde_json::to_value(solver.find_shortest_path("A", "E").unwrap()).unwrap();
        assert!(missing["distance"].is_null());
        assert_eq!(missing["path"], serde_json::json!([]));
        assert!(missing["duration_seconds"].as_f64().unwrap() >= 0.0);
    }
}
