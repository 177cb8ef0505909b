//! Graph well-formedness checks.

use super::types::Graph;
use crate::error::ValidationError;
use std::collections::{HashMap, HashSet};

/// Checks that `graph` is usable by the solvers.
///
/// Checks run in this order and the first failure is returned:
///
/// 1. at least two nodes
/// 2. unique node ids
/// 3. every edge endpoint names a node
/// 4. every weight is a positive finite number
/// 5. every node is reachable from the first one
///
/// The graph is only read, so calling this again on the same input
/// gives the same answer.
///
/// # Examples
///
/// ```
/// use pathweave::graph::{validate, Edge, Graph, Node};
/// use pathweave::error::ValidationError;
///
/// let g = Graph::new("g")
///     .with_node(Node::new("A", "A"))
///     .with_node(Node::new("B", "B"))
///     .with_edge(Edge::new("A", "B", -5.0));
/// assert!(matches!(validate(&g), Err(ValidationError::NonPositiveWeight { .. })));
/// ```
pub fn validate(graph: &Graph) -> Result<(), ValidationError> {
    if graph.nodes.len() < 2 {
        return Err(ValidationError::TooFewNodes {
            found: graph.nodes.len(),
        });
    }

    let mut ids = HashSet::with_capacity(graph.nodes.len());
    for node in &graph.nodes {
        if !ids.insert(node.id.as_str()) {
            return Err(ValidationError::DuplicateNodeId {
                id: node.id.clone(),
            });
        }
    }

    for edge in &graph.edges {
        for end in [&edge.from, &edge.to] {
            if !ids.contains(end.as_str()) {
                return Err(ValidationError::DanglingEdge { id: end.clone() });
            }
        }
    }

    if let Some(edge) = graph
        .edges
        .iter()
        .find(|e| !(e.weight > 0.0 && e.weight.is_finite()))
    {
        return Err(ValidationError::NonPositiveWeight {
            from: edge.from.clone(),
            to: edge.to.clone(),
            weight: edge.weight,
        });
    }

    let reached = reachable_count(graph);
    if reached != graph.nodes.len() {
        return Err(ValidationError::Disconnected {
            reached,
            total: graph.nodes.len(),
        });
    }

    Ok(())
}

/// Number of nodes reachable from the first node, by iterative DFS.
fn reachable_count(graph: &Graph) -> usize {
    let Some(first) = graph.nodes.first() else {
        return 0;
    };

    let mut adjacency: HashMap<&str, Vec<&str>> = graph
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), Vec::new()))
        .collect();
    for edge in &graph.edges {
        if let Some(list) = adjacency.get_mut(edge.from.as_str()) {
            list.push(edge.to.as_str());
        }
        if let Some(list) = adjacency.get_mut(edge.to.as_str()) {
            list.push(edge.from.as_str());
        }
    }

    let mut visited = HashSet::new();
    let mut stack = vec![first.id.as_str()];
    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        if let Some(next) = adjacency.get(current) {
            stack.extend(next.iter().filter(|n| !visited.contains(*n)));
        }
    }
    visited.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Node};

    fn nodes(ids: &[&str]) -> Graph {
        ids.iter()
            .fold(Graph::new("t"), |g, id| g.with_node(Node::new(*id, *id)))
    }

    #[test]
    fn test_valid_pair() {
        let g = nodes(&["A", "B"]).with_edge(Edge::new("A", "B", 10.0));
        assert_eq!(validate(&g), Ok(()));
    }

    #[test]
    fn test_too_few_nodes() {
        let g = nodes(&["A"]);
        assert_eq!(validate(&g), Err(ValidationError::TooFewNodes { found: 1 }));
        assert!(validate(&Graph::new("empty")).is_err());
    }

    #[test]
    fn test_duplicate_id() {
        let g = nodes(&["A", "B", "A"]).with_edge(Edge::new("A", "B", 1.0));
        assert_eq!(
            validate(&g),
            Err(ValidationError::DuplicateNodeId { id: "A".into() })
        );
    }

    #[test]
    fn test_dangling_edge() {
        let g = nodes(&["A", "B"])
            .with_edge(Edge::new("A", "B", 1.0))
            .with_edge(Edge::new("B", "Z", 1.0));
        assert_eq!(
            validate(&g),
            Err(ValidationError::DanglingEdge { id: "Z".into() })
        );
    }

    #[test]
    fn test_dangling_edge_reported_before_bad_weight() {
        let g = nodes(&["A", "B"])
            .with_edge(Edge::new("A", "B", -1.0))
            .with_edge(Edge::new("Z", "B", 1.0));
        assert!(matches!(
            validate(&g),
            Err(ValidationError::DanglingEdge { .. })
        ));
    }

    #[test]
    fn test_non_positive_weights() {
        for w in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let g = nodes(&["A", "B"]).with_edge(Edge::new("A", "B", w));
            assert!(
                matches!(validate(&g), Err(ValidationError::NonPositiveWeight { .. })),
                "weight {w} should be rejected"
            );
        }
    }

    #[test]
    fn test_disconnected() {
        let g = nodes(&["A", "B", "C"]).with_edge(Edge::new("A", "B", 10.0));
        assert_eq!(
            validate(&g),
            Err(ValidationError::Disconnected {
                reached: 2,
                total: 3
            })
        );
    }

    #[test]
    fn test_connectivity_ignores_edge_orientation() {
        let g = nodes(&["A", "B", "C"])
            .with_edge(Edge::new("B", "A", 1.0))
            .with_edge(Edge::new("C", "B", 1.0));
        assert_eq!(validate(&g), Ok(()));
    }

    #[test]
    fn test_validate_is_repeatable() {
        let g = nodes(&["A", "B", "C"])
            .with_edge(Edge::new("A", "B", 1.0))
            .with_edge(Edge::new("B", "C", 2.0));
        let before = g.clone();
        assert_eq!(validate(&g), Ok(()));
        assert_eq!(validate(&g), Ok(()));
        assert_eq!(g, before);
    }
}
