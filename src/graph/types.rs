//! Graph snapshot records.

/// A labeled graph vertex.
///
/// `x` and `y` are layout coordinates carried for the caller's benefit;
/// no solver reads them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: String,
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub x: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub y: f64,
}

impl Node {
    /// Creates a node at the origin.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x: 0.0,
            y: 0.0,
        }
    }

    /// Sets the layout position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

/// An undirected weighted edge between two node ids.
///
/// The endpoint order carries no meaning: `a — b` and `b — a` describe
/// the same edge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Returns `true` if `id` is one of the endpoints.
    pub fn touches(&self, id: &str) -> bool {
        self.from == id || self.to == id
    }
}

/// A fully materialized graph snapshot.
///
/// # Examples
///
/// ```
/// use pathweave::graph::{Edge, Graph, Node};
///
/// let graph = Graph::new("pair")
///     .with_node(Node::new("A", "A"))
///     .with_node(Node::new("B", "B"))
///     .with_edge(Edge::new("A", "B", 4.0));
/// assert_eq!(graph.nodes.len(), 2);
/// assert!(graph.contains_node("B"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    pub name: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Returns `true` if a node with this id exists.
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Removes every edge between `a` and `b`, in either orientation.
    pub fn remove_edge(&mut self, a: &str, b: &str) {
        self.edges
            .retain(|e| !((e.from == a && e.to == b) || (e.from == b && e.to == a)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let g = Graph::new("g")
            .with_node(Node::new("A", "Alpha").at(1.0, 2.0))
            .with_node(Node::new("B", "Beta"))
            .with_edge(Edge::new("A", "B", 3.0));

        assert_eq!(g.name, "g");
        assert_eq!(g.nodes[0].x, 1.0);
        assert_eq!(g.nodes[0].y, 2.0);
        assert!(g.edges[0].touches("A"));
        assert!(!g.edges[0].touches("C"));
    }

    #[test]
    fn test_remove_edge_either_orientation() {
        let mut g = Graph::new("g")
            .with_edge(Edge::new("A", "B", 1.0))
            .with_edge(Edge::new("B", "A", 2.0))
            .with_edge(Edge::new("B", "C", 3.0));

        g.remove_edge("A", "B");
        assert_eq!(g.edges.len(), 1);
        assert_eq!(g.edges[0].to, "C");
    }
}
