use serde::{Deserialize, Serialize};

use crate::constants::Weight;
use crate::error::GraphError;

/// Node identifier. Dense index into the weight matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeIndex {
    fn from(ix: u32) -> Self {
        NodeIndex(ix)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Undirected weighted graph over a fixed set of nodes.
///
/// Backed by a dense N×N matrix where `None` marks an absent edge.
/// [`Graph::add_edge`] writes both `(u,v)` and `(v,u)`, so the matrix is
/// symmetric at all times and never represents a one-directional edge.
/// Weights must be non-negative, which is what makes Dijkstra's algorithm
/// applicable downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    matrix: Vec<Option<Weight>>,
    num_nodes: usize,
}

impl Graph {
    /// Creates a graph with `num_nodes` nodes and no edges. Zero nodes is
    /// a legal, empty graph.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            matrix: vec![None; num_nodes * num_nodes],
            num_nodes,
        }
    }

    /// Bulk constructor: `num_nodes` nodes and one undirected edge per
    /// `(u, v, weight)` triple.
    pub fn from_edges<I>(num_nodes: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (NodeIndex, NodeIndex, Weight)>,
    {
        let mut g = Graph::new(num_nodes);
        for (u, v, weight) in edges {
            g.add_edge(u, v, weight)?;
        }
        Ok(g)
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Returns an iterator over all nodes of the graph
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.num_nodes).map(NodeIndex::new)
    }

    /// Records an undirected edge between `u` and `v`, overwriting any
    /// previously stored weight for the pair. The graph is left unchanged
    /// when an error is returned.
    pub fn add_edge(
        &mut self,
        u: NodeIndex,
        v: NodeIndex,
        weight: Weight,
    ) -> Result<(), GraphError> {
        self.check_bounds(u)?;
        self.check_bounds(v)?;
        if weight < 0.0 {
            return Err(GraphError::NegativeWeight(weight));
        }

        self.matrix[u.index() * self.num_nodes + v.index()] = Some(weight);
        self.matrix[v.index() * self.num_nodes + u.index()] = Some(weight);

        Ok(())
    }

    /// Returns the neighbors of `v` in ascending node id order.
    pub fn neighbors(&self, v: NodeIndex) -> Result<Vec<NodeIndex>, GraphError> {
        self.check_bounds(v)?;

        let row = &self.matrix[v.index() * self.num_nodes..(v.index() + 1) * self.num_nodes];
        Ok(row
            .iter()
            .enumerate()
            .filter(|(_, weight)| weight.is_some())
            .map(|(u, _)| NodeIndex::new(u))
            .collect())
    }

    /// Returns the weight of the edge between `u` and `v`, or `None` if the
    /// nodes are not directly connected.
    pub fn edge_weight(&self, u: NodeIndex, v: NodeIndex) -> Option<Weight> {
        if u.index() >= self.num_nodes || v.index() >= self.num_nodes {
            return None;
        }
        self.matrix[u.index() * self.num_nodes + v.index()]
    }

    pub(crate) fn check_bounds(&self, v: NodeIndex) -> Result<(), GraphError> {
        if v.index() >= self.num_nodes {
            return Err(GraphError::NodeOutOfRange {
                index: v.index(),
                num_nodes: self.num_nodes,
            });
        }
        Ok(())
    }
}
