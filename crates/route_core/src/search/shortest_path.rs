use crate::{constants::Weight, graph::NodeIndex};

/// Result of a search: the node sequence from source to target (inclusive)
/// and the summed weight of its edges. Produced fresh per query.
#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath {
    pub nodes: Vec<NodeIndex>,
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeIndex>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }
}
