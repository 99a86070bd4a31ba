use thiserror::Error;

use crate::constants::Weight;

/// Errors raised while building or querying a [`Graph`](crate::graph::Graph).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("node index {index} is out of range for a graph with {num_nodes} nodes")]
    NodeOutOfRange { index: usize, num_nodes: usize },
    #[error("negative weights are not allowed: {0}")]
    NegativeWeight(Weight),
}

/// Errors raised by a shortest path search.
// Implemented by hand instead of via `#[derive(Error)]` because thiserror
// unconditionally treats a field named `source` as the error's cause, and the
// `NoRoute` field is a node index, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The target never received a label: no path connects it to the source.
    NoRoute { source: usize, target: usize },
    /// Unvisited nodes remain but none of them carries a label. Part of the
    /// network is cut off from the source, which a real flight network never
    /// is. Kept distinct from [`SearchError::NoRoute`] for diagnostics.
    NoClosestNode { unvisited: usize },
    Graph(GraphError),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::NoRoute { source, target } => {
                write!(f, "no route from node {source} to node {target}")
            }
            SearchError::NoClosestNode { unvisited } => write!(
                f,
                "closest-node selection failed: {unvisited} unvisited nodes, none labelled"
            ),
            SearchError::Graph(err) => std::fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Graph(err) => err.source(),
            _ => None,
        }
    }
}

impl From<GraphError> for SearchError {
    fn from(err: GraphError) -> Self {
        SearchError::Graph(err)
    }
}
