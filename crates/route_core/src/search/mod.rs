use rustc_hash::FxHashMap;

use crate::error::SearchError;
use crate::graph::NodeIndex;

use self::dijkstra::PathLabel;
use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod shortest_path;

/// Walks the predecessor links backwards from `target` to `source` and
/// returns the reversed walk. A missing label along the walk means the
/// target was never reached from the source.
pub(crate) fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    labels: &FxHashMap<NodeIndex, PathLabel>,
) -> Result<ShortestPath, SearchError> {
    let no_route = || SearchError::NoRoute {
        source: source.index(),
        target: target.index(),
    };

    let weight = labels.get(&target).ok_or_else(no_route)?.distance;

    let mut path = vec![target];
    let mut current = target;
    while current != source {
        current = labels.get(&current).ok_or_else(no_route)?.predecessor;
        path.push(current);
    }
    path.reverse();

    Ok(ShortestPath::new(path, weight))
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<usize>,
    expected_weight: crate::constants::Weight,
    result: Result<ShortestPath, SearchError>,
) {
    let expected = ShortestPath::new(
        expected_path.into_iter().map(NodeIndex::new).collect(),
        expected_weight,
    );
    assert_eq!(Ok(expected), result);
}
