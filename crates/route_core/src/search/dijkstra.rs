use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::constants::Weight;
use crate::error::SearchError;
use crate::graph::{Graph, NodeIndex};
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;

/// Best known distance from the start node, and the node preceding this one
/// on that path. Working state for a single search run; the start node is
/// its own predecessor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathLabel {
    pub distance: Weight,
    pub predecessor: NodeIndex,
}

impl PathLabel {
    fn new(distance: Weight, predecessor: NodeIndex) -> Self {
        Self {
            distance,
            predecessor,
        }
    }
}

pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Computes the minimum-weight path from `source` to `target`.
    ///
    /// Label-correcting Dijkstra over the full node set: every iteration
    /// settles the labelled unvisited node closest to the start and relaxes
    /// its unvisited neighbors. Once settled, a node's distance is final.
    /// An equal candidate distance never replaces an existing label, so the
    /// first discovered predecessor wins on ties.
    ///
    /// The label table and unvisited set live only for this call, which
    /// keeps concurrent searches over a shared read-only graph safe.
    pub fn search(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Result<ShortestPath, SearchError> {
        self.stats.init();

        self.g.check_bounds(source)?;
        self.g.check_bounds(target)?;

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Ok(ShortestPath::new(vec![source], 0.0));
        }

        let mut labels: FxHashMap<NodeIndex, PathLabel> = FxHashMap::default();
        let mut unvisited: FxHashSet<NodeIndex> = self.g.nodes().collect();

        labels.insert(source, PathLabel::new(0.0, source));

        while !unvisited.is_empty() {
            let current = match closest_unvisited(&unvisited, &labels) {
                Some(node) => node,
                None => {
                    self.stats.finish();
                    // Nothing labelled is left to settle, so part of the
                    // network is unreachable from the source. If the target
                    // has a label the inconsistency lies elsewhere in the
                    // network; report it as such instead of "no route".
                    return Err(if labels.contains_key(&target) {
                        SearchError::NoClosestNode {
                            unvisited: unvisited.len(),
                        }
                    } else {
                        SearchError::NoRoute {
                            source: source.index(),
                            target: target.index(),
                        }
                    });
                }
            };
            unvisited.remove(&current);
            self.stats.nodes_settled += 1;

            let current_distance = labels[&current].distance;

            for neighbor in self.g.neighbors(current)? {
                if !unvisited.contains(&neighbor) {
                    continue;
                }
                let edge_weight = match self.g.edge_weight(current, neighbor) {
                    Some(weight) => weight,
                    None => continue,
                };

                let candidate = current_distance + edge_weight;
                let improves = match labels.get(&neighbor) {
                    Some(label) => candidate < label.distance,
                    None => true,
                };
                if improves {
                    labels.insert(neighbor, PathLabel::new(candidate, current));
                }
            }
        }
        self.stats.finish();

        let sp = super::reconstruct_path(target, source, &labels);
        match &sp {
            Ok(sp) => {
                debug!("Path found: {:?}", sp);
                info!(
                    "Path found: {:?}/{} nodes settled",
                    self.stats.duration, self.stats.nodes_settled
                );
            }
            Err(err) => {
                info!(
                    "No path found ({}): {:?}/{} nodes settled",
                    err, self.stats.duration, self.stats.nodes_settled
                );
            }
        }

        sp
    }
}

/// Labelled unvisited node with the smallest known distance. Ties on the
/// distance are broken towards the smaller node id, which keeps the
/// selection order deterministic across runs.
fn closest_unvisited(
    unvisited: &FxHashSet<NodeIndex>,
    labels: &FxHashMap<NodeIndex, PathLabel>,
) -> Option<NodeIndex> {
    labels
        .iter()
        .filter(|(node, _)| unvisited.contains(node))
        .min_by(|(u, a), (v, b)| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(u.cmp(v))
        })
        .map(|(node, _)| *node)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::error::GraphError;
    use crate::search::assert_path;
    use crate::util::test_graphs::{generate_complex_graph, generate_diamond_graph};

    use super::*;

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn search_on_diamond_graph() {
        //   1
        //  7 \3
        // 0   3
        //  1 /2
        //   2
        init_log();
        let g = generate_diamond_graph();

        let mut d = Dijkstra::new(&g);

        assert_path(vec![0, 2, 3], 3.0, d.search(NodeIndex::new(0), NodeIndex::new(3)));
        assert_path(vec![3, 2, 0], 3.0, d.search(NodeIndex::new(3), NodeIndex::new(0)));
        assert_path(vec![1, 3, 2], 5.0, d.search(NodeIndex::new(1), NodeIndex::new(2)));
    }

    #[test]
    fn source_equals_target() {
        init_log();
        let g = generate_diamond_graph();

        let mut d = Dijkstra::new(&g);
        assert_path(vec![2], 0.0, d.search(NodeIndex::new(2), NodeIndex::new(2)));
    }

    #[test]
    fn single_node_graph() {
        let g = Graph::new(1);

        let mut d = Dijkstra::new(&g);
        assert_path(vec![0], 0.0, d.search(NodeIndex::new(0), NodeIndex::new(0)));
    }

    #[test]
    fn unreachable_target() {
        // 0 - 1 - 2   3 - 4 - 5
        init_log();
        let mut g = Graph::new(6);
        g.add_edge(NodeIndex::new(0), NodeIndex::new(1), 1.0).unwrap();
        g.add_edge(NodeIndex::new(1), NodeIndex::new(2), 1.0).unwrap();
        g.add_edge(NodeIndex::new(3), NodeIndex::new(4), 3.0).unwrap();
        g.add_edge(NodeIndex::new(4), NodeIndex::new(5), 1.0).unwrap();

        let mut d = Dijkstra::new(&g);

        assert_eq!(
            d.search(NodeIndex::new(0), NodeIndex::new(3)),
            Err(SearchError::NoRoute { source: 0, target: 3 })
        );
        assert_eq!(
            d.search(NodeIndex::new(3), NodeIndex::new(0)),
            Err(SearchError::NoRoute { source: 3, target: 0 })
        );
    }

    #[test]
    fn disconnected_network_is_fatal_even_when_target_is_reached() {
        // 0 - 1 - 2   3 - 4 - 5
        init_log();
        let mut g = Graph::new(6);
        g.add_edge(NodeIndex::new(0), NodeIndex::new(1), 1.0).unwrap();
        g.add_edge(NodeIndex::new(1), NodeIndex::new(2), 1.0).unwrap();
        g.add_edge(NodeIndex::new(3), NodeIndex::new(4), 3.0).unwrap();
        g.add_edge(NodeIndex::new(4), NodeIndex::new(5), 1.0).unwrap();

        let mut d = Dijkstra::new(&g);

        // 2 is reachable from 0, but the closest-node selection runs dry
        // with 3, 4 and 5 still unvisited.
        assert_eq!(
            d.search(NodeIndex::new(0), NodeIndex::new(2)),
            Err(SearchError::NoClosestNode { unvisited: 3 })
        );
    }

    #[test]
    fn first_discovered_predecessor_wins_on_ties() {
        //   1
        //  1 \1
        // 0   3
        //  1 /1
        //   2
        init_log();
        let mut g = Graph::new(4);
        g.add_edge(NodeIndex::new(0), NodeIndex::new(1), 1.0).unwrap();
        g.add_edge(NodeIndex::new(0), NodeIndex::new(2), 1.0).unwrap();
        g.add_edge(NodeIndex::new(1), NodeIndex::new(3), 1.0).unwrap();
        g.add_edge(NodeIndex::new(2), NodeIndex::new(3), 1.0).unwrap();

        let mut d = Dijkstra::new(&g);

        // Node 1 is settled before node 2 and labels node 3 first; the
        // equal-cost route via 2 must not displace it.
        for _ in 0..10 {
            assert_path(vec![0, 1, 3], 2.0, d.search(NodeIndex::new(0), NodeIndex::new(3)));
        }
    }

    #[test]
    fn out_of_range_endpoints_are_rejected() {
        let g = generate_diamond_graph();

        let mut d = Dijkstra::new(&g);

        assert_eq!(
            d.search(NodeIndex::new(7), NodeIndex::new(0)),
            Err(SearchError::Graph(GraphError::NodeOutOfRange {
                index: 7,
                num_nodes: 4
            }))
        );
    }

    #[test]
    fn search_on_complex_graph() {
        init_log();
        let g = generate_complex_graph();
        let num_nodes = g.num_nodes();

        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(&(0..num_nodes, 0..num_nodes), |(a, b)| {
                let mut d = Dijkstra::new(&g);

                let forward = d.search(NodeIndex::new(a), NodeIndex::new(b)).unwrap();
                let backward = d.search(NodeIndex::new(b), NodeIndex::new(a)).unwrap();

                // undirected graph: distances are symmetric
                assert_abs_diff_eq!(forward.weight, backward.weight, epsilon = 1e-9);

                // the reported weight is the sum of the edge weights on the path
                let summed: Weight = forward
                    .nodes
                    .windows(2)
                    .filter_map(|pair| g.edge_weight(pair[0], pair[1]))
                    .sum();
                assert_eq!(forward.weight, summed);

                assert_eq!(forward.nodes.first(), Some(&NodeIndex::new(a)));
                assert_eq!(forward.nodes.last(), Some(&NodeIndex::new(b)));
                Ok(())
            })
            .unwrap();
    }
}
