use crate::graph::{node_index, Graph};

/// Four nodes, two competing routes from 0 to 3:
///
/// ```text
///   1
///  7 \3
/// 0   3
///  1 /2
///   2
/// ```
pub fn generate_diamond_graph() -> Graph {
    Graph::from_edges(
        4,
        vec![
            (node_index(0), node_index(1), 7.0),
            (node_index(0), node_index(2), 1.0),
            (node_index(1), node_index(3), 3.0),
            (node_index(2), node_index(3), 2.0),
        ],
    )
    .expect("diamond graph is valid")
}

/// Connected 11-node network with several equal-cost alternatives.
pub fn generate_complex_graph() -> Graph {
    let a = node_index(0);
    let b = node_index(1);
    let c = node_index(2);
    let d = node_index(3);
    let e = node_index(4);
    let f = node_index(5);
    let g = node_index(6);
    let h = node_index(7);
    let i = node_index(8);
    let j = node_index(9);
    let k = node_index(10);

    Graph::from_edges(
        11,
        vec![
            (a, b, 3.0),
            (a, c, 5.0),
            (a, k, 3.0),
            (b, d, 5.0),
            (b, c, 3.0),
            (c, d, 2.0),
            (c, j, 2.0),
            (d, j, 4.0),
            (d, e, 7.0),
            (e, j, 3.0),
            (e, f, 6.0),
            (f, h, 2.0),
            (f, g, 4.0),
            (g, h, 3.0),
            (g, i, 5.0),
            (h, i, 3.0),
            (h, j, 2.0),
            (i, j, 4.0),
            (i, k, 6.0),
            (j, k, 3.0),
        ],
    )
    .expect("complex graph is valid")
}
