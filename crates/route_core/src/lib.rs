//! Crate to plan flight routes over a small undirected airport network.
//!
//! # Basic usage
//! ```
//! use route_core::graph::{node_index, Graph};
//! use route_core::search::dijkstra::Dijkstra;
//!
//! // Build a graph with four nodes and one undirected edge per flight
//! let mut g = Graph::new(4);
//! g.add_edge(node_index(0), node_index(1), 7.0).unwrap();
//! g.add_edge(node_index(0), node_index(2), 1.0).unwrap();
//! g.add_edge(node_index(1), node_index(3), 3.0).unwrap();
//! g.add_edge(node_index(2), node_index(3), 2.0).unwrap();
//!
//! // Run Dijkstra's algorithm between two nodes
//! let mut dijkstra = Dijkstra::new(&g);
//! let sp = dijkstra.search(node_index(0), node_index(3)).unwrap();
//!
//! assert_eq!(sp.weight, 3.0);
//! ```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod error;
pub mod graph;
pub mod routes;
pub mod search;
pub mod statistics;
pub mod util;
