//! Maps the airport network onto the graph core and back.
//!
//! Airport codes are assigned dense node ids by sorting the set of distinct
//! codes; the resulting ids feed [`Graph`] construction and Dijkstra
//! queries, and the found path is translated back into codes.

use std::path::Path;

use anyhow::{anyhow, Context};
use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::Weight;
use crate::graph::{Graph, NodeIndex};
use crate::search::dijkstra::Dijkstra;

/// IATA-style airport code, e.g. "FRA".
pub type AirportCode = String;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Airport {
    pub code: AirportCode,
    pub full_name: String,
}

/// A scheduled flight. Flights connect both ways: a flight from `departure`
/// to `destination` also serves the reverse direction.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Flight {
    pub departure: AirportCode,
    pub destination: AirportCode,
    pub duration_in_hours: Weight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub airport_codes: Vec<AirportCode>,
    pub total_duration_in_hours: Weight,
}

/// Finds the fastest route between two airports over the scheduled flights.
pub fn find_fastest_route(
    airports: &[Airport],
    scheduled_flights: &[Flight],
    departure: &str,
    destination: &str,
) -> anyhow::Result<Route> {
    let airports_to_nodes = enumerate_airports(airports);

    let lookup = |code: &str| {
        airports_to_nodes
            .get(code)
            .copied()
            .ok_or_else(|| anyhow!("unknown airport code: {code}"))
    };

    let edges = scheduled_flights
        .iter()
        .map(|flight| {
            Ok((
                lookup(&flight.departure)?,
                lookup(&flight.destination)?,
                flight.duration_in_hours,
            ))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let graph = Graph::from_edges(airports_to_nodes.len(), edges)
        .context("Failed to build the flight graph")?;

    let source = lookup(departure)?;
    let target = lookup(destination)?;

    let mut dijkstra = Dijkstra::new(&graph);
    let sp = dijkstra
        .search(source, target)
        .with_context(|| format!("No usable route from {departure} to {destination}"))?;

    debug!("{} -> {}: {}", departure, destination, dijkstra.stats);

    let nodes_to_airports = reverse_airport_index(&airports_to_nodes);
    let airport_codes = sp
        .nodes
        .iter()
        .map(|node| nodes_to_airports[node].clone())
        .collect();

    Ok(Route {
        airport_codes,
        total_duration_in_hours: total_duration_in_hours(&graph, &sp.nodes),
    })
}

/// Assigns each distinct airport code a dense node id. The codes are sorted
/// ascending first, so the assignment is canonical for a given airport set.
pub fn enumerate_airports(airports: &[Airport]) -> FxHashMap<AirportCode, NodeIndex> {
    let mut codes: Vec<&str> = airports.iter().map(|a| a.code.as_str()).collect();
    codes.sort_unstable();
    codes.dedup();

    codes
        .into_iter()
        .enumerate()
        .map(|(index, code)| (code.to_string(), NodeIndex::new(index)))
        .collect()
}

fn reverse_airport_index(
    airports_to_nodes: &FxHashMap<AirportCode, NodeIndex>,
) -> FxHashMap<NodeIndex, AirportCode> {
    airports_to_nodes
        .iter()
        .map(|(code, node)| (*node, code.clone()))
        .collect()
}

fn total_duration_in_hours(graph: &Graph, path: &[NodeIndex]) -> Weight {
    path.windows(2)
        .filter_map(|pair| graph.edge_weight(pair[0], pair[1]))
        .sum()
}

pub fn load_airports(path: &Path) -> anyhow::Result<Vec<Airport>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(std::io::BufReader::new(file)).context("Failed to parse airports")
}

pub fn load_flights(path: &Path) -> anyhow::Result<Vec<Flight>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(std::io::BufReader::new(file)).context("Failed to parse flights")
}
