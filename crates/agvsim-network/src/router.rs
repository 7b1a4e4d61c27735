//! Dijkstra shortest-path search over a [`Network`].
//!
//! A million-edge road network would cache per-query results behind a
//! `Router` trait so repeated lookups stay cheap. This domain's graphs are
//! tens of nodes, so `shortest_path` just runs Dijkstra fresh every call —
//! no trait, no cache, no invalidation to get wrong when
//! `Network::add_edge`/`set_edges` rebuilds the graph.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use agvsim_core::StationId;

use crate::network::Network;

/// The result of a successful shortest-path search.
pub(crate) struct PathResult {
    pub total_weight: f64,
    pub stations: Vec<StationId>,
}

/// A `(cost, station)` pair ordered for use in a min-heap `BinaryHeap`
/// (`BinaryHeap` is a max-heap, so [`Ord`] below reverses the cost
/// comparison). Ties on cost break on station id, smaller first, so two
/// equal-weight paths always resolve to the same route.
#[derive(Copy, Clone, PartialEq)]
struct HeapEntry {
    cost: f64,
    station: StationId,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.station.0.cmp(&self.station.0))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra from `from` to `to`. Returns `None` if `to` is unreachable or
/// either station is unknown to `network`.
pub(crate) fn shortest_path(network: &Network, from: StationId, to: StationId) -> Option<PathResult> {
    if !network.contains(from) || !network.contains(to) {
        return None;
    }

    let mut dist: HashMap<StationId, f64> = HashMap::new();
    let mut prev: HashMap<StationId, StationId> = HashMap::new();
    let mut heap = BinaryHeap::new();

    dist.insert(from, 0.0);
    heap.push(HeapEntry { cost: 0.0, station: from });

    while let Some(HeapEntry { cost, station }) = heap.pop() {
        if station == to {
            break;
        }
        if cost > *dist.get(&station).unwrap_or(&f64::INFINITY) {
            continue;
        }

        for &(neighbor, weight) in network.neighbors(station) {
            let next_cost = cost + weight;
            if next_cost < *dist.get(&neighbor).unwrap_or(&f64::INFINITY) {
                dist.insert(neighbor, next_cost);
                prev.insert(neighbor, station);
                heap.push(HeapEntry { cost: next_cost, station: neighbor });
            }
        }
    }

    let total_weight = *dist.get(&to)?;
    let mut stations = vec![to];
    let mut current = to;
    while current != from {
        current = *prev.get(&current)?;
        stations.push(current);
    }
    stations.reverse();

    Some(PathResult { total_weight, stations })
}
