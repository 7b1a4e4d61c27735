//! The station graph and its builder.
//!
//! # Data layout
//!
//! `Network` holds an adjacency list keyed by `StationId` rather than a CSR
//! layout sized for millions of edges — this domain's graphs top out at
//! tens of stations, so a `HashMap<StationId, Vec<(StationId, f64)>>` is
//! simpler to build incrementally and just as fast in practice.

use std::collections::HashMap;

use agvsim_core::StationId;

use crate::router;
use crate::NetworkError;

// ── Station ───────────────────────────────────────────────────────────────────

/// A station in the network. Identity is its `id`; `is_charging` marks the
/// one station (by convention, id 9) where AGVs may recharge.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub id: StationId,
    pub is_charging: bool,
}

impl Station {
    pub fn new(id: StationId, is_charging: bool) -> Self {
        Self { id, is_charging }
    }
}

// ── Network ───────────────────────────────────────────────────────────────────

/// An undirected, positively weighted graph over stations.
///
/// Construct via [`NetworkBuilder`]. `distance`/`shortest_path` run a fresh
/// Dijkstra search per call (see [`router`] for why this crate does not
/// cache results).
pub struct Network {
    stations: Vec<Station>,
    adjacency: HashMap<StationId, Vec<(StationId, f64)>>,
}

impl Network {
    /// All stations known to the network, in the order they were added.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// `true` if `id` is a known station.
    pub fn contains(&self, id: StationId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// The station flagged as the charging station, if one was designated.
    pub fn charging_station(&self) -> Option<StationId> {
        self.stations.iter().find(|s| s.is_charging).map(|s| s.id)
    }

    /// Neighbors of `station` as `(neighbor, edge_weight)` pairs.
    pub(crate) fn neighbors(&self, station: StationId) -> &[(StationId, f64)] {
        self.adjacency
            .get(&station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The weight of the direct edge between `a` and `b`, or `None` if they
    /// are not directly connected. Used by the dispatch policy to compute a
    /// single hop's travel time, as opposed to [`Self::distance`]'s
    /// multi-hop shortest-path weight.
    pub fn edge_weight(&self, a: StationId, b: StationId) -> Option<f64> {
        self.neighbors(a).iter().find(|(s, _)| *s == b).map(|(_, w)| *w)
    }

    /// The weight of the shortest path between `a` and `b`, or `f64::INFINITY`
    /// if no path exists.
    pub fn distance(&self, a: StationId, b: StationId) -> f64 {
        if a == b {
            return 0.0;
        }
        router::shortest_path(self, a, b)
            .map(|p| p.total_weight)
            .unwrap_or(f64::INFINITY)
    }

    /// The shortest path from `a` to `b`, inclusive of both endpoints.
    ///
    /// Empty if no path exists. Length is always `>= 2` when `a != b`.
    pub fn shortest_path(&self, a: StationId, b: StationId) -> Vec<StationId> {
        if a == b {
            return vec![a];
        }
        router::shortest_path(self, a, b)
            .map(|p| p.stations)
            .unwrap_or_default()
    }

    /// Add (or update) an undirected edge between two known stations.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::UnknownStation`] if either endpoint has not
    /// been registered via [`NetworkBuilder::add_station`].
    pub fn add_edge(&mut self, a: StationId, b: StationId, weight: f64) -> Result<(), NetworkError> {
        if !self.contains(a) {
            return Err(NetworkError::UnknownStation(a));
        }
        if !self.contains(b) {
            return Err(NetworkError::UnknownStation(b));
        }
        debug_assert!(weight.is_finite() && weight > 0.0, "edge weights must be positive and finite");

        upsert_edge(self.adjacency.entry(a).or_default(), b, weight);
        upsert_edge(self.adjacency.entry(b).or_default(), a, weight);
        Ok(())
    }

    /// Replace the entire edge set in one pass. Existing edges not present
    /// in `edges` are removed; stations are left untouched.
    pub fn set_edges(&mut self, edges: &[(StationId, StationId, f64)]) -> Result<(), NetworkError> {
        for adj in self.adjacency.values_mut() {
            adj.clear();
        }
        for &(a, b, w) in edges {
            self.add_edge(a, b, w)?;
        }
        Ok(())
    }
}

fn upsert_edge(adj: &mut Vec<(StationId, f64)>, to: StationId, weight: f64) {
    match adj.iter_mut().find(|(s, _)| *s == to) {
        Some(entry) => entry.1 = weight,
        None => adj.push((to, weight)),
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Incrementally construct a [`Network`].
///
/// # Example
///
/// ```
/// use agvsim_core::StationId;
/// use agvsim_network::NetworkBuilder;
///
/// let mut b = NetworkBuilder::new();
/// let a = StationId::new(1);
/// let c = StationId::new(2);
/// b.add_station(a, false);
/// b.add_station(c, false);
/// b.add_edge(a, c, 10.0).unwrap();
/// let net = b.build();
/// assert_eq!(net.distance(a, c), 10.0);
/// ```
#[derive(Default)]
pub struct NetworkBuilder {
    stations: Vec<Station>,
    adjacency: HashMap<StationId, Vec<(StationId, f64)>>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station. Calling this twice for the same id is a no-op
    /// (the first registration's `is_charging` flag wins).
    pub fn add_station(&mut self, id: StationId, is_charging: bool) -> &mut Self {
        self.adjacency.entry(id).or_default();
        if !self.stations.iter().any(|s| s.id == id) {
            self.stations.push(Station::new(id, is_charging));
        }
        self
    }

    /// Add an undirected edge. Both stations must already be registered via
    /// [`Self::add_station`].
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::UnknownStation`] for an unregistered endpoint.
    pub fn add_edge(&mut self, a: StationId, b: StationId, weight: f64) -> Result<&mut Self, NetworkError> {
        if !self.adjacency.contains_key(&a) {
            return Err(NetworkError::UnknownStation(a));
        }
        if !self.adjacency.contains_key(&b) {
            return Err(NetworkError::UnknownStation(b));
        }
        upsert_edge(self.adjacency.get_mut(&a).unwrap(), b, weight);
        upsert_edge(self.adjacency.get_mut(&b).unwrap(), a, weight);
        Ok(self)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Consume the builder and produce a [`Network`].
    pub fn build(self) -> Network {
        Network {
            stations: self.stations,
            adjacency: self.adjacency,
        }
    }
}
