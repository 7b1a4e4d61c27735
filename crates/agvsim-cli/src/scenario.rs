//! The built-in default scenario, and the optional fleet-roster loader.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use agvsim_core::{constants::CHARGING_STATION, AgvId, SimTime, StationId};
use agvsim_fleet::{Agv, Fleet};
use agvsim_network::{Network, NetworkBuilder};

/// Nine stations at grid coordinates, fully connected by Euclidean
/// distance. Station 9 (at `(20, 20)`) is the charging station.
const GRID_COORDS: [(u32, f64, f64); 9] = [
    (1, 0.0, 0.0),
    (2, 10.0, 0.0),
    (3, 20.0, 0.0),
    (4, 0.0, 10.0),
    (5, 10.0, 10.0),
    (6, 20.0, 10.0),
    (7, 0.0, 20.0),
    (8, 10.0, 20.0),
    (9, 20.0, 20.0),
];

/// The default nine-station grid network used when `--network` is omitted.
pub fn default_network() -> Network {
    let mut builder = NetworkBuilder::new();
    for &(id, _, _) in &GRID_COORDS {
        builder.add_station(StationId::new(id), id == CHARGING_STATION);
    }
    for (i, &(id_a, xa, ya)) in GRID_COORDS.iter().enumerate() {
        for &(id_b, xb, yb) in &GRID_COORDS[i + 1..] {
            let distance = ((xa - xb).powi(2) + (ya - yb).powi(2)).sqrt();
            builder.add_edge(StationId::new(id_a), StationId::new(id_b), distance).expect("both stations registered above");
        }
    }
    builder.build()
}

/// The default three-AGV fleet: AGVs at stations 1, 3, and 7.
pub fn default_fleet() -> Fleet {
    Fleet::new(vec![
        Agv::new(AgvId::new("agv_1"), StationId::new(1), SimTime::SIM_START),
        Agv::new(AgvId::new("agv_2"), StationId::new(3), SimTime::SIM_START),
        Agv::new(AgvId::new("agv_3"), StationId::new(7), SimTime::SIM_START),
    ])
}

#[derive(Deserialize)]
struct FleetRecord {
    id: String,
    station: u32,
}

/// Load an AGV roster from a simple `id,station` CSV.
pub fn load_fleet_csv(path: &Path) -> Result<Fleet, FleetLoadError> {
    let file = std::fs::File::open(path)?;
    load_fleet_reader(file)
}

fn load_fleet_reader<R: Read>(reader: R) -> Result<Fleet, FleetLoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut agvs = Vec::new();
    for (row_num, result) in csv_reader.deserialize::<FleetRecord>().enumerate() {
        let record = result.map_err(|e| FleetLoadError::Parse(format!("row {}: {e}", row_num + 1)))?;
        agvs.push(Agv::new(AgvId::new(record.id), StationId::new(record.station), SimTime::SIM_START));
    }
    if agvs.is_empty() {
        return Err(FleetLoadError::Parse("fleet file contains no rows".to_string()));
    }
    Ok(Fleet::new(agvs))
}

#[derive(Debug, thiserror::Error)]
pub enum FleetLoadError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Deserialize)]
struct NetworkFile {
    stations: Vec<NetworkStation>,
    edges: Vec<NetworkEdge>,
}

#[derive(Deserialize)]
struct NetworkStation {
    id: u32,
    #[serde(default)]
    is_charging: bool,
}

#[derive(Deserialize)]
struct NetworkEdge {
    a: u32,
    b: u32,
    weight: f64,
}

/// Load a station/edge network from a TOML file:
///
/// ```toml
/// [[stations]]
/// id = 1
/// is_charging = false
///
/// [[edges]]
/// a = 1
/// b = 2
/// weight = 10.0
/// ```
pub fn load_network_toml(path: &Path) -> Result<Network, NetworkLoadError> {
    let content = std::fs::read_to_string(path)?;
    let parsed: NetworkFile = toml::from_str(&content)?;

    let mut builder = NetworkBuilder::new();
    for station in &parsed.stations {
        builder.add_station(StationId::new(station.id), station.is_charging);
    }
    for edge in &parsed.edges {
        builder.add_edge(StationId::new(edge.a), StationId::new(edge.b), edge.weight)?;
    }
    Ok(builder.build())
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid network TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Network(#[from] agvsim_network::NetworkError),
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn default_network_connects_every_station_pair() {
        let network = default_network();
        assert_eq!(network.stations().len(), 9);
        assert_eq!(network.charging_station(), Some(StationId::new(9)));
        assert_eq!(network.edge_weight(StationId::new(1), StationId::new(2)), Some(10.0));
    }

    #[test]
    fn default_fleet_has_three_agvs_at_the_documented_stations() {
        let fleet = default_fleet();
        assert_eq!(fleet.len(), 3);
        assert_eq!(fleet.get(&AgvId::new("agv_1")).unwrap().station(), StationId::new(1));
        assert_eq!(fleet.get(&AgvId::new("agv_3")).unwrap().station(), StationId::new(7));
    }

    #[test]
    fn loads_a_fleet_roster_from_csv() {
        let csv = "id,station\nagv_a,1\nagv_b,2\n";
        let fleet = load_fleet_reader(Cursor::new(csv)).unwrap();
        assert_eq!(fleet.len(), 2);
        assert_eq!(fleet.get(&AgvId::new("agv_a")).unwrap().station(), StationId::new(1));
    }

    #[test]
    fn rejects_an_empty_fleet_file() {
        let csv = "id,station\n";
        let err = load_fleet_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, FleetLoadError::Parse(_)));
    }

    #[test]
    fn parses_a_network_toml_document() {
        let toml = r#"
            [[stations]]
            id = 1

            [[stations]]
            id = 2
            is_charging = true

            [[edges]]
            a = 1
            b = 2
            weight = 7.5
        "#;
        let parsed: NetworkFile = toml::from_str(toml).unwrap();
        assert_eq!(parsed.stations.len(), 2);
        assert_eq!(parsed.edges[0].weight, 7.5);
    }
}
