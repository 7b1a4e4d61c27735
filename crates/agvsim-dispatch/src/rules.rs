//! Pure helper functions backing the Phase B dispatch rules.
//!
//! These take plain references (never `&mut Scheduler`) so they can be unit
//! tested without constructing a full scheduler.

use std::collections::BTreeMap;

use agvsim_core::{constants::MAX_CAPACITY, PayloadId, SimTime, StationId};
use agvsim_network::Network;
use agvsim_payload::PayloadRegistry;

/// Pick the station nearest `from` among `destinations`, tie-breaking on the
/// smaller station id.
pub(crate) fn nearest_station(network: &Network, from: StationId, destinations: &[StationId]) -> Option<StationId> {
    let mut best: Option<(f64, StationId)> = None;
    for &candidate in destinations {
        let distance = network.distance(from, candidate);
        best = Some(match best {
            None => (distance, candidate),
            Some((best_dist, best_id)) => {
                if distance < best_dist || (distance == best_dist && candidate.0 < best_id.0) {
                    (distance, candidate)
                } else {
                    (best_dist, best_id)
                }
            }
        });
    }
    best.map(|(_, id)| id)
}

/// The next station to step to on the shortest path from `from` toward
/// `to`. `None` if `from == to` or no path exists.
pub(crate) fn next_hop(network: &Network, from: StationId, to: StationId) -> Option<StationId> {
    let path = network.shortest_path(from, to);
    path.get(1).copied()
}

/// The result of the pickup sub-algorithm: a chosen source station and the
/// set of payloads to take from it.
pub(crate) struct PickupPlan {
    pub source: StationId,
    pub candidates: Vec<PayloadId>,
}

/// Run the pickup sub-algorithm: group eligible payloads by source, greedily
/// pack each group against remaining capacity, score each source by `(best
/// priority, distance from the AGV)`, and return the winning source with its
/// admitted payload set.
pub(crate) fn plan_pickup(
    now: SimTime,
    agv_station: StationId,
    agv_load: f64,
    network: &Network,
    registry: &PayloadRegistry,
) -> Option<PickupPlan> {
    let mut by_source: BTreeMap<StationId, Vec<(u8, SimTime, PayloadId, f64)>> = BTreeMap::new();

    for payload in registry.iter() {
        if payload.is_pending_at(now) && payload.weight <= MAX_CAPACITY - agv_load {
            by_source.entry(payload.source).or_default().push((
                payload.priority,
                payload.dispatch_time,
                payload.id.clone(),
                payload.weight,
            ));
        }
    }

    let mut best: Option<(u8, f64, StationId, Vec<PayloadId>)> = None;

    for (source, mut group) in by_source {
        group.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

        let mut running = agv_load;
        let mut admitted = Vec::new();
        let mut best_priority = u8::MAX;
        for (priority, _, id, weight) in &group {
            if running + weight <= MAX_CAPACITY {
                running += weight;
                admitted.push(id.clone());
                best_priority = best_priority.min(*priority);
            }
        }
        if admitted.is_empty() {
            continue;
        }

        let distance = network.distance(agv_station, source);
        let candidate = (best_priority, distance, source, admitted);

        best = Some(match best {
            None => candidate,
            Some((best_priority, best_distance, best_source, best_admitted)) => {
                let better = candidate.0 < best_priority
                    || (candidate.0 == best_priority && candidate.1 < best_distance)
                    || (candidate.0 == best_priority
                        && candidate.1 == best_distance
                        && candidate.2 .0 < best_source.0);
                if better {
                    candidate
                } else {
                    (best_priority, best_distance, best_source, best_admitted)
                }
            }
        });
    }

    best.map(|(_, _, source, candidates)| PickupPlan { source, candidates })
}
