//! The `Scheduler`: owns the clock, the fleet, the payload registry, and the
//! network, and drives the Phase A / Phase B / Phase C tick loop.

use std::collections::HashMap;
use std::mem;

use agvsim_core::{
    constants::{
        CHARGING_STATION, CRITICAL_BATTERY, FALLBACK_ADVANCE_MIN, LOW_BATTERY_THRESHOLD, MAX_CAPACITY,
        MAX_STUCK, MIN_BATTERY_FOR_PICKUP,
    },
    AgvId, PayloadId, SimTime, StationId,
};

use agvsim_fleet::{AgvMode, Fleet};
use agvsim_metrics::{Metrics, MoveRecord};
use agvsim_network::Network;
use agvsim_payload::PayloadRegistry;
use tracing::warn;

use crate::rules;
use crate::DispatchResult;

/// Everything the scheduler produced over the course of a run.
pub struct RunOutcome {
    pub execution_log: Vec<MoveRecord>,
    pub metrics: Metrics,
    pub deadlocked: bool,
}

/// Owns the clock and drives the dispatch loop to completion or deadlock.
///
/// A tick-counter clock/state split at minute resolution, without a
/// generic behavior-model or router type parameter — this scheduler
/// implements exactly one fixed dispatch policy, so there is nothing to
/// parameterize over.
pub struct Scheduler {
    clock: SimTime,
    fleet: Fleet,
    registry: PayloadRegistry,
    network: Network,
    metrics: Metrics,
    log: Vec<MoveRecord>,
    pickup_times: HashMap<PayloadId, SimTime>,
    stuck_ticks: u32,
    max_stuck: u32,
    fallback_advance_min: u32,
}

impl Scheduler {
    pub fn new(fleet: Fleet, registry: PayloadRegistry, network: Network) -> Self {
        Self {
            clock: SimTime::SIM_START,
            fleet,
            registry,
            network,
            metrics: Metrics::new(),
            log: Vec::new(),
            pickup_times: HashMap::new(),
            stuck_ticks: 0,
            max_stuck: MAX_STUCK,
            fallback_advance_min: FALLBACK_ADVANCE_MIN,
        }
    }

    /// Override the simulation's starting clock (defaults to
    /// [`SimTime::SIM_START`]). Has no effect once [`Self::run`] has begun.
    pub fn set_start_time(&mut self, start: SimTime) {
        self.clock = start;
    }

    /// Override the number of consecutive no-progress ticks tolerated
    /// before the run is declared deadlocked (defaults to [`MAX_STUCK`]).
    pub fn set_max_stuck(&mut self, max_stuck: u32) {
        self.max_stuck = max_stuck;
    }

    /// Override the fallback clock advance used when no event is pending
    /// (defaults to [`FALLBACK_ADVANCE_MIN`]).
    pub fn set_fallback_advance_min(&mut self, minutes: u32) {
        self.fallback_advance_min = minutes;
    }

    pub fn clock(&self) -> SimTime {
        self.clock
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn registry(&self) -> &PayloadRegistry {
        &self.registry
    }

    /// Reserve `station` against further assignment this tick, for `agv`.
    ///
    /// Unused by the current dispatch loop — a seam for a future
    /// station-occupancy reservation map (keyed by `(station, minute)`),
    /// which collision avoidance would need but this scheduler does not
    /// enforce.
    #[allow(dead_code)]
    pub fn reserve_station(&mut self, _station: StationId, _agv: &AgvId) {}

    /// Run the dispatch loop to completion: every payload delivered, or
    /// deadlock after `MAX_STUCK` consecutive no-progress ticks.
    pub fn run(&mut self) -> DispatchResult<RunOutcome> {
        let deadlocked = loop {
            if self.registry.all_delivered() {
                break false;
            }

            let progress_a = self.phase_a();
            let progress_b = self.phase_b();

            if progress_a || progress_b {
                self.stuck_ticks = 0;
                continue;
            }

            if !self.phase_c_advance() {
                warn!(stuck_ticks = self.stuck_ticks, "scheduler deadlocked; terminating");
                break true;
            }
        };

        self.finalize();

        Ok(RunOutcome {
            execution_log: mem::take(&mut self.log),
            metrics: mem::replace(&mut self.metrics, Metrics::new()),
            deadlocked,
        })
    }

    // ── Phase A: complete due tasks ────────────────────────────────────────

    fn phase_a(&mut self) -> bool {
        let now = self.clock;
        let mut progress = false;
        let mut arrived: Vec<(AgvId, StationId)> = Vec::new();

        for agv in self.fleet.iter_mut() {
            if !agv.is_due_at(now) {
                continue;
            }
            match agv.mode() {
                AgvMode::Moving => match agv.complete_move(now) {
                    Ok(()) => {
                        progress = true;
                        arrived.push((agv.id().clone(), agv.station()));
                    }
                    Err(e) => warn!(agv = %agv.id(), error = %e, "complete_move failed"),
                },
                AgvMode::Charging => match agv.complete_charge(now) {
                    Ok(()) => progress = true,
                    Err(e) => warn!(agv = %agv.id(), error = %e, "complete_charge failed"),
                },
                AgvMode::Idle => {}
            }
        }

        for (agv_id, station) in arrived {
            let held: Vec<PayloadId> = match self.fleet.get(&agv_id) {
                Some(agv) => agv.held().to_vec(),
                None => continue,
            };
            for payload_id in held {
                let (weight, priority, destination) = match self.registry.get(&payload_id) {
                    Some(p) => (p.weight, p.priority, p.destination),
                    None => continue,
                };
                if destination != station {
                    continue;
                }
                let Some(agv) = self.fleet.get_mut(&agv_id) else { continue };
                if let Err(e) = agv.detach(&payload_id, weight) {
                    warn!(agv = %agv_id, payload = %payload_id, error = %e, "detach failed");
                    continue;
                }
                if let Err(e) = self.registry.mark_delivered(&payload_id) {
                    warn!(payload = %payload_id, error = %e, "mark_delivered failed");
                    continue;
                }
                let pickup_time = self.pickup_times.remove(&payload_id).unwrap_or(now);
                self.metrics.record_delivery(priority, now.since(pickup_time));
                progress = true;
            }
        }

        progress
    }

    // ── Phase B: assign actions to idle AGVs ───────────────────────────────

    fn phase_b(&mut self) -> bool {
        let now = self.clock;
        let ids: Vec<AgvId> = self.fleet.iter().map(|a| a.id().clone()).collect();
        let mut progress = false;

        for id in ids {
            let is_idle = match self.fleet.get(&id) {
                Some(agv) => agv.is_idle_at(now),
                None => continue,
            };
            if !is_idle {
                continue;
            }

            let acted = self.rule_critical_charge_dash(&id, now)
                || self.rule_begin_charge(&id, now)
                || self.rule_deliver_held(&id, now)
                || self.rule_preventive_charge(&id, now)
                || self.rule_pickup(&id, now);

            if acted {
                progress = true;
            }
        }

        progress
    }

    fn rule_critical_charge_dash(&mut self, id: &AgvId, now: SimTime) -> bool {
        let charging_station = StationId::new(CHARGING_STATION);
        let Some((station, battery)) = self.fleet.get(id).map(|a| (a.station(), a.battery())) else {
            return false;
        };
        if !(battery < CRITICAL_BATTERY && station != charging_station) {
            return false;
        }
        self.start_hop(id, charging_station, now)
    }

    fn rule_begin_charge(&mut self, id: &AgvId, now: SimTime) -> bool {
        let charging_station = StationId::new(CHARGING_STATION);
        let Some((station, battery)) = self.fleet.get(id).map(|a| (a.station(), a.battery())) else {
            return false;
        };
        if !(station == charging_station && battery < 100.0) {
            return false;
        }
        let Some(agv) = self.fleet.get_mut(id) else { return false };
        match agv.start_charge(now) {
            Ok(()) => true,
            Err(e) => {
                warn!(agv = %id, error = %e, "start_charge failed");
                false
            }
        }
    }

    fn rule_deliver_held(&mut self, id: &AgvId, now: SimTime) -> bool {
        let Some(agv) = self.fleet.get(id) else { return false };
        if agv.held().is_empty() {
            return false;
        }
        let station = agv.station();
        let destinations: Vec<StationId> = agv
            .held()
            .iter()
            .filter_map(|pid| self.registry.get(pid).map(|p| p.destination))
            .collect();
        if destinations.is_empty() {
            return false;
        }

        let Some(target) = rules::nearest_station(&self.network, station, &destinations) else {
            return false;
        };
        if target == station {
            // Already there; Phase A detaches on the next tick.
            return false;
        }
        self.start_hop(id, target, now)
    }

    fn rule_preventive_charge(&mut self, id: &AgvId, now: SimTime) -> bool {
        let charging_station = StationId::new(CHARGING_STATION);
        let Some((station, held_empty, battery)) =
            self.fleet.get(id).map(|a| (a.station(), a.held().is_empty(), a.battery()))
        else {
            return false;
        };
        if !(held_empty && battery < LOW_BATTERY_THRESHOLD && station != charging_station) {
            return false;
        }
        self.start_hop(id, charging_station, now)
    }

    fn rule_pickup(&mut self, id: &AgvId, now: SimTime) -> bool {
        let Some((station, load, battery)) = self.fleet.get(id).map(|a| (a.station(), a.load(), a.battery()))
        else {
            return false;
        };
        if battery < MIN_BATTERY_FOR_PICKUP {
            return false;
        }

        let Some(plan) = rules::plan_pickup(now, station, load, &self.network, &self.registry) else {
            return false;
        };

        if plan.source != station {
            return self.start_hop(id, plan.source, now);
        }

        let Some(agv) = self.fleet.get_mut(id) else { return false };
        let mut attached_any = false;
        for payload_id in &plan.candidates {
            let Some(weight) = self.registry.get(payload_id).map(|p| p.weight) else {
                continue;
            };
            if agv.load() + weight > MAX_CAPACITY {
                continue;
            }
            // Claim before attaching: once claimed, this payload drops out
            // of every other idle AGV's `plan_pickup` pool for the rest of
            // this tick, even though it is only physically attached below.
            if let Err(e) = self.registry.claim(payload_id) {
                warn!(payload = %payload_id, error = %e, "claim failed");
                continue;
            }
            match agv.attach(payload_id.clone(), weight) {
                Ok(()) => {
                    self.pickup_times.insert(payload_id.clone(), now);
                    attached_any = true;
                }
                Err(e) => {
                    warn!(agv = %id, payload = %payload_id, error = %e, "attach failed");
                    if let Err(e) = self.registry.unclaim(payload_id) {
                        warn!(payload = %payload_id, error = %e, "unclaim failed");
                    }
                }
            }
        }
        attached_any
    }

    /// Start a one-hop move from the AGV's current station toward
    /// `destination`, emitting the move-log record. Shared by every rule
    /// that initiates a hop (1, 3, 4, 5).
    fn start_hop(&mut self, id: &AgvId, destination: StationId, now: SimTime) -> bool {
        let Some(station) = self.fleet.get(id).map(|a| a.station()) else {
            return false;
        };
        if station == destination {
            return false;
        }
        let Some(next) = rules::next_hop(&self.network, station, destination) else {
            warn!(agv = %id, from = %station, to = %destination, "no route for hop");
            return false;
        };
        let segment_distance = self
            .network
            .edge_weight(station, next)
            .unwrap_or_else(|| self.network.distance(station, next));

        let Some(agv) = self.fleet.get_mut(id) else { return false };
        if let Err(e) = agv.start_move(next, segment_distance, now) {
            warn!(agv = %id, error = %e, "start_move failed");
            return false;
        }

        let load = agv.load();
        let payload_info = MoveRecord::payload_info_for(agv.held());
        self.log.push(MoveRecord::new(id.clone(), station, next, now, load, payload_info));
        true
    }

    // ── Phase C: clock advance + deadlock detection ────────────────────────

    fn phase_c_advance(&mut self) -> bool {
        self.stuck_ticks += 1;
        if self.stuck_ticks >= self.max_stuck {
            return false;
        }

        let now = self.clock;
        let mut next: Option<SimTime> = None;

        for agv in self.fleet.iter() {
            if agv.mode() != AgvMode::Idle {
                next = Some(next.map_or(agv.busy_until(), |n| n.min(agv.busy_until())));
            }
        }
        for payload in self.registry.iter() {
            if !payload.delivered && payload.dispatch_time > now {
                next = Some(next.map_or(payload.dispatch_time, |n| n.min(payload.dispatch_time)));
            }
        }

        self.clock = next.unwrap_or_else(|| now.offset(self.fallback_advance_min));
        true
    }

    fn finalize(&mut self) {
        self.metrics.set_end_time(self.clock);
        let counts: Vec<(AgvId, u32)> = self.fleet.iter().map(|a| (a.id().clone(), a.charge_count())).collect();
        for (id, count) in counts {
            self.metrics.set_charge_count(id, count);
        }
    }
}
