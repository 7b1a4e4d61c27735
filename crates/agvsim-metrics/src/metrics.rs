//! The metrics recorder: delivery latencies, charge counts, and makespan.

use std::collections::BTreeMap;

use agvsim_core::{AgvId, SimTime};

/// Accumulates outcomes over the course of a run and reduces them to the
/// summary figures named in the output contract.
///
/// Deliberately decoupled from `agvsim-fleet`/`agvsim-payload`: the
/// scheduler feeds it plain `(priority, latency)` pairs and `(AgvId, count)`
/// charge tallies rather than handing it live fleet/registry references, so
/// this crate has no dependency on either.
#[derive(Debug, Default)]
pub struct Metrics {
    latencies_by_priority: BTreeMap<u8, Vec<u32>>,
    charge_counts: BTreeMap<AgvId, u32>,
    makespan_minutes: u32,
    delivered_count: usize,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one payload's pickup→detach latency, in minutes, bucketed by
    /// priority.
    pub fn record_delivery(&mut self, priority: u8, latency_min: u32) {
        self.latencies_by_priority.entry(priority).or_default().push(latency_min);
        self.delivered_count += 1;
    }

    /// Set one AGV's final charge count. Called once per AGV when the run
    /// ends.
    pub fn set_charge_count(&mut self, agv_id: AgvId, count: u32) {
        self.charge_counts.insert(agv_id, count);
    }

    /// Set the makespan from the run's end time, i.e. `end_time -
    /// SimTime::SIM_START` in minutes.
    pub fn set_end_time(&mut self, end_time: SimTime) {
        self.makespan_minutes = end_time.since_start();
    }

    pub fn makespan_minutes(&self) -> u32 {
        self.makespan_minutes
    }

    pub fn delivered_count(&self) -> usize {
        self.delivered_count
    }

    pub fn charge_counts(&self) -> &BTreeMap<AgvId, u32> {
        &self.charge_counts
    }

    pub fn total_charge_count(&self) -> u32 {
        self.charge_counts.values().sum()
    }

    /// Average delivery latency per priority, 0.0 for any of {1,2,3} with no
    /// deliveries recorded.
    pub fn avg_delivery_by_priority(&self) -> BTreeMap<u8, f64> {
        let mut out = BTreeMap::new();
        for priority in 1..=3u8 {
            let avg = match self.latencies_by_priority.get(&priority) {
                Some(latencies) if !latencies.is_empty() => {
                    latencies.iter().sum::<u32>() as f64 / latencies.len() as f64
                }
                _ => 0.0,
            };
            out.insert(priority, avg);
        }
        out
    }

    /// The raw per-priority latency lists, for detail reporting.
    pub fn latencies_by_priority(&self) -> &BTreeMap<u8, Vec<u32>> {
        &self.latencies_by_priority
    }
}
