//! Unit tests for `agvsim-metrics`.

use agvsim_core::{AgvId, SimTime, StationId};

use crate::{Metrics, MoveRecord};

#[test]
fn move_record_formats_the_canonical_log_line() {
    let record = MoveRecord::new(
        AgvId::new("agv_1"),
        StationId::new(1),
        StationId::new(2),
        SimTime::from_hm(8, 0),
        3.0,
        "p1".to_string(),
    );
    assert_eq!(record.format_line(), "agv_1-1-2-08:00-3.0-p1");
}

#[test]
fn move_record_formats_empty_payload_info_as_empty_sentinel() {
    let record = MoveRecord::new(
        AgvId::new("agv_1"),
        StationId::new(2),
        StationId::new(9),
        SimTime::from_hm(8, 5),
        0.0,
        MoveRecord::payload_info_for(&[]),
    );
    assert_eq!(record.format_line(), "agv_1-2-9-08:05-0.0-empty");
}

#[test]
fn payload_info_for_comma_joins_multiple_ids() {
    let ids = vec![agvsim_core::PayloadId::new("p1"), agvsim_core::PayloadId::new("p2")];
    assert_eq!(MoveRecord::payload_info_for(&ids), "p1,p2");
}

#[test]
fn avg_delivery_by_priority_is_zero_with_no_deliveries() {
    let metrics = Metrics::new();
    let avgs = metrics.avg_delivery_by_priority();
    assert_eq!(avgs[&1], 0.0);
    assert_eq!(avgs[&2], 0.0);
    assert_eq!(avgs[&3], 0.0);
}

#[test]
fn avg_delivery_by_priority_averages_recorded_latencies() {
    let mut metrics = Metrics::new();
    metrics.record_delivery(1, 60);
    metrics.record_delivery(1, 80);
    metrics.record_delivery(2, 100);

    let avgs = metrics.avg_delivery_by_priority();
    assert_eq!(avgs[&1], 70.0);
    assert_eq!(avgs[&2], 100.0);
    assert_eq!(avgs[&3], 0.0);
    assert_eq!(metrics.delivered_count(), 3);
}

#[test]
fn charge_counts_track_per_agv_totals() {
    let mut metrics = Metrics::new();
    metrics.set_charge_count(AgvId::new("agv_1"), 2);
    metrics.set_charge_count(AgvId::new("agv_2"), 0);
    assert_eq!(metrics.total_charge_count(), 2);
    assert_eq!(metrics.charge_counts()[&AgvId::new("agv_1")], 2);
}

#[test]
fn makespan_is_minutes_since_sim_start() {
    let mut metrics = Metrics::new();
    metrics.set_end_time(SimTime::from_hm(9, 5));
    assert_eq!(metrics.makespan_minutes(), 65);
}
