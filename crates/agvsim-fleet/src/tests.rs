//! Unit tests for `agvsim-fleet`.

use agvsim_core::{AgvId, PayloadId, SimTime, StationId};

use crate::{Agv, AgvMode, Fleet};

fn new_agv() -> Agv {
    Agv::new(AgvId::new("agv_1"), StationId::new(1), SimTime::SIM_START)
}

#[test]
fn new_agv_starts_idle_full_battery_empty_load() {
    let agv = new_agv();
    assert_eq!(agv.mode(), AgvMode::Idle);
    assert_eq!(agv.battery(), 100.0);
    assert_eq!(agv.load(), 0.0);
    assert!(agv.held().is_empty());
    assert_eq!(agv.station(), StationId::new(1));
    assert_eq!(agv.destination(), StationId::new(1));
}

#[test]
fn travel_time_matches_scenario_one_arithmetic() {
    let mut agv = new_agv();
    agv.attach(PayloadId::new("p1"), 3.0).unwrap();
    // ceil((5 + 3/10*5) * 10) = ceil(65) = 65
    assert_eq!(agv.travel_time_min(10.0), 65);
}

#[test]
fn start_move_sets_moving_and_busy_until() {
    let mut agv = new_agv();
    let now = SimTime::SIM_START;
    agv.start_move(StationId::new(2), 10.0, now).unwrap();
    assert_eq!(agv.mode(), AgvMode::Moving);
    assert_eq!(agv.destination(), StationId::new(2));
    assert_eq!(agv.busy_until(), now.offset(50)); // ceil(5*10) = 50 at zero load
    assert!(agv.battery() < 100.0);
}

#[test]
fn complete_move_before_due_fails() {
    let mut agv = new_agv();
    let now = SimTime::SIM_START;
    agv.start_move(StationId::new(2), 10.0, now).unwrap();
    assert!(agv.complete_move(now).is_err());
}

#[test]
fn complete_move_arrives_and_goes_idle() {
    let mut agv = new_agv();
    let now = SimTime::SIM_START;
    agv.start_move(StationId::new(2), 10.0, now).unwrap();
    let due = agv.busy_until();
    agv.complete_move(due).unwrap();
    assert_eq!(agv.mode(), AgvMode::Idle);
    assert_eq!(agv.station(), StationId::new(2));
}

#[test]
fn start_charge_requires_charging_station() {
    let mut agv = new_agv();
    let err = agv.start_charge(SimTime::SIM_START).unwrap_err();
    assert!(matches!(err, crate::FleetError::NotAtChargingStation(_)));
}

#[test]
fn start_charge_increments_charge_count() {
    let mut agv = Agv::new(AgvId::new("agv_1"), StationId::new(9), SimTime::SIM_START);
    agv.start_charge(SimTime::SIM_START).unwrap();
    assert_eq!(agv.mode(), AgvMode::Charging);
    assert_eq!(agv.charge_count(), 1);
}

#[test]
fn complete_charge_restores_full_battery() {
    let mut agv = Agv::new(AgvId::new("agv_1"), StationId::new(9), SimTime::SIM_START);
    agv.start_charge(SimTime::SIM_START).unwrap();
    let due = agv.busy_until();
    agv.complete_charge(due).unwrap();
    assert_eq!(agv.battery(), 100.0);
    assert_eq!(agv.mode(), AgvMode::Idle);
}

#[test]
fn attach_rejects_overflow() {
    let mut agv = new_agv();
    agv.attach(PayloadId::new("p1"), 8.0).unwrap();
    let err = agv.attach(PayloadId::new("p2"), 5.0).unwrap_err();
    assert!(matches!(err, crate::FleetError::CapacityOverflow(_)));
}

#[test]
fn detach_removes_from_held_and_reduces_load() {
    let mut agv = new_agv();
    let p1 = PayloadId::new("p1");
    agv.attach(p1.clone(), 3.0).unwrap();
    agv.detach(&p1, 3.0).unwrap();
    assert!(agv.held().is_empty());
    assert_eq!(agv.load(), 0.0);
}

#[test]
fn detach_unknown_payload_fails() {
    let mut agv = new_agv();
    let err = agv.detach(&PayloadId::new("ghost"), 1.0).unwrap_err();
    assert!(matches!(err, crate::FleetError::NotHeld(_, _)));
}

#[test]
fn fleet_lookup_finds_by_id() {
    let fleet = Fleet::new(vec![new_agv()]);
    assert!(fleet.get(&AgvId::new("agv_1")).is_some());
    assert!(fleet.get(&AgvId::new("agv_2")).is_none());
}

#[test]
fn fleet_preserves_registration_order() {
    let a = Agv::new(AgvId::new("agv_1"), StationId::new(1), SimTime::SIM_START);
    let b = Agv::new(AgvId::new("agv_2"), StationId::new(2), SimTime::SIM_START);
    let fleet = Fleet::new(vec![a, b]);
    let ids: Vec<_> = fleet.iter().map(|a| a.id().as_str().to_string()).collect();
    assert_eq!(ids, vec!["agv_1", "agv_2"]);
}
