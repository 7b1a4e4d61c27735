//! Unit tests for `agvsim-payload`.

use std::io::Cursor;

use agvsim_core::{PayloadId, SimTime, StationId};
use agvsim_network::NetworkBuilder;

use crate::{load_payloads_reader, Payload, PayloadRegistry};

fn test_network() -> agvsim_network::Network {
    let mut b = NetworkBuilder::new();
    for id in [1, 2, 3, 9] {
        b.add_station(StationId::new(id), id == 9);
    }
    b.add_edge(StationId::new(1), StationId::new(2), 10.0).unwrap();
    b.add_edge(StationId::new(2), StationId::new(9), 5.0).unwrap();
    b.build()
}

#[test]
fn registry_sorts_by_priority_then_dispatch_time() {
    let p_low = Payload::new(PayloadId::new("low"), StationId::new(1), StationId::new(2), 1.0, 3, SimTime::from_hm(8, 0));
    let p_high_late = Payload::new(PayloadId::new("high_late"), StationId::new(1), StationId::new(2), 1.0, 1, SimTime::from_hm(9, 0));
    let p_high_early = Payload::new(PayloadId::new("high_early"), StationId::new(1), StationId::new(2), 1.0, 1, SimTime::from_hm(8, 0));

    let registry = PayloadRegistry::new(vec![p_low, p_high_late, p_high_early]);
    let ids: Vec<_> = registry.iter().map(|p| p.id.as_str().to_string()).collect();
    assert_eq!(ids, vec!["high_early", "high_late", "low"]);
}

#[test]
fn undelivered_at_filters_by_dispatch_time_and_delivered_flag() {
    let mut p1 = Payload::new(PayloadId::new("p1"), StationId::new(1), StationId::new(2), 1.0, 1, SimTime::from_hm(8, 0));
    let p2 = Payload::new(PayloadId::new("p2"), StationId::new(1), StationId::new(2), 1.0, 1, SimTime::from_hm(9, 0));
    p1.delivered = true;

    let registry = PayloadRegistry::new(vec![p1, p2]);
    let pending: Vec<_> = registry.undelivered_at(SimTime::from_hm(8, 30)).collect();
    assert!(pending.is_empty());

    let pending: Vec<_> = registry.undelivered_at(SimTime::from_hm(9, 0)).collect();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id.as_str(), "p2");
}

#[test]
fn mark_delivered_flips_the_flag() {
    let p1 = Payload::new(PayloadId::new("p1"), StationId::new(1), StationId::new(2), 1.0, 1, SimTime::from_hm(8, 0));
    let mut registry = PayloadRegistry::new(vec![p1]);
    assert!(!registry.all_delivered());
    registry.mark_delivered(&PayloadId::new("p1")).unwrap();
    assert!(registry.all_delivered());
}

#[test]
fn claimed_payload_drops_out_of_undelivered_at() {
    let p1 = Payload::new(PayloadId::new("p1"), StationId::new(1), StationId::new(2), 1.0, 1, SimTime::from_hm(8, 0));
    let mut registry = PayloadRegistry::new(vec![p1]);

    let now = SimTime::from_hm(8, 30);
    assert_eq!(registry.undelivered_at(now).count(), 1);

    registry.claim(&PayloadId::new("p1")).unwrap();
    assert_eq!(registry.undelivered_at(now).count(), 0, "a claimed payload must not be eligible for a second pickup");

    registry.unclaim(&PayloadId::new("p1")).unwrap();
    assert_eq!(registry.undelivered_at(now).count(), 1, "unclaiming restores eligibility");
}

#[test]
fn loader_parses_valid_rows() {
    let csv = "id,source,destination,weight,priority,dispatch_time\n\
               p1,1,2,3.0,1,08:00\n\
               p2,2,9,5.5,2,08:15\n";
    let net = test_network();
    let payloads = load_payloads_reader(Cursor::new(csv), &net).unwrap();
    assert_eq!(payloads.len(), 2);
    assert_eq!(payloads[0].id.as_str(), "p1");
    assert_eq!(payloads[1].weight, 5.5);
}

#[test]
fn loader_rejects_unknown_station() {
    let csv = "id,source,destination,weight,priority,dispatch_time\n\
               p1,1,99,3.0,1,08:00\n";
    let net = test_network();
    let err = load_payloads_reader(Cursor::new(csv), &net).unwrap_err();
    assert!(err.to_string().contains("unknown destination station"));
}

#[test]
fn loader_rejects_overweight_payload() {
    let csv = "id,source,destination,weight,priority,dispatch_time\n\
               p1,1,2,15.0,1,08:00\n";
    let net = test_network();
    let err = load_payloads_reader(Cursor::new(csv), &net).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn loader_rejects_duplicate_ids() {
    let csv = "id,source,destination,weight,priority,dispatch_time\n\
               p1,1,2,3.0,1,08:00\n\
               p1,2,1,3.0,1,08:00\n";
    let net = test_network();
    let err = load_payloads_reader(Cursor::new(csv), &net).unwrap_err();
    assert!(err.to_string().contains("duplicate payload id"));
}

#[test]
fn loader_collects_multiple_errors_in_one_pass() {
    let csv = "id,source,destination,weight,priority,dispatch_time\n\
               p1,1,99,15.0,9,bad\n";
    let net = test_network();
    let err = load_payloads_reader(Cursor::new(csv), &net).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("unknown destination"));
    assert!(msg.contains("out of range"));
    assert!(msg.contains("priority"));
    assert!(msg.contains("dispatch_time"));
}
