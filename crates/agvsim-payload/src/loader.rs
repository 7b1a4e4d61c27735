//! CSV payload loader.
//!
//! # CSV format
//!
//! One row per payload.
//!
//! ```csv
//! id,source,destination,weight,priority,dispatch_time
//! p1,1,2,3.0,1,08:00
//! p2,3,9,5.5,2,08:15
//! ```
//!
//! Every row is validated against [`MAX_CAPACITY`], the supplied
//! [`Network`]'s known stations, and the rest of the payload batch (distinct
//! source/destination, unique id). Violations are collected across the
//! whole file and reported together as one [`PayloadError::InputInvalid`],
//! rather than failing on the first bad row — a user fixing a malformed
//! input file wants to see every problem in one pass, not one per run.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use agvsim_core::{constants::MAX_CAPACITY, PayloadId, SimTime, StationId};
use agvsim_network::Network;

use crate::{Payload, PayloadError};

#[derive(Deserialize)]
struct PayloadRecord {
    id: String,
    source: u32,
    destination: u32,
    weight: f64,
    priority: u8,
    dispatch_time: String,
}

/// Load payloads from a CSV file, validating every row against `network`.
pub fn load_payloads_csv(path: &Path, network: &Network) -> Result<Vec<Payload>, PayloadError> {
    let file = std::fs::File::open(path)?;
    load_payloads_reader(file, network)
}

/// Like [`load_payloads_csv`] but accepts any `Read` source (e.g. a
/// `std::io::Cursor` in tests).
pub fn load_payloads_reader<R: Read>(reader: R, network: &Network) -> Result<Vec<Payload>, PayloadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut payloads = Vec::new();
    let mut errors = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for (row_num, result) in csv_reader.deserialize::<PayloadRecord>().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                errors.push(format!("row {}: {e}", row_num + 1));
                continue;
            }
        };

        match validate(record, row_num + 1, network, &mut seen_ids) {
            Ok(payload) => payloads.push(payload),
            Err(msgs) => errors.extend(msgs),
        }
    }

    if !errors.is_empty() {
        return Err(PayloadError::InputInvalid(errors.join("; ")));
    }

    Ok(payloads)
}

fn validate(
    record: PayloadRecord,
    row_num: usize,
    network: &Network,
    seen_ids: &mut HashSet<String>,
) -> Result<Payload, Vec<String>> {
    let mut errors = Vec::new();

    if !seen_ids.insert(record.id.clone()) {
        errors.push(format!("row {row_num}: duplicate payload id {:?}", record.id));
    }

    let source = StationId::new(record.source);
    let destination = StationId::new(record.destination);

    if !network.contains(source) {
        errors.push(format!("row {row_num}: unknown source station {source}"));
    }
    if !network.contains(destination) {
        errors.push(format!("row {row_num}: unknown destination station {destination}"));
    }
    if source == destination {
        errors.push(format!("row {row_num}: source and destination must differ ({source})"));
    }
    if !(record.weight > 0.0 && record.weight <= MAX_CAPACITY) {
        errors.push(format!(
            "row {row_num}: weight {} out of range (0, {MAX_CAPACITY}]",
            record.weight
        ));
    }
    if !(1..=3).contains(&record.priority) {
        errors.push(format!("row {row_num}: priority {} must be 1, 2, or 3", record.priority));
    }

    let dispatch_time = match SimTime::parse(record.dispatch_time.trim()) {
        Some(t) => Some(t),
        None => {
            errors.push(format!("row {row_num}: invalid dispatch_time {:?}", record.dispatch_time));
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Payload::new(
        PayloadId::new(record.id),
        source,
        destination,
        record.weight,
        record.priority,
        dispatch_time.expect("validated above"),
    ))
}
