//! One entry in the execution log: a single hop-initiating action.

use agvsim_core::{AgvId, SimTime, StationId};

/// A single AGV hop, emitted the tick it is *initiated* (not when it
/// completes). One record per call to `Agv::start_move`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub agv_id: AgvId,
    pub from: StationId,
    pub to: StationId,
    pub at: SimTime,
    pub load: f64,
    /// Comma-joined payload ids the AGV is carrying on this hop, or
    /// `"empty"` for an unladen reposition move (e.g. rule 1's critical
    /// charge dash or rule 4's preventive charge detour).
    pub payload_info: String,
}

impl MoveRecord {
    pub fn new(agv_id: AgvId, from: StationId, to: StationId, at: SimTime, load: f64, payload_info: String) -> Self {
        Self { agv_id, from, to, at, load, payload_info }
    }

    /// Build the `payload_info` field from a set of held payload ids:
    /// comma-joined, or `"empty"` if none.
    pub fn payload_info_for(held: &[agvsim_core::PayloadId]) -> String {
        if held.is_empty() {
            "empty".to_string()
        } else {
            held.iter().map(|p| p.as_str()).collect::<Vec<_>>().join(",")
        }
    }

    /// Format per the canonical move-log line:
    /// `"{agv_id}-{from}-{to}-{HH:MM}-{load:.1}-{payload_info}"`.
    pub fn format_line(&self) -> String {
        format!(
            "{}-{}-{}-{}-{:.1}-{}",
            self.agv_id, self.from, self.to, self.at, self.load, self.payload_info
        )
    }
}
