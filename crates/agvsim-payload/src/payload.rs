//! A single payload descriptor.

use std::cmp::Ordering;

use agvsim_core::{PayloadId, SimTime, StationId};

/// Priority, 1 highest. Only 1, 2, 3 are valid; the loader rejects anything
/// else as [`crate::PayloadError::InputInvalid`].
pub type Priority = u8;

/// An immutable payload descriptor plus its one mutable bit: `delivered`.
///
/// `Ord`/`PartialOrd` sort by `(priority ascending, dispatch_time ascending)`
/// — the registry's canonical order — so a `Vec<Payload>` built from a
/// CSV can be sorted once at load time and never resorted.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Payload {
    pub id: PayloadId,
    pub source: StationId,
    pub destination: StationId,
    pub weight: f64,
    pub priority: Priority,
    pub dispatch_time: SimTime,
    pub delivered: bool,
    /// `true` once some AGV has been assigned to pick this payload up,
    /// whether or not it has physically attached it yet. Keeps a second
    /// AGV from planning a pickup of the same payload while it is in
    /// transit. Cleared only if the pickup is aborted.
    pub claimed: bool,
}

impl Payload {
    pub fn new(
        id: PayloadId,
        source: StationId,
        destination: StationId,
        weight: f64,
        priority: Priority,
        dispatch_time: SimTime,
    ) -> Self {
        Self {
            id,
            source,
            destination,
            weight,
            priority,
            dispatch_time,
            delivered: false,
            claimed: false,
        }
    }

    /// `true` iff not yet delivered, not already claimed by another AGV,
    /// and due at or before `now`.
    pub fn is_pending_at(&self, now: SimTime) -> bool {
        !self.delivered && !self.claimed && self.dispatch_time <= now
    }
}

// `weight: f64` has no total order, but payload weights are never NaN in
// practice (the loader rejects non-finite weights), so `Eq` is a safe marker
// here — required because `Ord` has `Eq` as a supertrait.
impl Eq for Payload {}

impl PartialOrd for Payload {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Payload {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.dispatch_time.cmp(&other.dispatch_time))
    }
}
