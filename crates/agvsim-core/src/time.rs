//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as whole minutes since midnight (`SimTime(pub u32)`),
//! a monotonically increasing counter at the domain's native resolution —
//! the dispatch policy's formulas (travel
//! time, charge duration, battery drain) are all expressed in minutes, so
//! keeping the canonical time unit an integer minute count means all
//! schedule arithmetic is exact (no floating-point drift) and comparisons
//! are O(1). Wall-clock `HH:MM` formatting happens only at log-emission
//! time (see [`SimTime::clock_str`]), never during simulation.

use std::fmt;

use crate::constants::SIM_START_MIN;

/// An absolute point in simulated time, in minutes since midnight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u32);

impl SimTime {
    /// The simulation's fixed start time, 08:00.
    pub const SIM_START: SimTime = SimTime(SIM_START_MIN);

    /// Construct from an `HH:MM` wall-clock pair.
    #[inline]
    pub fn from_hm(hour: u32, minute: u32) -> Self {
        SimTime(hour * 60 + minute)
    }

    /// Parse an `"HH:MM"` string, e.g. `"08:00"`.
    pub fn parse(s: &str) -> Option<Self> {
        let (h, m) = s.split_once(':')?;
        let hour: u32 = h.parse().ok()?;
        let minute: u32 = m.parse().ok()?;
        if minute >= 60 {
            return None;
        }
        Some(SimTime::from_hm(hour, minute))
    }

    /// Return the time `n` minutes after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> SimTime {
        SimTime(self.0 + n)
    }

    /// Minutes elapsed from `earlier` to `self`. Saturates at 0 rather than
    /// panicking — callers computing latency never want an underflow panic
    /// to abort an otherwise-successful run.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u32 {
        self.0.saturating_sub(earlier.0)
    }

    /// Minutes elapsed since the fixed simulation start (08:00). Used to
    /// compute the makespan.
    #[inline]
    pub fn since_start(self) -> u32 {
        self.since(SimTime::SIM_START)
    }

    /// Format as `HH:MM`, wrapping past 24:00 into the next day's hours
    /// (the scheduler has no notion of calendar days, only elapsed minutes).
    pub fn clock_str(self) -> String {
        let hour = (self.0 / 60) % 24;
        let minute = self.0 % 60;
        format!("{hour:02}:{minute:02}")
    }
}

impl std::ops::Add<u32> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u32) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: SimTime) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clock_str())
    }
}
