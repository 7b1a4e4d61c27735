//! Fixed physical and dispatch-policy constants.
//!
//! These are the fixed constants the dispatch policy is built around. They are plain
//! `const`s rather than fields on a config struct because every formula in
//! `agvsim-fleet`/`agvsim-dispatch` references them directly; a
//! [`crate::CoreError`]-free, allocation-free set of compile-time constants
//! keeps the hot dispatch loop simple. Scenario-level overrides (different
//! fleets, networks, payload files) live in `agvsim-cli`'s `SimulationConfig`
//! instead of here — these are the physics, not the scenario.

/// Maximum total payload weight an AGV may carry at once.
pub const MAX_CAPACITY: f64 = 10.0;

/// Minutes to traverse one unit of distance while carrying no load.
pub const EMPTY_TRAVEL_MIN_PER_UNIT: f64 = 5.0;

/// Minutes to traverse one unit of distance at full load.
pub const FULL_TRAVEL_MIN_PER_UNIT: f64 = 10.0;

/// Minutes a full charge takes, regardless of starting battery level.
pub const CHARGE_DURATION_MIN: f64 = 15.0;

/// Reference minutes used to derive the battery consumption-per-unit rate
/// (`100.0 / DISCHARGE_REFERENCE_MIN`): a fully charged, unladen AGV
/// travelling continuously would discharge in this many minutes.
pub const DISCHARGE_REFERENCE_MIN: f64 = 45.0;

/// Battery percentage below which an idle, unladen AGV heads for a
/// preventive charge (dispatch rule 4).
pub const LOW_BATTERY_THRESHOLD: f64 = 30.0;

/// Minimum battery percentage required before an AGV may accept a pickup
/// (dispatch rule 5).
pub const MIN_BATTERY_FOR_PICKUP: f64 = 20.0;

/// Battery percentage below which an AGV abandons everything else and
/// heads straight for the charging station (dispatch rule 1).
pub const CRITICAL_BATTERY: f64 = 10.0;

/// The station id designated as the charging station.
pub const CHARGING_STATION: u32 = 9;

/// The simulation's fixed start time, as minutes since midnight (08:00).
pub const SIM_START_MIN: u32 = 8 * 60;

/// Consecutive ticks with no progress in either dispatch phase before the
/// scheduler declares deadlock and terminates.
pub const MAX_STUCK: u32 = 5;

/// Fallback clock advance, in minutes, used when no AGV is busy and no
/// future payload dispatch time exists to advance toward.
pub const FALLBACK_ADVANCE_MIN: u32 = 5;
