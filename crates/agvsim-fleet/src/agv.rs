//! A single AGV's state machine.

use agvsim_core::{
    constants::{
        CHARGE_DURATION_MIN, CHARGING_STATION, DISCHARGE_REFERENCE_MIN, EMPTY_TRAVEL_MIN_PER_UNIT,
        FULL_TRAVEL_MIN_PER_UNIT, MAX_CAPACITY,
    },
    AgvId, PayloadId, SimTime, StationId,
};

use crate::FleetError;

/// What an AGV is currently doing. `Idle` is the only mode in which a new
/// transition (other than `complete_move`/`complete_charge`) may begin.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgvMode {
    Idle,
    Moving,
    Charging,
}

/// One AGV's full mutable state.
///
/// Invariants enforced by the transition methods (never by direct field
/// mutation, since all fields are private): load equals the sum of held
/// payload weights and never exceeds [`MAX_CAPACITY`]; `mode = Charging`
/// implies `station == CHARGING_STATION`; `mode = Moving` excludes
/// `Charging`; `battery` stays within `[0, 100]`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agv {
    id: AgvId,
    station: StationId,
    destination: StationId,
    battery: f64,
    load: f64,
    held: Vec<PayloadId>,
    busy_until: SimTime,
    mode: AgvMode,
    charge_count: u32,
}

impl Agv {
    /// A new AGV, idle at `station`, battery full, carrying nothing.
    pub fn new(id: AgvId, station: StationId, start: SimTime) -> Self {
        Self::with_battery(id, station, start, 100.0)
    }

    /// A new AGV, idle at `station` as of `start`, carrying nothing, with
    /// `battery` set directly rather than assumed full. Used by fleet
    /// rosters that specify a starting battery level.
    pub fn with_battery(id: AgvId, station: StationId, start: SimTime, battery: f64) -> Self {
        Self {
            id,
            station,
            destination: station,
            battery: battery.clamp(0.0, 100.0),
            load: 0.0,
            held: Vec::new(),
            busy_until: start,
            mode: AgvMode::Idle,
            charge_count: 0,
        }
    }

    pub fn id(&self) -> &AgvId {
        &self.id
    }

    pub fn station(&self) -> StationId {
        self.station
    }

    pub fn destination(&self) -> StationId {
        self.destination
    }

    pub fn battery(&self) -> f64 {
        self.battery
    }

    pub fn load(&self) -> f64 {
        self.load
    }

    pub fn held(&self) -> &[PayloadId] {
        &self.held
    }

    pub fn busy_until(&self) -> SimTime {
        self.busy_until
    }

    pub fn mode(&self) -> AgvMode {
        self.mode
    }

    pub fn charge_count(&self) -> u32 {
        self.charge_count
    }

    /// `true` iff `mode = Idle` and `now >= busy_until` — the dispatch-phase
    /// definition of "available for a new action this tick".
    pub fn is_idle_at(&self, now: SimTime) -> bool {
        self.mode == AgvMode::Idle && now >= self.busy_until
    }

    /// `true` iff `mode != Idle` and the current action is due to complete.
    pub fn is_due_at(&self, now: SimTime) -> bool {
        self.mode != AgvMode::Idle && now >= self.busy_until
    }

    /// Minutes to cover `distance` units at the AGV's current `load`.
    ///
    /// `t_per_unit = EMPTY_TRAVEL_MIN_PER_UNIT + (load / MAX_CAPACITY) *
    /// (FULL_TRAVEL_MIN_PER_UNIT - EMPTY_TRAVEL_MIN_PER_UNIT)`, rounded up
    /// to a whole minute so `busy_until` always lands on an integral clock
    /// tick.
    pub fn travel_time_min(&self, distance: f64) -> u32 {
        let per_unit = EMPTY_TRAVEL_MIN_PER_UNIT
            + (self.load / MAX_CAPACITY) * (FULL_TRAVEL_MIN_PER_UNIT - EMPTY_TRAVEL_MIN_PER_UNIT);
        (per_unit * distance).ceil() as u32
    }

    /// Battery percentage consumed by a segment that takes `travel_time_min`
    /// minutes at the AGV's current load, clamped to 30.0 as a ceiling on
    /// any single segment's drain.
    fn battery_used(&self, travel_time_min: u32) -> f64 {
        let consumption_per_unit = 100.0 / DISCHARGE_REFERENCE_MIN;
        let load_factor = 1.0 + self.load / MAX_CAPACITY;
        let used = consumption_per_unit * load_factor * travel_time_min as f64 / 10.0;
        used.min(30.0)
    }

    /// Begin a one-hop move toward `next_station`, `distance` units away.
    ///
    /// # Errors
    ///
    /// [`FleetError::NotIdle`] if `mode != Idle`;
    /// [`FleetError::BatteryExhausted`] if `battery <= 0.0`.
    pub fn start_move(&mut self, next_station: StationId, distance: f64, now: SimTime) -> Result<(), FleetError> {
        if self.mode != AgvMode::Idle {
            return Err(FleetError::NotIdle(self.id.clone()));
        }
        if self.battery <= 0.0 {
            return Err(FleetError::BatteryExhausted(self.id.clone()));
        }

        let travel_time = self.travel_time_min(distance);
        let used = self.battery_used(travel_time);

        self.mode = AgvMode::Moving;
        self.destination = next_station;
        self.busy_until = now + travel_time;
        self.battery = (self.battery - used).max(0.0);
        Ok(())
    }

    /// Complete an in-progress move: arrive at `destination`, go Idle.
    ///
    /// # Errors
    ///
    /// [`FleetError::NotMoving`] if `mode != Moving` or the move is not yet due.
    pub fn complete_move(&mut self, now: SimTime) -> Result<(), FleetError> {
        if self.mode != AgvMode::Moving || now < self.busy_until {
            return Err(FleetError::NotMoving(self.id.clone()));
        }
        self.station = self.destination;
        self.mode = AgvMode::Idle;
        Ok(())
    }

    /// Begin charging at the charging station.
    ///
    /// # Errors
    ///
    /// [`FleetError::NotIdle`] if `mode != Idle`; [`FleetError::NotAtChargingStation`]
    /// if not at [`CHARGING_STATION`]; this is a no-op precondition violation,
    /// never called by the dispatch rule that already checks `battery < 100`.
    pub fn start_charge(&mut self, now: SimTime) -> Result<(), FleetError> {
        if self.mode != AgvMode::Idle {
            return Err(FleetError::NotIdle(self.id.clone()));
        }
        if self.station.0 != CHARGING_STATION {
            return Err(FleetError::NotAtChargingStation(self.id.clone()));
        }
        self.mode = AgvMode::Charging;
        self.busy_until = now + CHARGE_DURATION_MIN as u32;
        self.charge_count += 1;
        Ok(())
    }

    /// Complete an in-progress charge: battery to 100, go Idle.
    ///
    /// # Errors
    ///
    /// [`FleetError::NotCharging`] if `mode != Charging` or not yet due.
    pub fn complete_charge(&mut self, now: SimTime) -> Result<(), FleetError> {
        if self.mode != AgvMode::Charging || now < self.busy_until {
            return Err(FleetError::NotCharging(self.id.clone()));
        }
        self.battery = 100.0;
        self.mode = AgvMode::Idle;
        Ok(())
    }

    /// Pick up `payload` (by id and weight), adding it to `held`.
    ///
    /// # Errors
    ///
    /// [`FleetError::NotIdle`] if not idle; [`FleetError::CapacityOverflow`]
    /// if `load + weight` would exceed [`MAX_CAPACITY`].
    pub fn attach(&mut self, payload: PayloadId, weight: f64) -> Result<(), FleetError> {
        if self.mode != AgvMode::Idle {
            return Err(FleetError::NotIdle(self.id.clone()));
        }
        if self.load + weight > MAX_CAPACITY {
            return Err(FleetError::CapacityOverflow(self.id.clone()));
        }
        self.load += weight;
        self.held.push(payload);
        Ok(())
    }

    /// Release `payload` from `held`. Caller is responsible for marking the
    /// payload delivered in the registry when `station == payload.destination`.
    ///
    /// # Errors
    ///
    /// [`FleetError::NotHeld`] if `payload` is not currently held.
    pub fn detach(&mut self, payload: &PayloadId, weight: f64) -> Result<(), FleetError> {
        let idx = self
            .held
            .iter()
            .position(|p| p == payload)
            .ok_or_else(|| FleetError::NotHeld(self.id.clone(), payload.clone()))?;
        self.held.remove(idx);
        self.load = (self.load - weight).max(0.0);
        Ok(())
    }
}
