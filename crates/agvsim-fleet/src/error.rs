//! Fleet-subsystem error type.

use thiserror::Error;

use agvsim_core::{AgvId, PayloadId};

/// Errors produced by `agvsim-fleet`. These are precondition violations on
/// [`crate::Agv`]'s transition methods — the dispatch loop checks every
/// precondition before calling a transition, so in normal operation these
/// are defensive, not expected.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("AGV {0} is not idle")]
    NotIdle(AgvId),

    #[error("AGV {0} is not moving, or its move is not yet due")]
    NotMoving(AgvId),

    #[error("AGV {0} is not charging, or its charge is not yet due")]
    NotCharging(AgvId),

    #[error("AGV {0} is not at the charging station")]
    NotAtChargingStation(AgvId),

    #[error("AGV {0} has exhausted its battery")]
    BatteryExhausted(AgvId),

    #[error("attaching a payload to AGV {0} would exceed its capacity")]
    CapacityOverflow(AgvId),

    #[error("payload {1} is not held by AGV {0}")]
    NotHeld(AgvId, PayloadId),

    #[error("AGV {0} not found in fleet")]
    UnknownAgv(AgvId),
}

pub type FleetResult<T> = Result<T, FleetError>;
