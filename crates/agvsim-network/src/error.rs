//! Network-subsystem error type.

use thiserror::Error;

use agvsim_core::StationId;

/// Errors produced by `agvsim-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: StationId, to: StationId },

    #[error("station {0} not found in network")]
    UnknownStation(StationId),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
