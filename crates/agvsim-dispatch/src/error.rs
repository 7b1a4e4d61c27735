//! Dispatch-subsystem error type.
//!
//! `DispatchError` wraps each lower crate's error type so a caller only needs
//! to match on one enum.

use thiserror::Error;

use agvsim_fleet::FleetError;
use agvsim_network::NetworkError;
use agvsim_payload::PayloadError;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("fleet error: {0}")]
    Fleet(#[from] FleetError),

    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
