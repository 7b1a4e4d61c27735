//! Payload-subsystem error type.

use thiserror::Error;

use agvsim_core::PayloadId;

/// Errors produced by `agvsim-payload`, including CSV parsing and loading.
///
/// [`PayloadError::InputInvalid`] collects every validation failure across
/// a load rather than stopping at the first bad row — see
/// [`crate::loader::load_payloads_reader`].
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("invalid payload input: {0}")]
    InputInvalid(String),

    #[error("payload {0} not found in registry")]
    UnknownPayload(PayloadId),

    #[error("CSV parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PayloadResult<T> = Result<T, PayloadError>;
