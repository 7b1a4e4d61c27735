//! Framework error type.
//!
//! Sub-crates define their own error enums and convert them into `CoreError`
//! via `From` impls, or keep them separate and wrap `CoreError` as one
//! variant. Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

use crate::{AgvId, PayloadId, StationId};

/// The top-level error type for `agvsim-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("AGV {0} not found")]
    AgvNotFound(AgvId),

    #[error("payload {0} not found")]
    PayloadNotFound(PayloadId),

    #[error("station {0} not found")]
    StationNotFound(StationId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `agvsim-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
