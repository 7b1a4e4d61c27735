//! `agvsim-metrics` — the move-log stream and metrics recorder.
//!
//! # Crate layout
//!
//! | Module          | Contents                                  |
//! |-----------------|---------------------------------------------|
//! | [`move_record`] | `MoveRecord`, the canonical log line format |
//! | [`metrics`]     | `Metrics` — latencies, charge counts, makespan |

pub mod metrics;
pub mod move_record;

#[cfg(test)]
mod tests;

pub use metrics::Metrics;
pub use move_record::MoveRecord;
