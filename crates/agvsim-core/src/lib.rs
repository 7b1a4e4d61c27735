//! `agvsim-core` — foundational types for the `agvsim` AGV fleet scheduler.
//!
//! This crate is a dependency of every other `agvsim-*` crate.  It
//! intentionally has no `agvsim-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `StationId`, `AgvId`, `PayloadId`                      |
//! | [`time`]      | `SimTime`, `clock_str`                                 |
//! | [`constants`] | The fixed physical/dispatch constants                  |
//! | [`error`]     | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod constants;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AgvId, PayloadId, StationId};
pub use time::SimTime;
